//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod itinerary_port;
mod notification_port;

#[cfg(test)]
pub use itinerary_port::MockItineraryPort;
pub use itinerary_port::{ItineraryPort, ItineraryQuery};
#[cfg(test)]
pub use notification_port::MockNotificationSinkPort;
pub use notification_port::{DeliveryReceipt, NotificationSinkPort};
