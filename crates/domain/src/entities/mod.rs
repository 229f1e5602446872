//! Domain entities - The data a reminder run flows through

mod itinerary;
mod itinerary_leg;
mod notification;
mod reminder_plan;
mod selection;

pub use itinerary::{Itinerary, ItineraryRoute, ItineraryStep, RouteSegment, TransitDetails};
pub use itinerary_leg::ItineraryLeg;
pub use notification::{AlertNotification, NotificationPayload, ScheduledReminder};
pub use reminder_plan::ReminderPlan;
pub use selection::{BoundViolation, SelectionCriteria};
