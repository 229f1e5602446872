//! Domain layer for the bus reminder
//!
//! Contains the vocabulary of a reminder run: raw itinerary data, matched
//! itinerary legs, selection criteria, reminder plans and the notification
//! payloads handed to the sink. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
