//! Application layer - Use cases and orchestration
//!
//! Contains the reminder decision logic (route filtering, candidate
//! selection, reminder scheduling, payload composition) and the port
//! definitions the orchestrator uses to reach the itinerary provider and
//! the notification sink.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
