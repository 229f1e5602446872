//! Value Objects - Immutable, identity-less domain primitives

mod route_id;
mod time_of_day;
mod timezone;
mod travel_mode;

pub use route_id::RouteId;
pub use time_of_day::TimeOfDay;
pub use timezone::Timezone;
pub use travel_mode::TravelMode;
