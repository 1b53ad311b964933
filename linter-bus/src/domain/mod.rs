//! Domain types for the agency rules.
//!
//! Raw records come from the feed pipeline and are never modified; the
//! canonical identifiers are what the rules hand back.

mod error;
mod route;
mod stop;

pub use error::RuleError;
pub use route::{RawRoute, RouteFamily, RouteId};
pub use stop::{RawStop, StopId};
