//! Web layer for the agency rules.
//!
//! Exposes each extension point as a JSON endpoint so a feed pipeline
//! running in another process can call the rules.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
