//! Agency metadata provider.
//!
//! Constants the feed pipeline reads once per run: display name, color,
//! languages, route mode and feature switches.

mod color;
mod metadata;

pub use color::{AgencyColor, InvalidAgencyColor};
pub use metadata::{AgencyMetadata, Language, PipelineFlags, RouteType};
