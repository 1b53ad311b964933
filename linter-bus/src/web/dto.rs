//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteId, StopId};
use crate::rules::LongNameMerge;

/// Route ID resolved from a short name.
#[derive(Debug, Serialize)]
pub struct RouteIdResponse {
    /// The short name that was resolved
    pub route_short_name: String,

    /// Canonical route ID
    pub route_id: RouteId,
}

/// Short name published for a route.
#[derive(Debug, Serialize)]
pub struct ShortNameResponse {
    /// Canonical short name (e.g., "ZC")
    pub short_name: String,
}

/// Long name decision for a route merge.
#[derive(Debug, Serialize)]
pub struct LongNameResponse {
    /// Canonical route ID
    pub route_id: RouteId,

    /// Long name to keep, when the agency overrides the merge
    pub long_name: Option<String>,

    /// Whether the pipeline's default merge is overridden
    pub overrides_default: bool,
}

impl LongNameResponse {
    pub fn from_merge(route_id: RouteId, merge: LongNameMerge) -> Self {
        Self {
            route_id,
            long_name: merge.long_name().map(str::to_string),
            overrides_default: merge.overrides_default(),
        }
    }
}

/// Canonical stop ID.
#[derive(Debug, Serialize)]
pub struct StopIdResponse {
    pub stop_id: StopId,
}

/// Free text to clean.
#[derive(Debug, Deserialize)]
pub struct LabelRequest {
    pub text: String,
}

/// Cleaned text.
#[derive(Debug, Serialize)]
pub struct LabelResponse {
    pub text: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
