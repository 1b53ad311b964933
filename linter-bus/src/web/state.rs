//! Application state for the web layer.

use std::sync::Arc;

use crate::rules::AgencyRules;

/// Shared application state.
///
/// The rules are immutable, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    /// Agency rule set
    pub rules: Arc<dyn AgencyRules + Send + Sync>,
}

impl AppState {
    /// Create a new app state.
    pub fn new<R>(rules: R) -> Self
    where
        R: AgencyRules + Send + Sync + 'static,
    {
        Self {
            rules: Arc::new(rules),
        }
    }
}
