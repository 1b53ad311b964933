//! Rule set for L'Inter (TaCL).

use regex::Regex;
use tracing::debug;

use crate::agency::AgencyMetadata;
use crate::clean;
use crate::domain::{RawRoute, RawStop, RouteId, RuleError, StopId};

use super::route::{ROUTE_ID_CLEANUP, canonical_short_name, resolve_long_name, resolve_route_id};
use super::stop::resolve_stop_id;
use super::{AgencyRules, LongNameMerge};

/// L'Inter rules: two route families, suffix-ranged stop IDs and French labels.
///
/// Holds no mutable state; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LInterRules {
    metadata: AgencyMetadata,
}

impl LInterRules {
    pub fn new(metadata: AgencyMetadata) -> Self {
        Self { metadata }
    }
}

impl Default for LInterRules {
    fn default() -> Self {
        Self::new(AgencyMetadata::linter())
    }
}

impl AgencyRules for LInterRules {
    fn metadata(&self) -> &AgencyMetadata {
        &self.metadata
    }

    fn unsupported_short_name_route_id(&self, route_short_name: &str) -> Option<RouteId> {
        match resolve_route_id(route_short_name) {
            Some(family) => Some(family.route_id()),
            None => {
                debug!(route_short_name, "Short name not in agency table");
                None
            }
        }
    }

    fn route_id_cleanup_regex(&self) -> Option<&Regex> {
        Some(&*ROUTE_ID_CLEANUP)
    }

    fn route_short_name(&self, route: &RawRoute) -> Result<String, RuleError> {
        if self.metadata.flags.use_route_id_for_route_short_name {
            return Ok(self.clean_route_id(&route.route_id).into_owned());
        }
        canonical_short_name(route).map(|family| family.short_name().to_string())
    }

    fn merge_route_long_name(&self, route_id: RouteId) -> LongNameMerge {
        resolve_long_name(route_id)
    }

    fn clean_trip_headsign(&self, trip_headsign: &str) -> String {
        clean::clean_headsign(trip_headsign)
    }

    fn clean_stop_name(&self, stop_name: &str) -> String {
        clean::clean_stop_name(stop_name)
    }

    fn stop_id(&self, stop: &RawStop) -> Result<StopId, RuleError> {
        resolve_stop_id(stop)
    }
}
