//! Agency rules plugged into the feed pipeline.
//!
//! [`AgencyRules`] lists the extension points the pipeline calls for each
//! route, stop and label. The default method bodies are the pipeline's own
//! behaviour; an agency overrides only what its feed needs.

mod linter;
mod route;
mod stop;

use std::borrow::Cow;

use regex::Regex;
use tracing::debug;

use crate::agency::AgencyMetadata;
use crate::domain::{RawRoute, RawStop, RouteId, RuleError, StopId};

pub use linter::LInterRules;
pub use route::{
    LongNameMerge, ROUTE_ID_CLEANUP, canonical_short_name, cleanup_route_id, resolve_long_name,
    resolve_route_id,
};
pub use stop::resolve_stop_id;

/// Extension points for one agency.
pub trait AgencyRules {
    /// Agency-wide constants.
    fn metadata(&self) -> &AgencyMetadata;

    /// Route ID for a short name.
    ///
    /// Numeric short names are their own ID; anything else is handed to
    /// [`unsupported_short_name_route_id`](Self::unsupported_short_name_route_id).
    fn route_id_from_short_name(&self, route_short_name: &str) -> Option<RouteId> {
        if !route_short_name.is_empty() && route_short_name.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = route_short_name.parse() {
                return Some(RouteId::new(id));
            }
        }
        self.unsupported_short_name_route_id(route_short_name)
    }

    /// Route ID for a short name the default derivation cannot parse.
    fn unsupported_short_name_route_id(&self, route_short_name: &str) -> Option<RouteId> {
        debug!(route_short_name, "No route ID for short name");
        None
    }

    /// Pattern stripped from raw route IDs before deriving names from them.
    fn route_id_cleanup_regex(&self) -> Option<&Regex> {
        None
    }

    /// Raw route ID with [`route_id_cleanup_regex`](Self::route_id_cleanup_regex) applied.
    fn clean_route_id<'a>(&self, route_id: &'a str) -> Cow<'a, str> {
        match self.route_id_cleanup_regex() {
            Some(re) => re.replace(route_id, ""),
            None => Cow::Borrowed(route_id),
        }
    }

    /// Short name published for a route.
    fn route_short_name(&self, route: &RawRoute) -> Result<String, RuleError> {
        if self.metadata().flags.use_route_id_for_route_short_name {
            Ok(self.clean_route_id(&route.route_id).into_owned())
        } else {
            Ok(route.route_short_name.clone())
        }
    }

    /// Long name kept when two routes with the same ID are merged.
    fn merge_route_long_name(&self, _route_id: RouteId) -> LongNameMerge {
        LongNameMerge::Defer
    }

    fn clean_trip_headsign(&self, trip_headsign: &str) -> String {
        trip_headsign.to_string()
    }

    fn clean_stop_name(&self, stop_name: &str) -> String {
        stop_name.to_string()
    }

    /// Canonical numeric stop ID.
    fn stop_id(&self, stop: &RawStop) -> Result<StopId, RuleError> {
        stop.stop_id
            .parse()
            .map(StopId::new)
            .map_err(|_| RuleError::UnresolvableStopId { stop: stop.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An agency that keeps every pipeline default.
    struct DefaultRules {
        metadata: AgencyMetadata,
    }

    impl AgencyRules for DefaultRules {
        fn metadata(&self) -> &AgencyMetadata {
            &self.metadata
        }
    }

    fn defaults() -> DefaultRules {
        DefaultRules {
            metadata: AgencyMetadata::linter(),
        }
    }

    #[test]
    fn default_route_id_parses_numeric_short_names() {
        let rules = defaults();
        assert_eq!(rules.route_id_from_short_name("42"), Some(RouteId::new(42)));
        assert_eq!(rules.route_id_from_short_name("ZC"), None);
        assert_eq!(rules.route_id_from_short_name(""), None);
    }

    #[test]
    fn default_cleanup_is_identity() {
        let rules = defaults();
        assert!(rules.route_id_cleanup_regex().is_none());
        assert_eq!(rules.clean_route_id("ZCN"), "ZCN");
    }

    #[test]
    fn default_short_name_is_raw() {
        let rules = defaults();
        let route = RawRoute::new("ZCN", "Zc-n");
        assert_eq!(rules.route_short_name(&route), Ok("Zc-n".to_string()));
    }

    #[test]
    fn default_short_name_from_route_id_when_flagged() {
        let mut rules = defaults();
        rules.metadata.flags.use_route_id_for_route_short_name = true;
        let route = RawRoute::new("ZCN", "Zc-n");
        assert_eq!(rules.route_short_name(&route), Ok("ZCN".to_string()));
    }

    #[test]
    fn default_merge_defers() {
        assert_eq!(
            defaults().merge_route_long_name(RouteId::new(1003)),
            LongNameMerge::Defer
        );
    }

    #[test]
    fn default_labels_untouched() {
        let rules = defaults();
        assert_eq!(rules.clean_trip_headsign("BOUL. X"), "BOUL. X");
        assert_eq!(rules.clean_stop_name("  rue  "), "  rue  ");
    }

    #[test]
    fn default_stop_id_parses_feed_id() {
        let rules = defaults();
        assert_eq!(
            rules.stop_id(&RawStop::new("12N", "340")),
            Ok(StopId::new(340))
        );
        assert!(matches!(
            rules.stop_id(&RawStop::new("340", "340S")),
            Err(RuleError::UnresolvableStopId { .. })
        ));
    }
}
