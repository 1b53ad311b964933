//! Route identity resolution.
//!
//! The feed publishes each route family as two directional variants
//! (`ZCN`/`ZCS`, `ZNN`/`ZNS`). These collapse into one canonical route per
//! family, with a fixed ID, short name and long name.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::{RawRoute, RouteFamily, RouteId, RuleError};

lazy_static! {
    /// Trailing directional suffix on a raw route ID.
    pub static ref ROUTE_ID_CLEANUP: Regex = Regex::new("[NS]$").unwrap();
}

/// Resolve the route family for a route short name.
///
/// Returns `None` for tokens outside the agency table; those go through the
/// pipeline's default ID derivation.
pub fn resolve_route_id(route_short_name: &str) -> Option<RouteFamily> {
    match route_short_name {
        "ZC" | "ZCN" | "ZCS" => Some(RouteFamily::InterCentre),
        "ZN" | "ZNN" | "ZNS" => Some(RouteFamily::InterNord),
        _ => None,
    }
}

/// Resolve the canonical short name from a route's raw ID.
///
/// Only the four directional variants are expected in the feed; anything
/// else means the feed changed under us.
pub fn canonical_short_name(route: &RawRoute) -> Result<RouteFamily, RuleError> {
    match route.route_id.as_str() {
        "ZCN" | "ZCS" => Ok(RouteFamily::InterCentre),
        "ZNN" | "ZNS" => Ok(RouteFamily::InterNord),
        _ => Err(RuleError::UnexpectedRouteId {
            route: route.clone(),
        }),
    }
}

/// Strip the directional suffix from a raw route ID.
pub fn cleanup_route_id(route_id: &str) -> Cow<'_, str> {
    ROUTE_ID_CLEANUP.replace(route_id, "")
}

/// Outcome of a long-name merge between two routes sharing an ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongNameMerge {
    /// Replace the merged long name with this one.
    Override(&'static str),
    /// Keep the pipeline's default merge behaviour.
    Defer,
}

impl LongNameMerge {
    pub fn overrides_default(&self) -> bool {
        matches!(self, LongNameMerge::Override(_))
    }

    pub fn long_name(&self) -> Option<&'static str> {
        match *self {
            LongNameMerge::Override(name) => Some(name),
            LongNameMerge::Defer => None,
        }
    }
}

/// Decide the surviving long name when routes with this ID are merged.
pub fn resolve_long_name(route_id: RouteId) -> LongNameMerge {
    match RouteFamily::from_route_id(route_id) {
        Some(family) => LongNameMerge::Override(family.long_name()),
        None => LongNameMerge::Defer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_tokens_resolve_to_1003() {
        for token in ["ZC", "ZCN", "ZCS"] {
            assert_eq!(
                resolve_route_id(token).map(RouteFamily::route_id),
                Some(RouteId::new(1003)),
                "{token}"
            );
        }
    }

    #[test]
    fn nord_tokens_resolve_to_1014() {
        for token in ["ZN", "ZNN", "ZNS"] {
            assert_eq!(
                resolve_route_id(token).map(RouteFamily::route_id),
                Some(RouteId::new(1014)),
                "{token}"
            );
        }
    }

    #[test]
    fn unknown_tokens_are_delegated() {
        assert_eq!(resolve_route_id("ZX"), None);
        assert_eq!(resolve_route_id("zc"), None);
        assert_eq!(resolve_route_id("12"), None);
        assert_eq!(resolve_route_id(""), None);
    }

    #[test]
    fn short_name_from_directional_ids() {
        let short = |id: &str| {
            canonical_short_name(&RawRoute::new(id, id))
                .unwrap()
                .short_name()
        };
        assert_eq!(short("ZCN"), "ZC");
        assert_eq!(short("ZCS"), "ZC");
        assert_eq!(short("ZNN"), "ZN");
        assert_eq!(short("ZNS"), "ZN");
    }

    #[test]
    fn short_name_rejects_unknown_id() {
        let route = RawRoute::new("XYZ", "XYZ");
        assert_eq!(
            canonical_short_name(&route),
            Err(RuleError::UnexpectedRouteId { route })
        );

        // The bare family names are not raw IDs in this feed
        assert!(canonical_short_name(&RawRoute::new("ZC", "ZC")).is_err());
    }

    #[test]
    fn cleanup_strips_one_trailing_suffix() {
        assert_eq!(cleanup_route_id("ZCN"), "ZC");
        assert_eq!(cleanup_route_id("ZNS"), "ZN");
        assert_eq!(cleanup_route_id("ZC"), "ZC");
        assert_eq!(cleanup_route_id("NSN"), "NS");
        assert_eq!(cleanup_route_id("ZNx"), "ZNx");
    }

    #[test]
    fn cleanup_agrees_with_explicit_switch() {
        for id in ["ZCN", "ZCS", "ZNN", "ZNS"] {
            let explicit = canonical_short_name(&RawRoute::new(id, id)).unwrap();
            assert_eq!(cleanup_route_id(id), explicit.short_name(), "{id}");
        }
    }

    #[test]
    fn long_name_overrides_known_families() {
        let centre = resolve_long_name(RouteId::new(1003));
        assert_eq!(centre, LongNameMerge::Override("Inter Centre"));
        assert!(centre.overrides_default());
        assert_eq!(centre.long_name(), Some("Inter Centre"));

        let nord = resolve_long_name(RouteId::new(1014));
        assert_eq!(nord, LongNameMerge::Override("Inter Nord"));
        assert!(nord.overrides_default());
    }

    #[test]
    fn long_name_defers_otherwise() {
        for id in [0, 1, 1004, 1013, 14] {
            let merge = resolve_long_name(RouteId::new(id));
            assert_eq!(merge, LongNameMerge::Defer);
            assert!(!merge.overrides_default());
            assert_eq!(merge.long_name(), None);
        }
    }
}
