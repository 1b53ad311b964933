//! Static agency metadata and pipeline feature flags.

use serde::Serialize;

use super::AgencyColor;
use crate::domain::RouteId;

/// Orange, from the agency web site.
const AGENCY_COLOR: AgencyColor = AgencyColor::from_static(*b"E76525");

/// Languages an agency publishes labels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    French,
}

impl Language {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::French => "fr",
        }
    }
}

/// GTFS `route_type` values relevant to this agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteType {
    Bus,
}

impl RouteType {
    /// Numeric GTFS code.
    pub const fn gtfs_code(self) -> u8 {
        match self {
            RouteType::Bus => 3,
        }
    }
}

/// Switches consumed by the feed pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineFlags {
    /// Apply the pipeline's default exclusion rules (calendar, unused stops, ...).
    pub default_exclude_enabled: bool,

    /// Let the pipeline assign route IDs from short names.
    pub default_route_id_enabled: bool,

    /// Use the route short name verbatim as the route ID.
    pub use_route_short_name_for_route_id: bool,

    /// Fall back to the agency color for routes without one.
    pub default_agency_color_enabled: bool,

    /// Split trips into directions per route.
    pub direction_splitter_enabled: bool,

    /// Infer trip directions from stop sequences.
    pub direction_finder_enabled: bool,

    /// Derive the short name from the cleaned route ID instead of the
    /// explicit short-name rule.
    pub use_route_id_for_route_short_name: bool,
}

/// Agency-wide constants, constructed once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencyMetadata {
    /// Display name.
    pub name: String,

    /// Agency color.
    pub color: AgencyColor,

    /// Languages labels are published in.
    pub languages: Vec<Language>,

    /// Mode of every route in the feed.
    pub route_type: RouteType,

    /// Pipeline switches.
    pub flags: PipelineFlags,
}

impl AgencyMetadata {
    /// Metadata for L'Inter, the TaCL intercity bus network.
    pub fn linter() -> Self {
        Self {
            name: "L'Inter (TaCL)".to_string(),
            color: AGENCY_COLOR,
            languages: vec![Language::French],
            route_type: RouteType::Bus,
            flags: PipelineFlags {
                default_exclude_enabled: true,
                default_route_id_enabled: true,
                use_route_short_name_for_route_id: false,
                default_agency_color_enabled: true,
                direction_splitter_enabled: true,
                direction_finder_enabled: true,
                use_route_id_for_route_short_name: false,
            },
        }
    }

    /// Whether trips of the given route are split by direction.
    ///
    /// L'Inter splits every route, so the ID is not consulted.
    pub fn direction_splitter_enabled(&self, _route_id: RouteId) -> bool {
        self.flags.direction_splitter_enabled
    }

    /// Whether labels are published in the given language.
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}
