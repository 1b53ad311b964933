//! Route identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A route record as supplied by the feed pipeline.
///
/// Read-only input: the rules derive values from it but never modify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRoute {
    /// Feed-assigned route identifier (e.g. "ZCN").
    pub route_id: String,

    /// Route short name as published in the feed.
    pub route_short_name: String,
}

impl RawRoute {
    pub fn new(route_id: impl Into<String>, route_short_name: impl Into<String>) -> Self {
        Self {
            route_id: route_id.into(),
            route_short_name: route_short_name.into(),
        }
    }
}

impl fmt::Display for RawRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route {{ id: {:?}, short_name: {:?} }}",
            self.route_id, self.route_short_name
        )
    }
}

/// A canonical numeric route identifier.
///
/// This is the stable ID used downstream for merging and display, independent
/// of the textual identifiers in the feed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u64);

impl RouteId {
    pub const fn new(id: u64) -> Self {
        RouteId(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The route families operated by L'Inter.
///
/// Each family is published in the feed as a pair of directional variants
/// (e.g. `ZCN`/`ZCS`) which collapse into one canonical route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteFamily {
    /// "ZC", Inter Centre.
    InterCentre,
    /// "ZN", Inter Nord.
    InterNord,
}

impl RouteFamily {
    pub const ALL: [RouteFamily; 2] = [RouteFamily::InterCentre, RouteFamily::InterNord];

    /// Canonical numeric route ID.
    pub const fn route_id(self) -> RouteId {
        match self {
            RouteFamily::InterCentre => RouteId(1_003),
            RouteFamily::InterNord => RouteId(1_014),
        }
    }

    /// Canonical short name, without the directional suffix.
    pub const fn short_name(self) -> &'static str {
        match self {
            RouteFamily::InterCentre => "ZC",
            RouteFamily::InterNord => "ZN",
        }
    }

    /// Long name shown to riders.
    pub const fn long_name(self) -> &'static str {
        match self {
            RouteFamily::InterCentre => "Inter Centre",
            RouteFamily::InterNord => "Inter Nord",
        }
    }

    /// Look up the family owning a canonical route ID.
    pub fn from_route_id(id: RouteId) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.route_id() == id)
    }
}

impl fmt::Display for RouteFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
