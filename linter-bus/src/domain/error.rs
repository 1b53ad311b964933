//! Rule error types.
//!
//! Every variant is a data-contract violation between the rule tables and
//! the feed: the feed run must halt rather than emit a wrong identifier.

use super::{RawRoute, RawStop};

/// Fatal errors raised by the agency rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Route ID outside the known directional variants
    #[error("unexpected route ID for {route}")]
    UnexpectedRouteId { route: RawRoute },

    /// Stop code carries no digits to build an ID from
    #[error("unexpected stop ID for {stop}")]
    UnresolvableStopId { stop: RawStop },

    /// Stop code has digits but the stop ID has no recognised suffix
    #[error("stop doesn't have an ID suffix: {stop}")]
    StopMissingIdSuffix { stop: RawStop },

    /// Derived stop ID does not fit the identifier range
    #[error("stop ID out of range for {stop}")]
    StopIdOutOfRange { stop: RawStop },
}
