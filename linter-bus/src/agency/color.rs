//! Agency color type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid agency color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid agency color: {reason}")]
pub struct InvalidAgencyColor {
    reason: &'static str,
}

/// A route/agency color as GTFS writes it: six hex digits, no `#`.
///
/// # Examples
///
/// ```
/// use linter_bus::agency::AgencyColor;
///
/// let orange = AgencyColor::parse("e76525").unwrap();
/// assert_eq!(orange.as_str(), "E76525");
///
/// assert!(AgencyColor::parse("#E76525").is_err());
/// assert!(AgencyColor::parse("E7652").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgencyColor([u8; 6]);

impl AgencyColor {
    /// Parse a color from six hex digits. Lowercase digits are upper-cased.
    pub fn parse(s: &str) -> Result<Self, InvalidAgencyColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidAgencyColor {
                reason: "must be exactly 6 characters",
            });
        }

        let mut out = [0u8; 6];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidAgencyColor {
                    reason: "must be hex digits 0-9, A-F",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(AgencyColor(out))
    }

    /// Build a color from a literal known to be upper-case hex.
    pub(super) const fn from_static(bytes: [u8; 6]) -> Self {
        AgencyColor(bytes)
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for AgencyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgencyColor({})", self.as_str())
    }
}

impl fmt::Display for AgencyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AgencyColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
