//! Stop identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stop record as supplied by the feed pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStop {
    /// Public stop code. May be empty, all digits, or digits with a letter suffix.
    #[serde(default)]
    pub stop_code: String,

    /// Feed-assigned stop identifier. May end in `N`, `S`, `S-ANM` or `ANM`.
    pub stop_id: String,
}

impl RawStop {
    pub fn new(stop_code: impl Into<String>, stop_id: impl Into<String>) -> Self {
        Self {
            stop_code: stop_code.into(),
            stop_id: stop_id.into(),
        }
    }
}

impl fmt::Display for RawStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stop {{ code: {:?}, id: {:?} }}",
            self.stop_code, self.stop_id
        )
    }
}

/// A canonical numeric stop identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(u32);

impl StopId {
    pub const fn new(id: u32) -> Self {
        StopId(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(StopId::new(140012).to_string(), "140012");
        assert_eq!(format!("{:?}", StopId::new(7)), "StopId(7)");
        assert_eq!(
            RawStop::new("12N", "ab-N").to_string(),
            r#"stop { code: "12N", id: "ab-N" }"#
        );
    }

    #[test]
    fn missing_stop_code_defaults_to_empty() {
        let stop: RawStop = serde_json::from_str(r#"{"stop_id":"123"}"#).unwrap();
        assert_eq!(stop.stop_code, "");
        assert_eq!(stop.stop_id, "123");
    }
}
