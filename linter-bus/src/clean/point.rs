//! Abbreviation period spacing.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One or more periods stuck to the following letter.
    static ref POINT: Regex = Regex::new(r"\.+(\p{L})").unwrap();
}

const POINT_REPLACEMENT: &str = ". $1";

/// Collapse repeated periods and put a space between a period and the
/// letter after it: `ST.JÉRÔME` becomes `ST. JÉRÔME`.
pub fn clean_points(label: &str) -> Cow<'_, str> {
    POINT.replace_all(label, POINT_REPLACEMENT)
}
