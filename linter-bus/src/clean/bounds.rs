//! Removal of direction qualifiers from French labels.
//!
//! Headsigns in this feed often carry the bound ("Direction X",
//! "X (Nord)", "X - Sud"); the direction splitter already conveys it, so the
//! qualifier is dropped and only the destination remains.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PAREN_BOUND: Regex =
        Regex::new(r"(?i)\s*\((?:nord|sud|est|ouest)\)").unwrap();
    static ref TRAILING_BOUND: Regex =
        Regex::new(r"(?i)(?:\s+-\s+(?:nord|sud|est|ouest))+\s*$").unwrap();
    static ref LEADING_DIRECTION: Regex =
        Regex::new(r"(?i)^\s*(?:(?:direction|dir\.?|vers)\s+)+").unwrap();
}

/// Strip bound qualifiers, French locale.
///
/// Parenthesised qualifiers become a space so the words around them stay
/// apart; label cleanup collapses the extra whitespace afterwards.
pub fn clean_bounds_fr(label: &str) -> String {
    let label = PAREN_BOUND.replace_all(label, " ");
    let label = TRAILING_BOUND.replace(&label, "");
    LEADING_DIRECTION.replace(&label, "").into_owned()
}
