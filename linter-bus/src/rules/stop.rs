//! Stop identity resolution.
//!
//! Most stops publish a numeric stop code which is used as the ID directly.
//! The rest carry a letter suffix; their digits are moved into a dedicated
//! range per suffix so they never collide with the numeric codes.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::domain::{RawStop, RuleError, StopId};

lazy_static! {
    static ref DIGITS: Regex = Regex::new("[0-9]+").unwrap();
}

/// ID range for stop codes ending in `N`.
const NORTH_CODE_OFFSET: u32 = 140_000;
/// ID range for stop IDs ending in `S`.
const SOUTH_ID_OFFSET: u32 = 190_000;
/// ID range for stop IDs ending in `S-ANM`.
const SOUTH_ANM_ID_OFFSET: u32 = 1_190_000;
/// ID range for stop IDs ending in `ANM`.
const ANM_ID_OFFSET: u32 = 1_140_000;

/// Stop IDs are published as signed 32-bit integers downstream.
const MAX_STOP_ID: u32 = i32::MAX as u32;

/// Resolve the canonical numeric ID of a stop.
pub fn resolve_stop_id(stop: &RawStop) -> Result<StopId, RuleError> {
    let code = stop.stop_code.as_str();

    if !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit()) {
        let id = code
            .parse()
            .map_err(|_| RuleError::StopIdOutOfRange { stop: stop.clone() })?;
        return bounded(id, stop);
    }

    let Some(digits) = DIGITS.find(code) else {
        return Err(RuleError::UnresolvableStopId { stop: stop.clone() });
    };
    let digits: u32 = digits
        .as_str()
        .parse()
        .map_err(|_| RuleError::StopIdOutOfRange { stop: stop.clone() })?;

    let offset = suffix_offset(stop)?;
    let id = offset
        .checked_add(digits)
        .ok_or_else(|| RuleError::StopIdOutOfRange { stop: stop.clone() })?;
    let id = bounded(id, stop)?;

    debug!(
        stop_code = %stop.stop_code,
        stop_id = %stop.stop_id,
        offset,
        resolved = %id,
        "Resolved suffixed stop"
    );

    Ok(id)
}

fn bounded(id: u32, stop: &RawStop) -> Result<StopId, RuleError> {
    if id > MAX_STOP_ID {
        return Err(RuleError::StopIdOutOfRange { stop: stop.clone() });
    }
    Ok(StopId::new(id))
}

/// Pick the ID range from the stop code/ID suffix.
///
/// The `stop_id` suffixes are mutually exclusive (`S-ANM` and `ANM` end in
/// `M`), so only the `N` stop code check takes precedence.
fn suffix_offset(stop: &RawStop) -> Result<u32, RuleError> {
    if stop.stop_code.ends_with('N') {
        Ok(NORTH_CODE_OFFSET)
    } else if stop.stop_id.ends_with('S') {
        Ok(SOUTH_ID_OFFSET)
    } else if stop.stop_id.ends_with("S-ANM") {
        Ok(SOUTH_ANM_ID_OFFSET)
    } else if stop.stop_id.ends_with("ANM") {
        Ok(ANM_ID_OFFSET)
    } else {
        Err(RuleError::StopMissingIdSuffix { stop: stop.clone() })
    }
}
