//! Host requirement list parsing.
//!
//! Turns free text such as `"50, 20, 10"` into the host counts handed to the allocator.

use crate::error::VlsmError;
use regex::Regex;
use std::sync::OnceLock;

/// Leading optional sign then `0x` hex or decimal digits; anything after is
/// ignored (`"12abc"` is 12, `"0x10"` is 16).
static LEADING_INT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_leading_int_regex() -> &'static Regex {
    LEADING_INT_REGEX.get_or_init(|| {
        Regex::new(r"^([+-]?)(?:0[xX]([0-9a-fA-F]*)|([0-9]+))").expect("Invalid Regex")
    })
}

/// Parse a comma separated list of host counts.
///
/// Entries that are not numbers, not positive, or larger than `u32::MAX` are
/// silently dropped. Fails only when nothing usable remains.
pub fn parse_host_requirements(text: &str) -> Result<Vec<u32>, VlsmError> {
    parse_host_requirements_with(text, false)
}

/// Like [`parse_host_requirements`], keeping `0` entries when `keep_zero` is set.
pub fn parse_host_requirements_with(text: &str, keep_zero: bool) -> Result<Vec<u32>, VlsmError> {
    let hosts: Vec<u32> = text
        .split(',')
        .map(str::trim)
        .filter_map(|entry| {
            let parsed = parse_leading_int(entry).and_then(|v| u32::try_from(v).ok());
            match parsed {
                Some(v) if v > 0 || keep_zero => Some(v),
                _ => {
                    log::debug!("Dropping host requirement entry {entry:?}");
                    None
                }
            }
        })
        .collect();

    if hosts.is_empty() {
        return Err(VlsmError::InvalidRequirement(
            "Please enter valid host requirements (positive numbers)".to_string(),
        ));
    }
    log::debug!("Parsed host requirements {hosts:?} from {text:?}");
    Ok(hosts)
}

/// Integer value of the leading number in `entry`, if any.
///
/// A bare `0x` with no hex digits is not a number.
fn parse_leading_int(entry: &str) -> Option<i64> {
    let caps = get_leading_int_regex().captures(entry)?;
    let negative = &caps[1] == "-";
    let parsed = match (caps.get(2), caps.get(3)) {
        (Some(hex), _) if hex.as_str().is_empty() => return None,
        (Some(hex), _) => i64::from_str_radix(hex.as_str(), 16),
        (None, Some(dec)) => dec.as_str().parse::<i64>(),
        (None, None) => return None,
    };
    match parsed {
        Ok(v) if negative => Some(-v),
        Ok(v) => Some(v),
        // too many digits for i64, only the sign matters from here
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Largest requirement first, the usual VLSM ordering.
pub fn sort_descending(hosts: &mut [u32]) {
    hosts.sort_unstable_by(|a, b| b.cmp(a));
}
