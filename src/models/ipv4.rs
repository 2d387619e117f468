//! IPv4 address codec.
//!
//! Converts between dotted-decimal text and [`Ipv4Addr`], and derives subnet
//! and wildcard masks from a prefix length.

use crate::error::VlsmError;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses in the whole IPv4 space.
pub const ADDRESS_SPACE: u64 = 1 << MAX_LENGTH;

static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex")
    })
}

/// Parse dotted-decimal text into an address.
///
/// Exactly four groups of one to three digits, each in 0-255. Leading zeros
/// are accepted (`010` is 10). Whitespace is not trimmed.
///
/// # Examples
/// ```
/// use vlsm_planner::models::parse_address;
/// assert_eq!(parse_address("15.0.0.0").unwrap(), std::net::Ipv4Addr::new(15, 0, 0, 0));
/// assert!(parse_address("999.1.1.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, VlsmError> {
    let caps = get_address_regex()
        .captures(text)
        .ok_or_else(|| VlsmError::format(text))?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // 1-3 digits always fit in u16
        let value: u16 = caps[i + 1].parse().map_err(|_| VlsmError::format(text))?;
        *octet = u8::try_from(value).map_err(|_| VlsmError::format(text))?;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Format an address as four decimal octets, most significant first.
pub fn format_address(addr: Ipv4Addr) -> String {
    let [a, b, c, d] = addr.octets();
    format!("{a}.{b}.{c}.{d}")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use vlsm_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, VlsmError> {
    if len > MAX_LENGTH {
        Err(VlsmError::PrefixOutOfRange(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Subnet mask with the top `len` bits set.
pub fn subnet_mask_for(len: u8) -> Result<Ipv4Addr, VlsmError> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Bitwise complement of [`subnet_mask_for`].
pub fn wildcard_mask_for(len: u8) -> Result<Ipv4Addr, VlsmError> {
    Ok(Ipv4Addr::from(!get_cidr_mask(len)?))
}

/// Smallest power of two that holds `hosts` plus the network and broadcast addresses.
///
/// May exceed [`ADDRESS_SPACE`] for very large requests; the caller checks.
pub fn block_size_for_hosts(hosts: u32) -> u64 {
    (hosts as u64 + 2).next_power_of_two()
}

/// Prefix length of a power-of-two block of `size` addresses.
///
/// `None` when the block is larger than the whole address space.
pub fn prefix_for_block(size: u64) -> Option<u8> {
    debug_assert!(size.is_power_of_two(), "block size {size} is not a power of two");
    let host_bits = size.trailing_zeros() as u8;
    MAX_LENGTH.checked_sub(host_bits)
}

/// Calculate the minimum mask for an IP address based on trailing zeros.
pub fn lo_mask(ip: Ipv4Addr) -> u8 {
    let ip_u32 = u32::from(ip);
    // 0.0.0.0 has 32 trailing zeros and is aligned to every prefix
    let trailing_zeros = ip_u32.trailing_zeros() as u8;
    MAX_LENGTH - trailing_zeros
}

/// True when `addr` has no host bits set for `len`, i.e. it is a valid network address.
pub fn is_aligned(addr: Ipv4Addr, len: u8) -> bool {
    lo_mask(addr) <= len
}
