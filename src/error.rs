//! Error type shared by the codec, the allocator and the planner.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Everything that can go wrong while building a VLSM plan.
///
/// All variants are deterministic: retrying with the same input gives the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VlsmError {
    /// Address text is not four dotted octets in range.
    #[error("Invalid network address format '{input}'. Please use format like 15.0.0.0")]
    Format { input: String },

    /// A host requirement is not a positive integer, or none are left after filtering.
    #[error("Invalid host requirement: {0}")]
    InvalidRequirement(String),

    /// The next subnet would run past 255.255.255.255.
    #[error("Address space exhausted: subnet {index} needs room for {hosts} hosts starting at {cursor}")]
    AddressSpaceExhausted {
        index: usize,
        hosts: u32,
        cursor: String,
    },

    #[error("Prefix length /{0} is out of range (0-32)")]
    PrefixOutOfRange(u8),
}

impl VlsmError {
    pub(crate) fn format(input: &str) -> Self {
        VlsmError::Format {
            input: input.to_string(),
        }
    }

    /// `cursor` may sit one past the last address, so it is kept as a u64.
    pub(crate) fn exhausted(index: usize, hosts: u32, cursor: u64) -> Self {
        let cursor = u32::try_from(cursor)
            .map(|c| Ipv4Addr::from(c).to_string())
            .unwrap_or_else(|_| "end of address space".to_string());
        VlsmError::AddressSpaceExhausted {
            index,
            hosts,
            cursor,
        }
    }
}
