//! Domain models for VLSM planning.
//!
//! - `ipv4` - address codec and mask arithmetic
//! - [`SubnetRecord`] - one allocated subnet

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    block_size_for_hosts, format_address, get_cidr_mask, is_aligned, lo_mask, parse_address,
    prefix_for_block, subnet_mask_for, wildcard_mask_for, ADDRESS_SPACE, MAX_LENGTH,
};
pub use subnet::{SubnetRecord, OSPF_BACKBONE_AREA, OSPF_PROCESS_ID};
