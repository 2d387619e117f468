//! Contiguous VLSM allocation.
//!
//! Walks a cursor through the address space, carving one power-of-two block
//! per host requirement in the order given.

use crate::error::VlsmError;
use crate::models::{
    block_size_for_hosts, format_address, is_aligned, prefix_for_block, subnet_mask_for,
    wildcard_mask_for, SubnetRecord, ADDRESS_SPACE, OSPF_BACKBONE_AREA,
};
use std::net::Ipv4Addr;

/// Allocate one subnet per requirement starting at `start`.
///
/// Every requirement must be at least 1. Requirements are processed exactly in
/// the order given; sort them descending beforehand to reduce fragmentation.
///
/// # Examples
/// ```
/// use std::net::Ipv4Addr;
/// use vlsm_planner::processing::allocate;
///
/// let subnets = allocate(Ipv4Addr::new(15, 0, 0, 0), &[50, 20]).unwrap();
/// assert_eq!(subnets[1].cidr(), "15.0.0.64/27");
/// ```
pub fn allocate(start: Ipv4Addr, requirements: &[u32]) -> Result<Vec<SubnetRecord>, VlsmError> {
    allocate_with(start, requirements, false)
}

/// Like [`allocate`], optionally accepting `0` as a point-to-point `/31` with no usable hosts.
pub fn allocate_with(
    start: Ipv4Addr,
    requirements: &[u32],
    allow_point_to_point: bool,
) -> Result<Vec<SubnetRecord>, VlsmError> {
    log::debug!(
        "allocate(start={start}, {} requirement(s), allow_point_to_point={allow_point_to_point})",
        requirements.len()
    );

    // u64 so the cursor can sit one past 255.255.255.255 after the last block
    let mut cursor = u32::from(start) as u64;
    let mut subnets = Vec::with_capacity(requirements.len());

    for (i, &hosts) in requirements.iter().enumerate() {
        let index = i + 1;
        if hosts == 0 && !allow_point_to_point {
            return Err(VlsmError::InvalidRequirement(format!(
                "subnet {index} requires 0 hosts, host counts must be positive"
            )));
        }

        let record = allocate_one(index, hosts, cursor)?;
        log::debug!("  {record}");

        cursor = u32::from(record.broadcast_address) as u64 + 1;
        subnets.push(record);
    }

    Ok(subnets)
}

/// Carve the block for a single requirement at `cursor`.
fn allocate_one(index: usize, hosts: u32, cursor: u64) -> Result<SubnetRecord, VlsmError> {
    let size = block_size_for_hosts(hosts);
    let prefix_length =
        prefix_for_block(size).ok_or_else(|| VlsmError::exhausted(index, hosts, cursor))?;

    let broadcast = cursor + size - 1;
    if broadcast >= ADDRESS_SPACE {
        return Err(VlsmError::exhausted(index, hosts, cursor));
    }

    // Both bounds are inside the address space after the check above
    let network_address = Ipv4Addr::from(cursor as u32);
    let broadcast_address = Ipv4Addr::from(broadcast as u32);

    if !is_aligned(network_address, prefix_length) {
        log::warn!(
            "subnet {index}: {network_address}/{prefix_length} is not on a /{prefix_length} boundary"
        );
    }

    let wildcard_mask = wildcard_mask_for(prefix_length)?;

    Ok(SubnetRecord {
        index,
        hosts_required: hosts,
        prefix_length,
        subnet_mask: subnet_mask_for(prefix_length)?,
        network_address,
        broadcast_address,
        first_usable_address: Ipv4Addr::from(cursor as u32 + 1),
        last_usable_address: Ipv4Addr::from(broadcast as u32 - 1),
        subnet_size_addresses: size,
        total_usable_hosts: size - 2,
        wildcard_mask,
        routing_announcement_statement: format!(
            "{} {}",
            format_address(network_address),
            format_address(wildcard_mask)
        ),
        routing_area: OSPF_BACKBONE_AREA,
    })
}
