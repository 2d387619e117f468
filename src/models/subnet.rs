//! Allocated subnet record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// OSPF process id written into generated configuration.
pub const OSPF_PROCESS_ID: u16 = 1;

/// Backbone area every subnet is announced into.
pub const OSPF_BACKBONE_AREA: Ipv4Addr = Ipv4Addr::UNSPECIFIED;

/// One subnet of a VLSM plan.
///
/// Field names serialize in camelCase; downstream renderers depend on them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetRecord {
    /// 1-based position, matches the order requirements were given in.
    pub index: usize,
    /// Host count that produced this subnet.
    pub hosts_required: u32,
    /// VLSM mask length.
    pub prefix_length: u8,
    /// Dotted-decimal form of `prefix_length`.
    pub subnet_mask: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub first_usable_address: Ipv4Addr,
    pub last_usable_address: Ipv4Addr,
    /// Power-of-two block size including network and broadcast addresses.
    pub subnet_size_addresses: u64,
    pub total_usable_hosts: u64,
    pub wildcard_mask: Ipv4Addr,
    /// `"<network> <wildcard>"`, as used by an OSPF `network` statement.
    pub routing_announcement_statement: String,
    pub routing_area: Ipv4Addr,
}

impl SubnetRecord {
    /// CIDR notation, e.g. `15.0.0.64/27`.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network_address, self.prefix_length)
    }

    /// `network <statement> area <area>`
    pub fn ospf_network_line(&self) -> String {
        format!(
            "network {} area {}",
            self.routing_announcement_statement, self.routing_area
        )
    }

    /// Two-line router configuration for this subnet.
    ///
    /// ```text
    /// router ospf 1
    /// network 15.0.0.0 0.0.0.63 area 0.0.0.0
    /// ```
    pub fn ospf_config(&self) -> String {
        format!(
            "router ospf {OSPF_PROCESS_ID}\n{}",
            self.ospf_network_line()
        )
    }

    /// True if `addr` lies within `[network, broadcast]`.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        addr >= self.network_address && addr <= self.broadcast_address
    }
}

impl fmt::Display for SubnetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({} hosts required, {} usable)",
            self.index,
            self.cidr(),
            self.hosts_required,
            self.total_usable_hosts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubnetRecord {
        SubnetRecord {
            index: 1,
            hosts_required: 50,
            prefix_length: 26,
            subnet_mask: Ipv4Addr::new(255, 255, 255, 192),
            network_address: Ipv4Addr::new(15, 0, 0, 0),
            broadcast_address: Ipv4Addr::new(15, 0, 0, 63),
            first_usable_address: Ipv4Addr::new(15, 0, 0, 1),
            last_usable_address: Ipv4Addr::new(15, 0, 0, 62),
            subnet_size_addresses: 64,
            total_usable_hosts: 62,
            wildcard_mask: Ipv4Addr::new(0, 0, 0, 63),
            routing_announcement_statement: "15.0.0.0 0.0.0.63".to_string(),
            routing_area: OSPF_BACKBONE_AREA,
        }
    }

    #[test]
    fn test_ospf_config_text() {
        assert_eq!(
            sample().ospf_config(),
            "router ospf 1\nnetwork 15.0.0.0 0.0.0.63 area 0.0.0.0"
        );
    }

    #[test]
    fn test_cidr_and_display() {
        let s = sample();
        assert_eq!(s.cidr(), "15.0.0.0/26");
        assert_eq!(s.to_string(), "#1 15.0.0.0/26 (50 hosts required, 62 usable)");
    }

    #[test]
    fn test_contains() {
        let s = sample();
        assert!(s.contains(Ipv4Addr::new(15, 0, 0, 0)));
        assert!(s.contains(Ipv4Addr::new(15, 0, 0, 63)));
        assert!(!s.contains(Ipv4Addr::new(15, 0, 0, 64)));
    }

    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in [
            "index",
            "hostsRequired",
            "prefixLength",
            "subnetMask",
            "networkAddress",
            "broadcastAddress",
            "firstUsableAddress",
            "lastUsableAddress",
            "totalUsableHosts",
            "subnetSizeAddresses",
            "wildcardMask",
            "routingAnnouncementStatement",
            "routingArea",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["networkAddress"], "15.0.0.0");
        assert_eq!(json["routingArea"], "0.0.0.0");
    }
}
