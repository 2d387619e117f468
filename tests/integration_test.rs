//! Integration tests for vlsm-planner
//!
//! These tests run the complete flow from raw form text to rendered output.

use std::net::Ipv4Addr;
use vlsm_planner::{
    models::{format_address, parse_address},
    output::{render_cards, render_csv, render_json},
    plan,
    processing::{allocate, QueryParams},
    PlanOptions, VlsmError,
};

fn ip(text: &str) -> Ipv4Addr {
    parse_address(text).expect("valid test address")
}

#[test]
fn test_single_subnet_50_hosts() {
    let plan = plan("15.0.0.0", "50", &PlanOptions::default()).expect("plan");
    assert_eq!(plan.subnets.len(), 1);

    let s = &plan.subnets[0];
    assert_eq!(s.subnet_size_addresses, 64);
    assert_eq!(s.prefix_length, 26);
    assert_eq!(s.network_address, ip("15.0.0.0"));
    assert_eq!(s.broadcast_address, ip("15.0.0.63"));
    assert_eq!(s.first_usable_address, ip("15.0.0.1"));
    assert_eq!(s.last_usable_address, ip("15.0.0.62"));
    assert_eq!(s.total_usable_hosts, 62);
    assert_eq!(format_address(s.wildcard_mask), "0.0.0.63");
}

#[test]
fn test_three_subnets_in_given_order() {
    let subnets = allocate(ip("15.0.0.0"), &[50, 20, 10]).expect("allocate");
    let sizes: Vec<u64> = subnets.iter().map(|s| s.subnet_size_addresses).collect();
    assert_eq!(sizes, vec![64, 32, 16]);
    assert_eq!(subnets[1].network_address, ip("15.0.0.64"));
    assert_eq!(subnets[1].prefix_length, 27);
    assert_eq!(subnets[2].network_address, ip("15.0.0.96"));
    assert_eq!(subnets[2].prefix_length, 28);
}

#[test]
fn test_one_host_is_slash_30() {
    let s = &allocate(ip("10.10.10.0"), &[1]).expect("allocate")[0];
    assert_eq!(s.subnet_size_addresses, 4);
    assert_eq!(s.prefix_length, 30);
    assert_eq!(s.total_usable_hosts, 2);
}

#[test]
fn test_bad_address_rejected() {
    let err = plan("999.1.1.1", "10", &PlanOptions::default()).unwrap_err();
    assert_eq!(
        err,
        VlsmError::Format {
            input: "999.1.1.1".to_string()
        }
    );
}

#[test]
fn test_invalid_host_entries_filtered() {
    let plan = plan("15.0.0.0", "abc, -5, 10", &PlanOptions::default()).expect("plan");
    assert_eq!(plan.subnets.len(), 1);
    assert_eq!(plan.subnets[0].hosts_required, 10);
}

#[test]
fn test_exhausted_space_has_no_partial_result() {
    let result = plan("255.255.255.0", "100, 100, 100", &PlanOptions::default());
    assert!(matches!(
        result,
        Err(VlsmError::AddressSpaceExhausted { index: 3, .. })
    ));
}

#[test]
fn test_query_string_drives_plan() {
    let params = QueryParams::from_query_string("?network=15.0.0.0&hosts=10%2C+50%2C+20");
    assert!(params.should_calculate());

    let plan = plan(
        params.network.as_deref().unwrap_or_default(),
        params.hosts.as_deref().unwrap_or_default(),
        &PlanOptions::default(),
    )
    .expect("plan");
    let cidrs: Vec<String> = plan.subnets.iter().map(|s| s.cidr()).collect();
    assert_eq!(cidrs, vec!["15.0.0.0/26", "15.0.0.64/27", "15.0.0.96/28"]);
}

#[test]
fn test_all_renderers() {
    let params = QueryParams::new(Some("192.168.1.0"), Some("100, 50, 2"));
    let plan = plan("192.168.1.0", "100, 50, 2", &PlanOptions::default()).expect("plan");

    let cards = render_cards(&plan, false);
    assert!(cards.contains("router ospf 1\n    network 192.168.1.0 0.0.0.127 area 0.0.0.0"));
    assert!(cards.contains("network 192.168.1.128 0.0.0.63 area 0.0.0.0"));
    assert!(cards.contains("network 192.168.1.192 0.0.0.3 area 0.0.0.0"));

    let csv = render_csv(&plan);
    assert_eq!(csv.lines().count(), 4);

    let json = render_json(&plan, &params).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["subnets"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["query"], "network=192.168.1.0&hosts=100%2C+50%2C+2");
}

#[test]
fn test_ospf_snippet_verbatim() {
    let plan = plan("15.0.0.0", "20", &PlanOptions::default()).expect("plan");
    assert_eq!(
        plan.subnets[0].ospf_config(),
        "router ospf 1\nnetwork 15.0.0.0 0.0.0.31 area 0.0.0.0"
    );
}
