//! VLSM subnet planner.
//!
//! - [`models`] - IPv4 codec and the [`models::SubnetRecord`] type
//! - [`processing`] - allocation, host list parsing, query-string persistence
//! - [`output`] - terminal, CSV and JSON rendering
//! - [`config`] / [`logging`] - command line and log setup for the binary

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

pub use error::VlsmError;

use models::{parse_address, SubnetRecord};
use processing::{allocate_with, parse_host_requirements_with, sort_descending};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Caller-side policy applied before allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Sort host counts largest first before allocating.
    pub sort_descending: bool,
    /// Keep `0` entries and allocate them as /31 links with no usable hosts.
    pub allow_point_to_point: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        PlanOptions {
            sort_descending: true,
            allow_point_to_point: false,
        }
    }
}

/// Totals over a whole plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub base_network: Ipv4Addr,
    pub subnet_count: usize,
    pub first_address: Ipv4Addr,
    pub last_address: Ipv4Addr,
    pub total_addresses: u64,
    pub total_usable_hosts: u64,
    pub total_hosts_required: u64,
    /// `None` when the last subnet ends at 255.255.255.255.
    pub next_free_address: Option<Ipv4Addr>,
}

impl PlanSummary {
    /// `None` for an empty subnet list.
    pub fn from_subnets(base_network: Ipv4Addr, subnets: &[SubnetRecord]) -> Option<Self> {
        let first = subnets.first()?;
        let last = subnets.last()?;
        Some(PlanSummary {
            base_network,
            subnet_count: subnets.len(),
            first_address: first.network_address,
            last_address: last.broadcast_address,
            total_addresses: subnets.iter().map(|s| s.subnet_size_addresses).sum(),
            total_usable_hosts: subnets.iter().map(|s| s.total_usable_hosts).sum(),
            total_hosts_required: subnets.iter().map(|s| s.hosts_required as u64).sum(),
            next_free_address: u32::from(last.broadcast_address)
                .checked_add(1)
                .map(Ipv4Addr::from),
        })
    }

    /// Share of allocated host addresses that were asked for, in percent.
    pub fn utilisation_percent(&self) -> f64 {
        if self.total_addresses == 0 {
            return 0.0;
        }
        self.total_hosts_required as f64 * 100.0 / self.total_addresses as f64
    }
}

/// A computed VLSM plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub summary: PlanSummary,
    pub subnets: Vec<SubnetRecord>,
}

/// Build a plan from raw form text.
///
/// The network text is trimmed, host counts are filtered and, unless disabled,
/// sorted largest first. The first problem found is returned; no partial plan.
///
/// # Examples
/// ```
/// use vlsm_planner::{plan, PlanOptions};
/// let plan = plan(" 15.0.0.0 ", "10, 50, abc", &PlanOptions::default()).unwrap();
/// assert_eq!(plan.subnets[0].hosts_required, 50);
/// assert_eq!(plan.subnets[1].cidr(), "15.0.0.64/28");
/// ```
pub fn plan(network_text: &str, hosts_text: &str, options: &PlanOptions) -> Result<Plan, VlsmError> {
    log::info!("#Start plan() network={network_text:?} hosts={hosts_text:?}");

    let base_network = parse_address(network_text.trim())?;
    let mut hosts = parse_host_requirements_with(hosts_text, options.allow_point_to_point)?;
    if options.sort_descending {
        sort_descending(&mut hosts);
    }

    let subnets = allocate_with(base_network, &hosts, options.allow_point_to_point)?;
    let summary = PlanSummary::from_subnets(base_network, &subnets).ok_or_else(|| {
        VlsmError::InvalidRequirement("no subnets were allocated".to_string())
    })?;

    log::info!(
        "# Allocated {} subnet(s) {} - {}",
        summary.subnet_count,
        summary.first_address,
        summary.last_address
    );
    Ok(Plan { summary, subnets })
}
