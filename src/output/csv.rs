//! CSV output formatting for a VLSM plan.

use crate::models::SubnetRecord;
use crate::Plan;
use itertools::Itertools;

use super::terminal::format_field;

/// Column header, aligned with [`csv_row`].
pub const CSV_HEADER: &str = r#"   "cnt",  "hosts",    "subnet_cidr",        "mask",  "first_usable",   "last_usable",     "broadcast",  "size",  "usable",    "wildcard",        "ospf_network",    "area""#;

/// Render the plan as CSV, header first.
pub fn render_csv(plan: &Plan) -> String {
    log::info!("# Rendering {} subnet(s) as CSV", plan.subnets.len());
    std::iter::once(CSV_HEADER.to_string())
        .chain(plan.subnets.iter().map(csv_row))
        .map(|line| line + "\n")
        .collect()
}

/// Print the plan as CSV to stdout.
pub fn subnet_print(plan: &Plan) {
    print!("{}", render_csv(plan));
}

/// A single CSV row with quoted, right-aligned fields.
pub fn csv_row(s: &SubnetRecord) -> String {
    [
        format_field(s.index, 8),
        format_field(s.hosts_required, 9),
        format_field(s.cidr(), 17),
        format_field(s.subnet_mask, 17),
        format_field(s.first_usable_address, 16),
        format_field(s.last_usable_address, 16),
        format_field(s.broadcast_address, 16),
        format_field(s.subnet_size_addresses, 8),
        format_field(s.total_usable_hosts, 10),
        format_field(s.wildcard_mask, 14),
        format_field(&s.routing_announcement_statement, 22),
        format_field(s.routing_area, 10),
    ]
    .iter()
    .join(",")
}
