//! Terminal output.
//!
//! One card per subnet, labelled like the calculator's result cards, followed
//! by its OSPF snippet.

use crate::models::SubnetRecord;
use crate::Plan;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

fn highlight(value: String, color: bool) -> String {
    if color {
        value.green().bold().to_string()
    } else {
        value
    }
}

/// Render the whole plan as text cards. `color` enables ANSI highlighting.
pub fn render_cards(plan: &Plan, color: bool) -> String {
    let title = "VLSM Calculation Results";
    let mut out = if color {
        title.bold().underline().to_string()
    } else {
        title.to_string()
    };
    out.push('\n');

    for subnet in &plan.subnets {
        out.push('\n');
        out.push_str(&render_card(subnet, color));
    }

    let s = &plan.summary;
    let next_free = s
        .next_free_address
        .map(|a| a.to_string())
        .unwrap_or_else(|| "none".to_string());
    out.push_str(&format!(
        "\n{} subnet(s), {} addresses used ({} - {}), {} usable hosts, {:.1}% utilisation, next free {}\n",
        s.subnet_count,
        s.total_addresses,
        s.first_address,
        s.last_address,
        s.total_usable_hosts,
        s.utilisation_percent(),
        next_free
    ));
    out
}

/// Render a single subnet card.
pub fn render_card(s: &SubnetRecord, color: bool) -> String {
    let rows: [(&str, String); 10] = [
        ("Hosts Required", s.hosts_required.to_string()),
        (
            "Subnet Mask",
            format!("/{} ({})", s.prefix_length, s.subnet_mask),
        ),
        (
            "Network Address",
            highlight(s.network_address.to_string(), color),
        ),
        (
            "First Usable IP",
            highlight(s.first_usable_address.to_string(), color),
        ),
        (
            "Last Usable IP",
            highlight(s.last_usable_address.to_string(), color),
        ),
        (
            "Broadcast Address",
            highlight(s.broadcast_address.to_string(), color),
        ),
        ("Total Available Hosts", s.total_usable_hosts.to_string()),
        (
            "OSPF Wildcard Mask",
            highlight(s.wildcard_mask.to_string(), color),
        ),
        (
            "OSPF Network Statement",
            highlight(s.routing_announcement_statement.clone(), color),
        ),
        ("OSPF Area", s.routing_area.to_string()),
    ];

    let heading = format!("Subnet {}", s.index);
    let heading = if color {
        heading.on_blue().to_string()
    } else {
        heading
    };
    let ospf = s.ospf_config();
    std::iter::once(heading)
        .chain(
            rows.into_iter()
                .map(|(label, value)| format!("  {:<24}{value}", format!("{label}:"))),
        )
        .chain(ospf.lines().map(|line| format!("    {line}")))
        .map(|line| line + "\n")
        .collect()
}

/// Print the cards to stdout.
pub fn print_cards(plan: &Plan, color: bool) {
    print!("{}", render_cards(plan, color));
}
