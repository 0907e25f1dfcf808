//! Column output in the style of the Linux `ipcalc` tool.

use super::binary::BinaryColumns;
use crate::processing::Report;
use std::net::IpAddr;

/// Line between the host block and the network block.
pub const SEPARATOR: &str = "=>";

/// Format one left-justified `label value binary` row.
///
/// Columns are 10, 40 and 10 characters wide; longer values widen their
/// column rather than being cut.
pub fn format_row(label: &str, value: &str, binary: &str) -> String {
    format!("{label:<10} {value:<40} {binary:<10}")
}

fn host_or_none(host: Option<IpAddr>) -> String {
    host.map(|h| h.to_string())
        .unwrap_or_else(|| "none".to_string())
}

/// Render the host block, the separator and the network block. Binary
/// columns are left empty unless `show_binary` is set.
pub fn render_report(report: &Report, show_binary: bool) -> String {
    let binary = if show_binary {
        BinaryColumns::for_report(report)
    } else {
        BinaryColumns::default()
    };
    let net = &report.network;

    let rows = [
        format_row("Address:", &report.host.address.to_string(), &binary.address),
        format_row("Netmask:", &report.host.netmask.to_string(), &binary.netmask),
        format_row("Wildcard:", &report.host.wildcard.to_string(), &binary.wildcard),
        SEPARATOR.to_string(),
        format_row("Network:", &net.network.to_string(), &binary.network),
        format_row("Broadcast:", &net.broadcast.to_string(), &binary.broadcast),
        format_row("HostMin:", &host_or_none(net.host_min), &binary.host_min),
        format_row("HostMax:", &host_or_none(net.host_max), &binary.host_max),
        format_row("Hosts/Net:", &net.hosts.to_string(), &binary.hosts),
        format_row("Type:", net.address_type.label(), ""),
    ];

    let mut out = rows.join("\n");
    out.push('\n');
    out
}
