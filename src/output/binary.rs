//! Binary renderings of address values.

use crate::models::bits::to_bits;
use crate::models::BitWidth;
use crate::processing::Report;
use itertools::Itertools;
use serde::Serialize;
use std::net::IpAddr;

/// Render `value` as `width` binary digits in dot separated 8-bit groups.
///
/// # Examples
/// ```
/// use ip_calc::models::BitWidth;
/// use ip_calc::output::get_binary_string_rep;
/// assert_eq!(
///     get_binary_string_rep(0x08080808, BitWidth::V4),
///     "00001000.00001000.00001000.00001000"
/// );
/// ```
pub fn get_binary_string_rep(value: u128, width: BitWidth) -> String {
    let digits = format!(
        "{:0len$b}",
        value & width.all_ones(),
        len = usize::from(width.bits())
    );
    let octets = digits.chars().chunks(8);
    let grouped = octets
        .into_iter()
        .map(|octet| octet.collect::<String>())
        .join(".");
    grouped
}

/// The binary column of every report row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BinaryColumns {
    pub address: String,
    pub netmask: String,
    pub wildcard: String,
    pub network: String,
    pub broadcast: String,
    pub host_min: String,
    pub host_max: String,
    pub hosts: String,
}

impl BinaryColumns {
    pub fn for_report(report: &Report) -> BinaryColumns {
        let render = |addr: IpAddr| get_binary_string_rep(to_bits(addr), report.width);
        let render_host = |host: Option<IpAddr>| host.map(render).unwrap_or_default();

        BinaryColumns {
            address: render(report.host.address),
            netmask: render(report.host.netmask),
            wildcard: render(report.host.wildcard),
            network: render(report.network.network.network_address()),
            broadcast: render(report.network.broadcast),
            host_min: render_host(report.network.host_min),
            host_max: render_host(report.network.host_max),
            hosts: report.network.hosts.to_binary(),
        }
    }
}
