//! Derivation of the full addressing picture for one interface.

use super::classify::{classify, AddressType};
use super::hosts::{host_range, HostStrategy};
use crate::error::Result;
use crate::models::bits::{from_bits, to_bits};
use crate::models::{get_cidr_mask, host_mask, AddressInterface, BitWidth, HostCount, Network};
use serde::Serialize;
use std::net::IpAddr;

/// Everything shown in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub version: u8,
    #[serde(skip)]
    pub width: BitWidth,
    pub host: HostInfo,
    pub network: NetworkInfo,
}

/// Host block: values of the interface itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostInfo {
    pub address: IpAddr,
    pub netmask: IpAddr,
    pub wildcard: IpAddr,
}

/// Network block: values of the containing network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub network: Network,
    pub broadcast: IpAddr,
    pub host_min: Option<IpAddr>,
    pub host_max: Option<IpAddr>,
    pub hosts: HostCount,
    #[serde(rename = "type")]
    pub address_type: AddressType,
}

pub fn derive(interface: &AddressInterface, strategy: HostStrategy) -> Result<Report> {
    let width = interface.width();
    let prefix_len = interface.prefix_len();
    log::info!("#Start derive() for {interface} ({strategy:?})");

    let address = interface.addr();
    let netmask = get_cidr_mask(prefix_len, width)?;
    let wildcard = host_mask(prefix_len, width)?;
    log::trace!(
        "address={:#x} netmask={netmask:#x} wildcard={wildcard:#x}",
        to_bits(address)
    );

    let network = Network::of(interface)?;
    let hosts = host_range(&network, strategy);
    let count = HostCount::for_prefix(prefix_len, width)?;
    let address_type = classify(&network);
    log::debug!("{network}: {count} hosts, type {address_type}");

    Ok(Report {
        version: width.version(),
        width,
        host: HostInfo {
            address,
            netmask: from_bits(netmask, width),
            wildcard: from_bits(wildcard, width),
        },
        network: NetworkInfo {
            network,
            broadcast: network.broadcast_address(),
            host_min: hosts.first,
            host_max: hosts.last,
            hosts: count,
            address_type,
        },
    })
}
