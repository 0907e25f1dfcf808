//! First and last usable host of a network.

use crate::models::bits::{from_bits, to_bits};
use crate::models::Network;
use serde::Serialize;
use std::net::IpAddr;

/// How the last usable host is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostStrategy {
    /// Derive it as broadcast - 1.
    #[default]
    Fast,
    /// Walk the whole host iterator. O(host count).
    Exhaustive,
}

/// `None` when the host iterator yields nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostRange {
    pub first: Option<IpAddr>,
    pub last: Option<IpAddr>,
}

pub fn host_range(network: &Network, strategy: HostStrategy) -> HostRange {
    let mut hosts = network.hosts();
    let first = hosts.next();

    let last = match strategy {
        HostStrategy::Fast if network.has_broadcast_layout() => {
            let broadcast = to_bits(network.broadcast_address());
            Some(from_bits(broadcast - 1, network.width()))
        }
        // /31 and /32 style networks have no broadcast to step back from;
        // their iterator holds at most two addresses
        HostStrategy::Fast => hosts.next_back().or(first),
        HostStrategy::Exhaustive => {
            log::debug!(
                "draining host iterator of {network} ({} host bits)",
                network.width().bits() - network.prefix_len()
            );
            hosts.fold(first, |_, host| Some(host))
        }
    };

    HostRange { first, last }
}
