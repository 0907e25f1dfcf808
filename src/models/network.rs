//! The containing network of an [`AddressInterface`].

use super::bits::{broadcast_addr, cut_addr, from_bits, to_bits, BitWidth};
use super::interface::AddressInterface;
use crate::error::Result;
use ipnet::{IpAddrRange, Ipv4AddrRange, Ipv6AddrRange};
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Network address, broadcast address and prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Network {
    network: IpAddr,
    broadcast: IpAddr,
    prefix_len: u8,
    width: BitWidth,
}

impl Network {
    pub fn of(interface: &AddressInterface) -> Result<Network> {
        let width = interface.width();
        let prefix_len = interface.prefix_len();
        let bits = to_bits(interface.addr());

        Ok(Network {
            network: from_bits(cut_addr(bits, prefix_len, width)?, width),
            broadcast: from_bits(broadcast_addr(bits, prefix_len, width)?, width),
            prefix_len,
            width,
        })
    }

    pub fn network_address(&self) -> IpAddr {
        self.network
    }

    pub fn broadcast_address(&self) -> IpAddr {
        self.broadcast
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn width(&self) -> BitWidth {
        self.width
    }

    /// True when the network has at least two host bits, so network and
    /// broadcast are distinct from every usable host.
    pub fn has_broadcast_layout(&self) -> bool {
        self.prefix_len + 2 <= self.width.bits()
    }

    /// Usable host addresses.
    ///
    /// Strictly between network and broadcast, except for point-to-point
    /// (/31, /127) networks which yield both addresses and single-host
    /// (/32, /128) networks which yield the one address.
    pub fn hosts(&self) -> IpAddrRange {
        let mut start = to_bits(self.network);
        let mut end = to_bits(self.broadcast);
        if self.has_broadcast_layout() {
            start += 1;
            end -= 1;
        }

        match self.width {
            BitWidth::V4 => IpAddrRange::V4(Ipv4AddrRange::new(
                Ipv4Addr::from(start as u32),
                Ipv4Addr::from(end as u32),
            )),
            BitWidth::V6 => IpAddrRange::V6(Ipv6AddrRange::new(
                Ipv6Addr::from(start),
                Ipv6Addr::from(end),
            )),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}
