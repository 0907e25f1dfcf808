//! Address-with-prefix parsing.
//!
//! Provides [`AddressInterface`], a host address paired with the prefix
//! length of its containing network, e.g. `192.168.1.10/24`.

use super::bits::BitWidth;
use crate::error::{Result, SpecReason, SubnetError};
use ipnet::IpNet;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// An IP address plus prefix length. The prefix is always within the
/// address's bit-width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressInterface {
    net: IpNet,
}

impl AddressInterface {
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<AddressInterface> {
        let width = BitWidth::of(&addr);
        let net = IpNet::new(addr, prefix_len).map_err(|_| {
            SubnetError::invalid_spec(
                &format!("{addr}/{prefix_len}"),
                SpecReason::PrefixOutOfRange {
                    prefix: prefix_len.to_string(),
                    version: width.version(),
                    max: width.bits(),
                },
            )
        })?;
        Ok(AddressInterface { net })
    }

    /// Parse `address[/prefix]`.
    ///
    /// Without a prefix the interface is a single host. IPv4 also accepts a
    /// dotted netmask (`/255.255.255.0`) or hostmask (`/0.0.0.255`).
    pub fn parse(input: &str) -> Result<AddressInterface> {
        let spec = input.trim();
        let (addr_part, prefix_part) = match spec.split_once('/') {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (spec, None),
        };

        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| SubnetError::invalid_spec(input, SpecReason::Address))?;
        let width = BitWidth::of(&addr);

        let prefix_len = match prefix_part {
            None => width.bits(),
            Some(raw) => {
                parse_prefix(raw, width).map_err(|reason| SubnetError::invalid_spec(input, reason))?
            }
        };
        log::trace!("parsed {input:?} as {addr}/{prefix_len}");

        AddressInterface::new(addr, prefix_len)
    }

    pub fn addr(&self) -> IpAddr {
        self.net.addr()
    }

    pub fn prefix_len(&self) -> u8 {
        self.net.prefix_len()
    }

    pub fn width(&self) -> BitWidth {
        BitWidth::of(&self.net.addr())
    }

    pub fn version(&self) -> u8 {
        self.width().version()
    }

    /// The address library's view of this interface.
    pub fn as_ipnet(&self) -> IpNet {
        self.net
    }
}

fn parse_prefix(raw: &str, width: BitWidth) -> std::result::Result<u8, SpecReason> {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        let out_of_range = || SpecReason::PrefixOutOfRange {
            prefix: raw.to_string(),
            version: width.version(),
            max: width.bits(),
        };
        // too many digits for a u8 is just a very large prefix
        let len: u8 = raw.parse().map_err(|_| out_of_range())?;
        if len > width.bits() {
            return Err(out_of_range());
        }
        return Ok(len);
    }

    match width {
        BitWidth::V4 => {
            let mask: Ipv4Addr = raw.parse().map_err(|_| SpecReason::Prefix)?;
            parse_dotted_mask(mask)
        }
        BitWidth::V6 => Err(SpecReason::Prefix),
    }
}

/// Netmask first, then hostmask.
fn parse_dotted_mask(mask: Ipv4Addr) -> std::result::Result<u8, SpecReason> {
    if let Ok(len) = ipnet::ipv4_mask_to_prefix(mask) {
        return Ok(len);
    }
    let inverted = Ipv4Addr::from(!u32::from(mask));
    ipnet::ipv4_mask_to_prefix(inverted).map_err(|_| SpecReason::Netmask(mask))
}

impl FromStr for AddressInterface {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<AddressInterface> {
        AddressInterface::parse(s)
    }
}

impl std::fmt::Display for AddressInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr(), self.prefix_len())
    }
}
