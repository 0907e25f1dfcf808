//! Width-aware CIDR arithmetic.
//!
//! Every address is carried as a `u128` regardless of version. The
//! [`BitWidth`] decides how many of the low bits are significant, so the
//! same mask/cut/broadcast helpers serve IPv4 and IPv6.

use crate::error::{Result, SpecReason, SubnetError};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Number of address bits for an IP version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitWidth {
    V4,
    V6,
}

impl BitWidth {
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => BitWidth::V4,
            IpAddr::V6(_) => BitWidth::V6,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            BitWidth::V4 => 32,
            BitWidth::V6 => 128,
        }
    }

    pub const fn version(self) -> u8 {
        match self {
            BitWidth::V4 => 4,
            BitWidth::V6 => 6,
        }
    }

    /// All significant bits set.
    pub const fn all_ones(self) -> u128 {
        match self {
            BitWidth::V4 => u32::MAX as u128,
            BitWidth::V6 => u128::MAX,
        }
    }
}

/// Reject prefix lengths longer than the width.
pub(crate) fn check_len(len: u8, width: BitWidth) -> Result<()> {
    if len > width.bits() {
        Err(SubnetError::invalid_spec(
            &format!("/{len}"),
            SpecReason::PrefixOutOfRange {
                prefix: len.to_string(),
                version: width.version(),
                max: width.bits(),
            },
        ))
    } else {
        Ok(())
    }
}

/// Convert a CIDR prefix length to a netmask.
///
/// # Examples
/// ```
/// use ip_calc::models::{get_cidr_mask, BitWidth};
/// assert_eq!(get_cidr_mask(24, BitWidth::V4).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8, width: BitWidth) -> Result<u128> {
    check_len(len, width)?;
    let right_len = u32::from(width.bits() - len);
    // a shift by the full 128 bits means no network bits at all
    let mask = width.all_ones().checked_shl(right_len).unwrap_or(0);
    Ok(mask & width.all_ones())
}

/// The wildcard (hostmask) for a prefix length: the netmask's complement.
pub fn host_mask(len: u8, width: BitWidth) -> Result<u128> {
    Ok(!get_cidr_mask(len, width)? & width.all_ones())
}

/// Clear the host bits of `bits`.
pub fn cut_addr(bits: u128, len: u8, width: BitWidth) -> Result<u128> {
    Ok(bits & get_cidr_mask(len, width)?)
}

/// Set the host bits of `bits`.
pub fn broadcast_addr(bits: u128, len: u8, width: BitWidth) -> Result<u128> {
    Ok(cut_addr(bits, len, width)? | host_mask(len, width)?)
}

pub fn to_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Build an address of the given width; bits above the width are dropped.
pub fn from_bits(bits: u128, width: BitWidth) -> IpAddr {
    match width {
        BitWidth::V4 => IpAddr::V4(Ipv4Addr::from((bits & width.all_ones()) as u32)),
        BitWidth::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
    }
}
