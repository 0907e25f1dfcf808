//! Usable host count of a network.

use super::bits::{check_len, BitWidth};
use crate::error::Result;
use serde::Serialize;

/// `2^(width - prefix) - 2`, exact over the whole range from `-1`
/// (single host) to `2^128 - 2` (IPv6 `/0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostCount {
    magnitude: u128,
    negative: bool,
}

impl HostCount {
    /// Total addresses minus network and broadcast. Not clamped.
    pub fn for_prefix(prefix_len: u8, width: BitWidth) -> Result<HostCount> {
        check_len(prefix_len, width)?;
        let host_bits = u32::from(width.bits() - prefix_len);
        if host_bits == 0 {
            return Ok(HostCount {
                magnitude: 1,
                negative: true,
            });
        }
        // 2^host_bits - 1, without overflowing at 128 host bits
        let last_offset = u128::MAX >> (128 - host_bits);
        Ok(HostCount {
            magnitude: last_offset - 1,
            negative: false,
        })
    }

    pub fn magnitude(&self) -> u128 {
        self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `None` only for counts above `i128::MAX` (IPv6 `/0`).
    pub fn to_i128(&self) -> Option<i128> {
        let value = i128::try_from(self.magnitude).ok()?;
        Some(if self.negative { -value } else { value })
    }

    /// Ungrouped binary digits, `-` prefixed when negative.
    pub fn to_binary(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{:b}", self.magnitude)
    }
}

impl std::fmt::Display for HostCount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

impl Serialize for HostCount {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self.to_i128().and_then(|v| i64::try_from(v).ok()) {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.collect_str(self),
        }
    }
}
