//! Error types for the calculator.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Why an `address/prefix` token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecReason {
    #[error("not a valid IPv4 or IPv6 address")]
    Address,

    #[error("prefix is not a number")]
    Prefix,

    #[error("prefix length {prefix} is out of range for IPv{version} (0-{max})")]
    PrefixOutOfRange {
        prefix: String,
        version: u8,
        max: u8,
    },

    #[error("{0} is not a valid netmask or hostmask")]
    Netmask(Ipv4Addr),
}

#[derive(Error, Debug)]
pub enum SubnetError {
    #[error("invalid address spec '{input}': {reason}")]
    InvalidAddressSpec { input: String, reason: SpecReason },

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SubnetError {
    pub fn invalid_spec(input: &str, reason: SpecReason) -> Self {
        SubnetError::InvalidAddressSpec {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejection reason, if this is a parse failure.
    pub fn spec_reason(&self) -> Option<&SpecReason> {
        match self {
            SubnetError::InvalidAddressSpec { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubnetError>;
