//! Domain models for the subnet calculator.
//!
//! - [`AddressInterface`] - an address with its prefix length, as typed by the user
//! - [`Network`] - the containing network (network/broadcast addresses)
//! - [`HostCount`] - usable host count, exact for every prefix
//! - [`BitWidth`] and the width-aware mask helpers in [`bits`]

pub mod bits;
mod host_count;
mod interface;
mod network;

// Re-export public types
pub use bits::{broadcast_addr, cut_addr, get_cidr_mask, host_mask, BitWidth};
pub use host_count::HostCount;
pub use interface::AddressInterface;
pub use network::Network;
