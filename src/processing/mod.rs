//! Subnet derivation logic.
//!
//! - [`derive`] - builds the full [`Report`] for an interface
//! - [`hosts`] - first/last usable host, fast or exhaustive
//! - [`classify`] - ordered address classification rules

mod classify;
mod derive;
mod hosts;

// Re-export public functions
pub use classify::{classify, AddressType, RULES};
pub use derive::{derive, HostInfo, NetworkInfo, Report};
pub use hosts::{host_range, HostRange, HostStrategy};
