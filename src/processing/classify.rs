//! Address classification.
//!
//! A network gets the first label from [`RULES`] whose predicate holds,
//! checked in order: global, private, link-local, loopback, multicast,
//! reserved, unspecified. A predicate holds for a network only when it holds
//! for both its network and broadcast address, so a network straddling two
//! categories reports [`AddressType::Unknown`].

use crate::models::Network;
use ipnet::IpNet;
use lazy_static::lazy_static;
use serde::Serialize;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    Global,
    Private,
    LinkLocal,
    Loopback,
    Multicast,
    Reserved,
    Unspecified,
    /// No rule matched.
    Unknown,
}

impl AddressType {
    pub fn label(self) -> &'static str {
        match self {
            AddressType::Global => "global",
            AddressType::Private => "private",
            AddressType::LinkLocal => "link-local",
            AddressType::Loopback => "loopback",
            AddressType::Multicast => "multicast",
            AddressType::Reserved => "reserved",
            AddressType::Unspecified => "unspecified",
            AddressType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AddressType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

pub type Rule = (AddressType, fn(&Network) -> bool);

/// Priority order matters: the first match wins.
pub const RULES: &[Rule] = &[
    (AddressType::Global, is_global),
    (AddressType::Private, is_private),
    (AddressType::LinkLocal, is_link_local),
    (AddressType::Loopback, is_loopback),
    (AddressType::Multicast, is_multicast),
    (AddressType::Reserved, is_reserved),
    (AddressType::Unspecified, is_unspecified),
];

pub fn classify(network: &Network) -> AddressType {
    RULES
        .iter()
        .find(|(_, holds)| holds(network))
        .map(|(address_type, _)| *address_type)
        .unwrap_or(AddressType::Unknown)
}

fn parse_nets(raw: &[&str]) -> Vec<IpNet> {
    raw.iter()
        .map(|net| net.parse().expect("Invalid network literal?"))
        .collect()
}

lazy_static! {
    static ref PRIVATE: Vec<IpNet> = parse_nets(&[
        "0.0.0.0/8",
        "10.0.0.0/8",
        "172.16.0.0/12",
        "192.0.0.0/24",
        "192.0.2.0/24",
        "192.168.0.0/16",
        "198.18.0.0/15",
        "198.51.100.0/24",
        "203.0.113.0/24",
        "::ffff:0:0/96",
        "100::/64",
        "2001::/23",
        "2001:db8::/32",
        "fc00::/7",
    ]);
    static ref SHARED: Vec<IpNet> = parse_nets(&["100.64.0.0/10"]);
    static ref LINK_LOCAL: Vec<IpNet> = parse_nets(&["169.254.0.0/16", "fe80::/10"]);
    static ref LOOPBACK: Vec<IpNet> = parse_nets(&["127.0.0.0/8", "::1/128"]);
    static ref MULTICAST: Vec<IpNet> = parse_nets(&["224.0.0.0/4", "ff00::/8"]);
    static ref RESERVED: Vec<IpNet> = parse_nets(&[
        "240.0.0.0/4",
        "::/8",
        "100::/8",
        "200::/7",
        "400::/6",
        "800::/5",
        "1000::/4",
        "4000::/3",
        "6000::/3",
        "8000::/3",
        "a000::/3",
        "c000::/3",
        "e000::/4",
        "f000::/5",
        "f800::/6",
        "fe00::/9",
    ]);
}

fn in_any(nets: &[IpNet], addr: &IpAddr) -> bool {
    nets.iter().any(|net| net.contains(addr))
}

fn both_ends(network: &Network, holds: impl Fn(&IpAddr) -> bool) -> bool {
    holds(&network.network_address()) && holds(&network.broadcast_address())
}

fn is_global_addr(addr: &IpAddr) -> bool {
    !addr.is_unspecified()
        && [&*PRIVATE, &*SHARED, &*LINK_LOCAL, &*LOOPBACK, &*MULTICAST, &*RESERVED]
            .iter()
            .all(|nets| !in_any(nets, addr))
}

fn is_global(network: &Network) -> bool {
    both_ends(network, is_global_addr)
}

fn is_private(network: &Network) -> bool {
    !is_unspecified(network) && both_ends(network, |addr| in_any(&PRIVATE, addr))
}

fn is_link_local(network: &Network) -> bool {
    both_ends(network, |addr| in_any(&LINK_LOCAL, addr))
}

fn is_loopback(network: &Network) -> bool {
    both_ends(network, |addr| in_any(&LOOPBACK, addr))
}

fn is_multicast(network: &Network) -> bool {
    both_ends(network, |addr| in_any(&MULTICAST, addr))
}

fn is_reserved(network: &Network) -> bool {
    !is_unspecified(network) && both_ends(network, |addr| in_any(&RESERVED, addr))
}

fn is_unspecified(network: &Network) -> bool {
    both_ends(network, IpAddr::is_unspecified)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_of(spec: &str) -> AddressType {
        classify(&Network::of(&spec.parse().unwrap()).unwrap())
    }

    #[test]
    fn test_classify_ipv4() {
        assert_eq!(type_of("8.8.8.8/24"), AddressType::Global);
        assert_eq!(type_of("192.168.1.10/24"), AddressType::Private);
        assert_eq!(type_of("10.0.0.1/32"), AddressType::Private);
        assert_eq!(type_of("172.31.255.1/16"), AddressType::Private);
        assert_eq!(type_of("169.254.10.1/16"), AddressType::LinkLocal);
        assert_eq!(type_of("127.0.0.1/8"), AddressType::Loopback);
        assert_eq!(type_of("224.0.0.1/32"), AddressType::Multicast);
        assert_eq!(type_of("239.1.2.3/8"), AddressType::Multicast);
        assert_eq!(type_of("240.0.0.1/4"), AddressType::Reserved);
        assert_eq!(type_of("255.255.255.255"), AddressType::Reserved);
        assert_eq!(type_of("0.0.0.0/32"), AddressType::Unspecified);
        assert_eq!(type_of("0.0.0.0/8"), AddressType::Private);
    }

    #[test]
    fn test_classify_ipv6() {
        assert_eq!(type_of("2606:4700::1111/48"), AddressType::Global);
        assert_eq!(type_of("2001:db8::1/64"), AddressType::Private);
        assert_eq!(type_of("fd12:3456::1/64"), AddressType::Private);
        assert_eq!(type_of("fe80::1/64"), AddressType::LinkLocal);
        assert_eq!(type_of("::1/128"), AddressType::Loopback);
        assert_eq!(type_of("ff02::1/16"), AddressType::Multicast);
        assert_eq!(type_of("4000::1/16"), AddressType::Reserved);
        assert_eq!(type_of("::/128"), AddressType::Unspecified);
        assert_eq!(type_of("::/8"), AddressType::Reserved);
    }

    #[test]
    fn test_classify_unknown_fallback() {
        // shared address space is neither global nor private
        assert_eq!(type_of("100.64.0.1/10"), AddressType::Unknown);
        // straddles private and global space
        assert_eq!(type_of("10.0.0.0/7"), AddressType::Unknown);
        assert_eq!(type_of("0.0.0.0/0"), AddressType::Unknown);
    }

    #[test]
    fn test_rule_order() {
        let labels: Vec<&str> = RULES.iter().map(|(t, _)| t.label()).collect();
        assert_eq!(
            labels,
            vec![
                "global",
                "private",
                "link-local",
                "loopback",
                "multicast",
                "reserved",
                "unspecified"
            ]
        );
    }

    #[test]
    fn test_label_display_and_serialize() {
        assert_eq!(AddressType::LinkLocal.to_string(), "link-local");
        assert_eq!(
            serde_json::to_string(&AddressType::Unknown).unwrap(),
            r#""unknown""#
        );
    }
}
