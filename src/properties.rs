//! Property-based tests for the derivation engine and binary renderer.

use crate::models::bits::to_bits;
use crate::models::{AddressInterface, BitWidth, Network};
use crate::output::get_binary_string_rep;
use crate::processing::{classify, derive, host_range, HostStrategy, RULES};
use proptest::prelude::*;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Strategy for generating IPv4 interfaces with a prefix in `prefix`
fn ipv4_interface(prefix: std::ops::RangeInclusive<u8>) -> impl Strategy<Value = AddressInterface> {
    (any::<[u8; 4]>(), prefix).prop_map(|(octets, len)| {
        AddressInterface::new(IpAddr::V4(Ipv4Addr::from(octets)), len).unwrap()
    })
}

/// Strategy for generating IPv6 interfaces with a prefix in `prefix`
fn ipv6_interface(prefix: std::ops::RangeInclusive<u8>) -> impl Strategy<Value = AddressInterface> {
    (any::<[u16; 8]>(), prefix).prop_map(|(segments, len)| {
        AddressInterface::new(IpAddr::V6(Ipv6Addr::from(segments)), len).unwrap()
    })
}

/// Strategy for generating any valid interface
fn interface_strategy() -> impl Strategy<Value = AddressInterface> {
    prop_oneof![ipv4_interface(0..=32), ipv6_interface(0..=128)]
}

proptest! {
    #[test]
    fn wildcard_fills_host_bits(interface in interface_strategy()) {
        let report = derive(&interface, HostStrategy::Fast).unwrap();
        let network = to_bits(report.network.network.network_address());
        let broadcast = to_bits(report.network.broadcast);
        let wildcard = to_bits(report.host.wildcard);

        prop_assert_eq!(network | wildcard, broadcast);
        prop_assert_eq!(network & wildcard, 0);
    }

    #[test]
    fn netmask_and_wildcard_are_complements(interface in interface_strategy()) {
        let report = derive(&interface, HostStrategy::Fast).unwrap();
        let netmask = to_bits(report.host.netmask);
        let wildcard = to_bits(report.host.wildcard);

        prop_assert_eq!(netmask & wildcard, 0);
        prop_assert_eq!(netmask | wildcard, report.width.all_ones());
    }

    #[test]
    fn host_count_spans_network_to_broadcast(interface in interface_strategy()) {
        prop_assume!(interface.prefix_len() < interface.width().bits());
        let report = derive(&interface, HostStrategy::Fast).unwrap();
        let network = to_bits(report.network.network.network_address());
        let broadcast = to_bits(report.network.broadcast);

        prop_assert!(!report.network.hosts.is_negative());
        prop_assert_eq!(report.network.hosts.magnitude(), broadcast - network - 1);
    }

    #[test]
    fn binary_rendering_round_trips(interface in interface_strategy()) {
        let value = to_bits(interface.addr());
        let width = interface.width();
        let rendered = get_binary_string_rep(value, width);

        prop_assert_eq!(rendered.split('.').count(), usize::from(width.bits()) / 8);
        let digits: String = rendered.chars().filter(|c| *c != '.').collect();
        prop_assert_eq!(digits.len(), usize::from(width.bits()));
        prop_assert_eq!(u128::from_str_radix(&digits, 2).unwrap(), value);
    }

    #[test]
    fn strategies_agree_on_ipv4(interface in ipv4_interface(20..=30)) {
        let network = Network::of(&interface).unwrap();
        prop_assert_eq!(
            host_range(&network, HostStrategy::Fast),
            host_range(&network, HostStrategy::Exhaustive)
        );
    }

    #[test]
    fn strategies_agree_on_ipv6(interface in ipv6_interface(116..=126)) {
        let network = Network::of(&interface).unwrap();
        prop_assert_eq!(
            host_range(&network, HostStrategy::Fast),
            host_range(&network, HostStrategy::Exhaustive)
        );
    }

    #[test]
    fn classification_is_deterministic(interface in interface_strategy()) {
        let network = Network::of(&interface).unwrap();
        let first = classify(&network);
        prop_assert_eq!(first, classify(&network));

        // a matched label is the first rule that holds
        if let Some(position) = RULES.iter().position(|(t, _)| *t == first) {
            prop_assert!(RULES[..position].iter().all(|(_, holds)| !holds(&network)));
        }
    }

    #[test]
    fn network_matches_ipnet(interface in interface_strategy()) {
        let network = Network::of(&interface).unwrap();
        prop_assert_eq!(network.network_address(), interface.as_ipnet().network());
        prop_assert_eq!(network.broadcast_address(), interface.as_ipnet().broadcast());
        prop_assert_eq!(network.width(), BitWidth::of(&interface.addr()));
    }
}
