//! Client affinity ("persistence") narrowing of a tier.
//!
//! The client address is reduced to an affinity value by dropping its
//! `persistence` low-order bits, so every client in the same address block
//! lands on the same record of a given tier.
//!
//! The index is `stable_hash(affinity) % tier_len`, where `stable_hash` is
//! reduction modulo the Mersenne prime 2^61 - 1. That function is pinned so
//! the same client block keeps the same answer across releases and across
//! implementations of this selection scheme. It mixes small inputs poorly
//! (it is the identity below 2^61), which means neighbouring address blocks
//! rotate through the tier in order rather than scattering.

use ferrous_gslb_domain::Candidate;
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use tracing::error;

/// 2^61 - 1
pub const STABLE_HASH_MODULUS: u64 = (1 << 61) - 1;

/// Narrows a tier to the single record owned by the client's address block.
///
/// A missing or unparsable address is logged and treated as affinity 0; the
/// lookup itself never fails on it. An empty tier yields an empty list.
pub fn pick(bucket: Vec<Candidate>, client_address: Option<&str>) -> Vec<Candidate> {
    let Some(first) = bucket.first() else {
        return bucket;
    };

    let affinity = affinity_value(client_address, first.persistence);
    let index = (stable_hash(affinity) % bucket.len() as u64) as usize;

    bucket.into_iter().nth(index).into_iter().collect()
}

/// Client address as an integer with its `persistence` low bits dropped.
///
/// Accepts bare IPv4/IPv6 addresses and `address/prefix` networks; for a
/// network the address part is used as given, not the network base.
pub fn affinity_value(client_address: Option<&str>, persistence: u32) -> u128 {
    let Some(raw) = client_address else {
        error!("Client address header missing, using affinity 0");
        return 0;
    };

    match raw.parse::<IpNetwork>() {
        Ok(network) => address_bits(network.ip())
            .checked_shr(persistence)
            .unwrap_or(0),
        Err(e) => {
            error!(client_address = raw, error = %e, "Client address header invalid, using affinity 0");
            0
        }
    }
}

pub fn stable_hash(value: u128) -> u64 {
    (value % STABLE_HASH_MODULUS as u128) as u64
}

fn address_bits(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}
