// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! IP address subtrees.
//!
//! An `iPAddress` constraint is the network address followed by a mask of
//! the same width: 8 octets for IPv4 and 32 for IPv6. The mask is applied
//! octet by octet exactly as encoded. A mask that is not a contiguous run of
//! high-order bits is honoured literally.

use core::fmt;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::{Error, Result};

/// An address and mask pair taken from a name constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpNetwork {
    /// IPv4 range
    V4 { address: [u8; 4], mask: [u8; 4] },
    /// IPv6 range
    V6 { address: [u8; 16], mask: [u8; 16] },
}

impl IpNetwork {
    /// Parse the constraint encoding: address octets followed by mask octets.
    pub fn from_constraint_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            8 => {
                let mut address = [0u8; 4];
                let mut mask = [0u8; 4];
                address.copy_from_slice(&bytes[..4]);
                mask.copy_from_slice(&bytes[4..]);
                Ok(IpNetwork::V4 { address, mask })
            }
            32 => {
                let mut address = [0u8; 16];
                let mut mask = [0u8; 16];
                address.copy_from_slice(&bytes[..16]);
                mask.copy_from_slice(&bytes[16..]);
                Ok(IpNetwork::V6 { address, mask })
            }
            n => Err(Error::malformed_name(alloc::format!(
                "iPAddress constraint must be 8 or 32 octets, got {}",
                n
            ))),
        }
    }

    /// Build a network from an address and a prefix length.
    ///
    /// Returns `None` if the prefix is longer than the address.
    pub fn from_prefix(address: IpAddr, prefix: u8) -> Option<Self> {
        match address {
            IpAddr::V4(addr) => {
                let mut mask = [0u8; 4];
                fill_prefix_mask(&mut mask, prefix)?;
                Some(IpNetwork::V4 {
                    address: addr.octets(),
                    mask,
                })
            }
            IpAddr::V6(addr) => {
                let mut mask = [0u8; 16];
                fill_prefix_mask(&mut mask, prefix)?;
                Some(IpNetwork::V6 {
                    address: addr.octets(),
                    mask,
                })
            }
        }
    }

    /// Whether `addr` lies in this range. Families never cross.
    pub fn contains(&self, addr: &IpAddr) -> bool {
        match (self, addr) {
            (IpNetwork::V4 { address, mask }, IpAddr::V4(candidate)) => {
                masked_eq(&candidate.octets(), address, mask)
            }
            (IpNetwork::V6 { address, mask }, IpAddr::V6(candidate)) => {
                masked_eq(&candidate.octets(), address, mask)
            }
            (IpNetwork::V4 { .. }, IpAddr::V6(_)) | (IpNetwork::V6 { .. }, IpAddr::V4(_)) => false,
        }
    }
}

fn fill_prefix_mask(mask: &mut [u8], prefix: u8) -> Option<()> {
    let prefix = usize::from(prefix);
    if prefix > mask.len() * 8 {
        return None;
    }
    for (i, octet) in mask.iter_mut().enumerate() {
        let bits = prefix.saturating_sub(i * 8).min(8);
        *octet = match bits {
            0 => 0,
            n => 0xffu8 << (8 - n),
        };
    }
    Some(())
}

fn masked_eq(candidate: &[u8], address: &[u8], mask: &[u8]) -> bool {
    candidate.len() == address.len()
        && address.len() == mask.len()
        && candidate
            .iter()
            .zip(address)
            .zip(mask)
            .all(|((c, a), m)| c & m == a & m)
}

/// Interpret SAN octets as an address. Only 4 and 16 octets are addresses.
pub fn ip_addr_from_bytes(bytes: &[u8]) -> Option<IpAddr> {
    match bytes.len() {
        4 => {
            let mut octets = [0u8; 4];
            octets.copy_from_slice(bytes);
            Some(IpAddr::V4(Ipv4Addr::from(octets)))
        }
        16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            Some(IpAddr::V6(Ipv6Addr::from(octets)))
        }
        _ => None,
    }
}

/// Byte-wise equality of two addresses of the same family.
///
/// An IPv4-mapped IPv6 address never equals an IPv4 address.
pub fn same_address(presented: &IpAddr, reference: &IpAddr) -> bool {
    match (presented, reference) {
        (IpAddr::V4(a), IpAddr::V4(b)) => a.octets() == b.octets(),
        (IpAddr::V6(a), IpAddr::V6(b)) => a.octets() == b.octets(),
        (IpAddr::V4(_), IpAddr::V6(_)) | (IpAddr::V6(_), IpAddr::V4(_)) => false,
    }
}

impl fmt::Display for IpNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpNetwork::V4 { address, mask } => {
                write!(f, "{}/{}", Ipv4Addr::from(*address), Ipv4Addr::from(*mask))
            }
            IpNetwork::V6 { address, mask } => {
                write!(f, "{}/{}", Ipv6Addr::from(*address), Ipv6Addr::from(*mask))
            }
        }
    }
}
