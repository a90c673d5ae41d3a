// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Extension decoding.
//!
//! Converts the `x509-cert` representation of the extensions the policy
//! checks use into this crate's name and usage model. Extensions the checks
//! do not consult are ignored.
//!
//! # References
//! - RFC 5280 Section 4.2.1.6 - Subject Alternative Name
//! - RFC 5280 Section 4.2.1.9 - Basic Constraints
//! - RFC 5280 Section 4.2.1.10 - Name Constraints
//! - RFC 5280 Section 4.2.1.12 - Extended Key Usage

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use const_oid::ObjectIdentifier;
use der::Decode;
use x509_cert::ext::pkix::name::GeneralName as X509GeneralName;
use x509_cert::ext::pkix::constraints::name::GeneralSubtree;
use x509_cert::ext::pkix::{BasicConstraints, ExtendedKeyUsage, NameConstraints, SubjectAltName};
use x509_cert::ext::Extension;

use crate::error::{Error, ParseError, Result};
use crate::name::{GeneralName, IpNetwork, NameConstraintsSet, Subtree, UnsupportedKind};
use crate::oids;

/// The extensions consulted by the policy checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyExtensions {
    /// Subject alternative names, empty if the extension is absent
    pub subject_alt_names: Vec<GeneralName>,
    /// Name constraints, `None` if the extension is absent
    pub name_constraints: Option<NameConstraintsSet>,
    /// The basic constraints `cA` flag, false if the extension is absent
    pub is_ca: bool,
    /// Extended key usage OIDs, `None` if the extension is absent
    pub extended_key_usage: Option<Vec<ObjectIdentifier>>,
}

impl PolicyExtensions {
    /// Decode the relevant extensions of a certificate.
    ///
    /// An extension that appears twice, or a known extension whose value
    /// does not decode, is malformed.
    pub fn from_extensions(extensions: &[Extension]) -> Result<Self> {
        let mut parsed = Self::default();

        for (i, ext) in extensions.iter().enumerate() {
            if extensions[..i].iter().any(|e| e.extn_id == ext.extn_id) {
                log::error!("duplicate extension {}", ext.extn_id);
                return Err(Error::ParseError(ParseError::DuplicateExtension(ext.extn_id)));
            }

            let value = ext.extn_value.as_bytes();
            match ext.extn_id {
                oids::SUBJECT_ALT_NAME => {
                    parsed.subject_alt_names = subject_alt_names(value)?;
                }
                oids::NAME_CONSTRAINTS => {
                    parsed.name_constraints = Some(name_constraints(value)?);
                }
                oids::BASIC_CONSTRAINTS => {
                    parsed.is_ca = BasicConstraints::from_der(value)?.ca;
                }
                oids::EXTENDED_KEY_USAGE => {
                    parsed.extended_key_usage = Some(ExtendedKeyUsage::from_der(value)?.0);
                }
                other => {
                    log::trace!("ignoring extension {} (critical: {})", other, ext.critical);
                }
            }
        }

        Ok(parsed)
    }
}

/// Decode a SubjectAltName extension value.
pub fn subject_alt_names(value: &[u8]) -> Result<Vec<GeneralName>> {
    SubjectAltName::from_der(value)?
        .0
        .iter()
        .map(presented_name)
        .collect()
}

/// Decode a NameConstraints extension value.
pub fn name_constraints(value: &[u8]) -> Result<NameConstraintsSet> {
    let constraints = NameConstraints::from_der(value)?;
    Ok(NameConstraintsSet::new(
        subtrees(constraints.permitted_subtrees.as_deref())?,
        subtrees(constraints.excluded_subtrees.as_deref())?,
    ))
}

fn subtrees(list: Option<&[GeneralSubtree]>) -> Result<Vec<Subtree>> {
    list.unwrap_or_default()
        .iter()
        .map(|subtree| {
            // minimum and maximum are never used in PKIX; only the default
            // encoding, with both absent, is accepted.
            if subtree.minimum != 0 || subtree.maximum.is_some() {
                return Err(Error::malformed_name("GeneralSubtree with minimum or maximum"));
            }
            constraint_subtree(&subtree.base)
        })
        .collect()
}

fn unsupported_kind(name: &X509GeneralName) -> Option<UnsupportedKind> {
    match name {
        X509GeneralName::OtherName(_) => Some(UnsupportedKind::OtherName),
        X509GeneralName::Rfc822Name(_) => Some(UnsupportedKind::Rfc822Name),
        X509GeneralName::DirectoryName(_) => Some(UnsupportedKind::DirectoryName),
        X509GeneralName::EdiPartyName(_) => Some(UnsupportedKind::EdiPartyName),
        X509GeneralName::UniformResourceIdentifier(_) => Some(UnsupportedKind::Uri),
        X509GeneralName::RegisteredId(_) => Some(UnsupportedKind::RegisteredId),
        X509GeneralName::DnsName(_) | X509GeneralName::IpAddress(_) => None,
    }
}

/// A SAN entry. IP addresses must be 4 or 16 octets.
fn presented_name(name: &X509GeneralName) -> Result<GeneralName> {
    match name {
        X509GeneralName::DnsName(dns) => Ok(GeneralName::DnsName(dns.to_string())),
        X509GeneralName::IpAddress(octets) => GeneralName::ip_from_bytes(octets.as_bytes())
            .ok_or_else(|| {
                Error::malformed_name(alloc::format!(
                    "iPAddress name must be 4 or 16 octets, got {}",
                    octets.as_bytes().len()
                ))
            }),
        other => unsupported_kind(other)
            .map(GeneralName::Unsupported)
            .ok_or_else(|| Error::malformed_name("unexpected general name")),
    }
}

/// A constraint subtree base. IP ranges must be 8 or 32 octets.
fn constraint_subtree(base: &X509GeneralName) -> Result<Subtree> {
    match base {
        X509GeneralName::DnsName(dns) => Ok(Subtree::DnsName(dns.to_string())),
        X509GeneralName::IpAddress(octets) => {
            IpNetwork::from_constraint_bytes(octets.as_bytes()).map(Subtree::IpAddress)
        }
        other => unsupported_kind(other)
            .map(Subtree::Unsupported)
            .ok_or_else(|| Error::malformed_name("unexpected general name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use alloc::vec;
    use der::asn1::{Ia5String, OctetString};
    use der::Encode;

    fn dns(s: &str) -> X509GeneralName {
        X509GeneralName::DnsName(Ia5String::new(s).unwrap())
    }

    fn ip(octets: &[u8]) -> X509GeneralName {
        X509GeneralName::IpAddress(OctetString::new(octets).unwrap())
    }

    fn extension(oid: ObjectIdentifier, value: Vec<u8>) -> Extension {
        Extension {
            extn_id: oid,
            critical: false,
            extn_value: OctetString::new(value).unwrap(),
        }
    }

    fn san_extension(names: Vec<X509GeneralName>) -> Extension {
        extension(oids::SUBJECT_ALT_NAME, SubjectAltName(names).to_der().unwrap())
    }

    #[test]
    fn test_san_conversion() {
        let email = X509GeneralName::Rfc822Name(Ia5String::new("joe@example.com").unwrap());
        let ext = san_extension(vec![dns("dns.example.com"), ip(&[12, 34, 56, 78]), email]);
        let parsed = PolicyExtensions::from_extensions(&[ext]).unwrap();
        assert_eq!(
            parsed.subject_alt_names,
            vec![
                GeneralName::DnsName("dns.example.com".to_string()),
                GeneralName::IpAddress("12.34.56.78".parse().unwrap()),
                GeneralName::Unsupported(UnsupportedKind::Rfc822Name),
            ]
        );
        assert!(parsed.name_constraints.is_none());
        assert!(!parsed.is_ca);
        assert!(parsed.extended_key_usage.is_none());
    }

    #[test]
    fn test_san_ip_length_checked() {
        let ext = san_extension(vec![ip(&[12, 34, 56, 0, 255, 255, 255, 0])]);
        let err = PolicyExtensions::from_extensions(&[ext]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_duplicate_extension_rejected() {
        let ext = san_extension(vec![dns("a.example.com")]);
        let err = PolicyExtensions::from_extensions(&[ext.clone(), ext]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_undecodable_known_extension_rejected() {
        let ext = extension(oids::BASIC_CONSTRAINTS, vec![0x04, 0x00]);
        let err = PolicyExtensions::from_extensions(&[ext]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn test_basic_constraints_and_eku() {
        let bc = BasicConstraints {
            ca: true,
            path_len_constraint: None,
        };
        let eku = ExtendedKeyUsage(vec![oids::CLIENT_AUTH]);
        let parsed = PolicyExtensions::from_extensions(&[
            extension(oids::BASIC_CONSTRAINTS, bc.to_der().unwrap()),
            extension(oids::EXTENDED_KEY_USAGE, eku.to_der().unwrap()),
        ])
        .unwrap();
        assert!(parsed.is_ca);
        assert_eq!(parsed.extended_key_usage, Some(vec![oids::CLIENT_AUTH]));
    }

    #[test]
    fn test_constraint_subtree_conversion() {
        assert_eq!(
            constraint_subtree(&dns(".example.com")).unwrap(),
            Subtree::DnsName(".example.com".to_string())
        );
        assert_eq!(
            constraint_subtree(&ip(&[12, 34, 56, 0, 255, 255, 255, 0])).unwrap(),
            Subtree::IpAddress(IpNetwork::V4 {
                address: [12, 34, 56, 0],
                mask: [255, 255, 255, 0]
            })
        );
        let err = constraint_subtree(&ip(&[12, 34, 56, 78])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);

        let dir = X509GeneralName::DirectoryName(Default::default());
        assert_eq!(
            constraint_subtree(&dir).unwrap(),
            Subtree::Unsupported(UnsupportedKind::DirectoryName)
        );
    }
}
