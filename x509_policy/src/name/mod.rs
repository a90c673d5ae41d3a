// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! General names and name constraints.
//!
//! Only DNS names and IP addresses are matched against constraint subtrees.
//! Every other `GeneralName` form is kept as [`GeneralName::Unsupported`] so
//! that the enforcer can fail closed on it instead of silently skipping it.
//!
//! # References
//! - RFC 5280 Section 4.2.1.6 - Subject Alternative Name
//! - RFC 5280 Section 4.2.1.10 - Name Constraints

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::net::IpAddr;

pub mod constraints;
pub mod dns;
pub mod ip;

pub use constraints::{enforce, matches};
pub use ip::IpNetwork;

// ============================================================================
// Name forms
// ============================================================================

/// `GeneralName` forms that are recognised but never matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedKind {
    /// otherName [0]
    OtherName,
    /// rfc822Name [1]
    Rfc822Name,
    /// directoryName [4]
    DirectoryName,
    /// ediPartyName [5]
    EdiPartyName,
    /// uniformResourceIdentifier [6]
    Uri,
    /// registeredID [8]
    RegisteredId,
}

impl fmt::Display for UnsupportedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnsupportedKind::OtherName => "otherName",
            UnsupportedKind::Rfc822Name => "rfc822Name",
            UnsupportedKind::DirectoryName => "directoryName",
            UnsupportedKind::EdiPartyName => "ediPartyName",
            UnsupportedKind::Uri => "uniformResourceIdentifier",
            UnsupportedKind::RegisteredId => "registeredID",
        };
        f.write_str(s)
    }
}

/// The form of a name or subtree, used to pair names with the subtrees
/// that constrain them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameForm {
    /// dNSName
    DnsName,
    /// iPAddress, either family
    IpAddress,
    /// Any form without matching rules
    Unsupported(UnsupportedKind),
}

// ============================================================================
// GeneralName
// ============================================================================

/// A name presented by a certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneralName {
    /// A DNS name as it appears in the certificate, possibly a wildcard
    DnsName(String),
    /// A 4 or 16 byte address
    IpAddress(IpAddr),
    /// A name form the matcher does not implement
    Unsupported(UnsupportedKind),
}

impl GeneralName {
    /// The form of this name.
    pub fn form(&self) -> NameForm {
        match self {
            GeneralName::DnsName(_) => NameForm::DnsName,
            GeneralName::IpAddress(_) => NameForm::IpAddress,
            GeneralName::Unsupported(kind) => NameForm::Unsupported(*kind),
        }
    }

    /// Build an IP address name from the raw SAN octets.
    ///
    /// Only 4 and 16 byte values are addresses.
    pub fn ip_from_bytes(bytes: &[u8]) -> Option<Self> {
        ip::ip_addr_from_bytes(bytes).map(GeneralName::IpAddress)
    }
}

impl fmt::Display for GeneralName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneralName::DnsName(name) => write!(f, "dNSName({})", name),
            GeneralName::IpAddress(addr) => write!(f, "iPAddress({})", addr),
            GeneralName::Unsupported(kind) => write!(f, "{}", kind),
        }
    }
}

// ============================================================================
// Subtrees
// ============================================================================

/// One entry of a permitted or excluded subtree list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtree {
    /// A DNS constraint. An empty string matches every name and a leading
    /// dot restricts the match to proper subdomains.
    DnsName(String),
    /// An address range expressed as address and mask of equal width
    IpAddress(IpNetwork),
    /// A constraint on a form the matcher does not implement
    Unsupported(UnsupportedKind),
}

impl Subtree {
    /// The form of this subtree.
    pub fn form(&self) -> NameForm {
        match self {
            Subtree::DnsName(_) => NameForm::DnsName,
            Subtree::IpAddress(_) => NameForm::IpAddress,
            Subtree::Unsupported(kind) => NameForm::Unsupported(*kind),
        }
    }
}

impl fmt::Display for Subtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subtree::DnsName(name) => write!(f, "dNSName({})", name),
            Subtree::IpAddress(net) => write!(f, "iPAddress({})", net),
            Subtree::Unsupported(kind) => write!(f, "{}", kind),
        }
    }
}

/// The permitted and excluded subtrees of a name constraints extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameConstraintsSet {
    /// Names must fall in one of these, per form
    pub permitted: Vec<Subtree>,
    /// Names must not fall in any of these
    pub excluded: Vec<Subtree>,
}

impl NameConstraintsSet {
    /// Create a constraint set from its two subtree lists
    pub fn new(permitted: Vec<Subtree>, excluded: Vec<Subtree>) -> Self {
        Self {
            permitted,
            excluded,
        }
    }

    /// True if neither list has an entry.
    pub fn is_empty(&self) -> bool {
        self.permitted.is_empty() && self.excluded.is_empty()
    }

    /// All subtrees, permitted first.
    pub fn subtrees(&self) -> impl Iterator<Item = &Subtree> {
        self.permitted.iter().chain(self.excluded.iter())
    }

    /// True if any subtree, permitted or excluded, has the given form.
    pub fn constrains(&self, form: NameForm) -> bool {
        self.subtrees().any(|s| s.form() == form)
    }
}

// ============================================================================
// Subject names
// ============================================================================

/// The names a certificate presents for constraint checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectNames {
    names: Vec<GeneralName>,
}

impl SubjectNames {
    /// An empty name set
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the names of a certificate.
    ///
    /// The subject distinguished name is always presented as a
    /// `directoryName`. A common name only takes part when it is
    /// syntactically a DNS name; other subject attributes, including an
    /// embedded email address, are not checked.
    pub fn from_certificate_parts<S: AsRef<str>>(
        common_names: &[S],
        subject_alt_names: &[GeneralName],
    ) -> Self {
        let mut names = Self::new();
        names.push(GeneralName::Unsupported(UnsupportedKind::DirectoryName));
        for cn in common_names {
            let cn = cn.as_ref();
            if dns::is_valid_presented_id(cn) {
                names.push(GeneralName::DnsName(String::from(cn)));
            } else {
                log::trace!("common name {:?} is not a DNS name, not constrained", cn);
            }
        }
        for san in subject_alt_names {
            names.push(san.clone());
        }
        names
    }

    /// Add a name
    pub fn push(&mut self, name: GeneralName) {
        self.names.push(name);
    }

    /// Iterate over the names in presentation order
    pub fn iter(&self) -> core::slice::Iter<'_, GeneralName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubjectNames {
    type Item = &'a GeneralName;
    type IntoIter = core::slice::Iter<'a, GeneralName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_subject_names_always_present_directory_name() {
        let names = SubjectNames::from_certificate_parts::<&str>(&[], &[]);
        assert_eq!(names.len(), 1);
        assert_eq!(
            names.iter().next(),
            Some(&GeneralName::Unsupported(UnsupportedKind::DirectoryName))
        );
    }

    #[test]
    fn test_subject_names_skip_non_dns_common_names() {
        let names = SubjectNames::from_certificate_parts(
            &["subject.example.com", "12.34.56.78", "Example Issuing CA"],
            &[GeneralName::DnsName("dns.example.com".to_string())],
        );
        let collected: Vec<&GeneralName> = names.iter().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(
            collected[1],
            &GeneralName::DnsName("subject.example.com".to_string())
        );
        assert_eq!(
            collected[2],
            &GeneralName::DnsName("dns.example.com".to_string())
        );
    }

    #[test]
    fn test_ip_from_bytes() {
        assert!(GeneralName::ip_from_bytes(&[12, 34, 56, 78]).is_some());
        assert!(GeneralName::ip_from_bytes(&[0u8; 16]).is_some());
        assert!(GeneralName::ip_from_bytes(&[1, 2, 3]).is_none());
        assert!(GeneralName::ip_from_bytes(&[0u8; 8]).is_none());
    }

    #[test]
    fn test_constraint_set_forms() {
        let set = NameConstraintsSet::new(
            vec![Subtree::DnsName(".example.com".to_string())],
            vec![Subtree::Unsupported(UnsupportedKind::Rfc822Name)],
        );
        assert!(!set.is_empty());
        assert!(set.constrains(NameForm::DnsName));
        assert!(set.constrains(NameForm::Unsupported(UnsupportedKind::Rfc822Name)));
        assert!(!set.constrains(NameForm::IpAddress));
        assert!(NameConstraintsSet::default().is_empty());
    }

    #[test]
    fn test_display() {
        let name = GeneralName::DnsName("a.example.com".to_string());
        assert_eq!(name.to_string(), "dNSName(a.example.com)");
        let name = GeneralName::Unsupported(UnsupportedKind::Uri);
        assert_eq!(name.to_string(), "uniformResourceIdentifier");
    }
}
