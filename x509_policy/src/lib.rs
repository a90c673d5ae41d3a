// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! X.509 End-Entity Policy Checks
//!
//! A no_std-compatible library that decides whether an end-entity
//! certificate is acceptable under its issuer's policy. Certificates are
//! decoded with `x509-cert`; signatures are checked through a pluggable
//! crypto backend (ring by default).
//!
//! # Features
//! - RFC 5280 name constraints over DNS names and IP addresses, failing
//!   closed on constrained name forms that cannot be evaluated
//! - A fixed signature algorithm registry that rejects key type and key size
//!   mismatches before any cryptography runs
//! - Reference name checks (DNS, wildcard and IP SANs)
//! - Extended key usage checks
//!
//! # Example
//! ```no_run
//! use x509_policy::{ParsedCertificate, ValidationOptions, Validator};
//!
//! # fn example(ee_der: &[u8], ca_der: &[u8]) -> x509_policy::Result<()> {
//! let ee = ParsedCertificate::from_der(ee_der)?;
//! let ca = ParsedCertificate::from_der(ca_der)?;
//! let options = ValidationOptions::new().for_client_auth();
//! Validator::new().validate_certificate(&ee, &ca, &["host.example.com"], &[], &options)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod certificate;
pub mod crypto_backend;
pub mod error;
pub mod name;
pub mod oids;
pub mod signature;
pub mod validator;

pub use certificate::ParsedCertificate;
pub use crypto_backend::CryptoBackend;
#[cfg(feature = "ring-backend")]
pub use crypto_backend::RingBackend;
pub use error::{Error, ErrorKind, Result};
pub use name::{GeneralName, IpNetwork, NameConstraintsSet, SubjectNames, Subtree, UnsupportedKind};
pub use signature::{
    verify_signature_with_backend, KeyType, PublicKey, SignatureAlgorithm, SignatureAlgorithmId,
};
#[cfg(feature = "ring-backend")]
pub use signature::verify_signature;
pub use validator::{check_extended_key_usage, verify_is_valid_for_name, ValidationOptions, Validator};
#[cfg(feature = "ring-backend")]
pub use validator::validate_certificate;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::validator::{ValidationOptions, Validator};
    pub use crate::{Error, ErrorKind, ParsedCertificate, PublicKey, Result, SignatureAlgorithmId};
}
