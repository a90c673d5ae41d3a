// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Parsed certificate inputs.
//!
//! [`ParsedCertificate`] decodes a DER or PEM certificate with `x509-cert`
//! and keeps only what the policy checks consume: subject common names,
//! alternative names, the name constraints it imposes as an issuer, its
//! basic constraints and extended key usage, its public key, and the signed
//! bytes with their signature.
//!
//! # Examples
//!
//! ```no_run
//! use x509_policy::ParsedCertificate;
//!
//! # fn example(der_bytes: &[u8], pem_string: &str) -> x509_policy::Result<()> {
//! let cert = ParsedCertificate::from_der(der_bytes)?;
//! for name in cert.subject_alt_names() {
//!     println!("{}", name);
//! }
//!
//! let cert = ParsedCertificate::from_pem(pem_string)?;
//! # let _ = cert;
//! # Ok(())
//! # }
//! ```

pub mod extensions;

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use const_oid::ObjectIdentifier;
use der::{Decode, Encode, Tag, Tagged};
use spki::AlgorithmIdentifierOwned;
use x509_cert::name::Name;
use x509_cert::Certificate;

use crate::error::{Error, ParseError, Result};
use crate::name::{GeneralName, NameConstraintsSet, SubjectNames};
use crate::oids;
use crate::signature::PublicKey;

pub use extensions::PolicyExtensions;

/// A decoded certificate reduced to the fields the policy checks use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCertificate {
    common_names: Vec<String>,
    extensions: PolicyExtensions,
    public_key: PublicKey,
    signature_algorithm: AlgorithmIdentifierOwned,
    signature: Vec<u8>,
    tbs_der: Vec<u8>,
}

impl ParsedCertificate {
    /// Parse a DER-encoded certificate.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let cert = Certificate::from_der(bytes)?;
        Self::from_certificate(&cert)
    }

    /// Parse a PEM-encoded certificate. The label must be `CERTIFICATE`.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let (label, der_bytes) = pem_rfc7468::decode_vec(pem.as_bytes())?;
        if label != "CERTIFICATE" {
            return Err(Error::ParseError(ParseError::InvalidPem(
                alloc::format!("wrong PEM label {:?}", label),
            )));
        }
        Self::from_der(&der_bytes)
    }

    /// Extract the policy inputs from a decoded certificate.
    pub fn from_certificate(cert: &Certificate) -> Result<Self> {
        let tbs = &cert.tbs_certificate;

        // RFC 5280 4.1.1.2: signatureAlgorithm must equal the TBSCertificate
        // signature field, parameters included.
        if cert.signature_algorithm != tbs.signature {
            log::error!(
                "signature algorithm {} differs from TBSCertificate signature {}",
                cert.signature_algorithm.oid,
                tbs.signature.oid
            );
            return Err(Error::ParseError(ParseError::DerError(
                "signature algorithm mismatch".to_string(),
            )));
        }

        let extensions = match &tbs.extensions {
            Some(exts) => PolicyExtensions::from_extensions(exts)?,
            None => PolicyExtensions::default(),
        };

        let signature = cert
            .signature
            .as_bytes()
            .ok_or_else(|| Error::ParseError(ParseError::DerError(
                "signature has unused bits".to_string(),
            )))?
            .to_vec();

        let parsed = Self {
            common_names: common_names(&tbs.subject),
            extensions,
            public_key: PublicKey::from_spki(&tbs.subject_public_key_info)?,
            signature_algorithm: cert.signature_algorithm.clone(),
            signature,
            tbs_der: tbs.to_der()?,
        };

        log::trace!(
            "parsed certificate: {} common names, {} alt names, ca: {}",
            parsed.common_names.len(),
            parsed.extensions.subject_alt_names.len(),
            parsed.extensions.is_ca
        );
        Ok(parsed)
    }

    /// Subject common names, in subject order.
    pub fn common_names(&self) -> &[String] {
        &self.common_names
    }

    /// Subject alternative names, empty when the extension is absent.
    pub fn subject_alt_names(&self) -> &[GeneralName] {
        &self.extensions.subject_alt_names
    }

    /// The names this certificate presents to an issuer's name constraints.
    pub fn subject_names(&self) -> SubjectNames {
        SubjectNames::from_certificate_parts(
            self.common_names.as_slice(),
            &self.extensions.subject_alt_names,
        )
    }

    /// Name constraints this certificate imposes on the certificates it
    /// issues.
    pub fn name_constraints(&self) -> Option<&NameConstraintsSet> {
        self.extensions.name_constraints.as_ref()
    }

    /// Whether basic constraints assert `cA`.
    pub fn is_ca(&self) -> bool {
        self.extensions.is_ca
    }

    /// Extended key usage purposes, `None` if the extension is absent.
    pub fn extended_key_usage(&self) -> Option<&[ObjectIdentifier]> {
        self.extensions.extended_key_usage.as_deref()
    }

    /// The subject public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The outer signature algorithm identifier
    pub fn signature_algorithm(&self) -> &AlgorithmIdentifierOwned {
        &self.signature_algorithm
    }

    /// The signature over [`Self::tbs_certificate_der`]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// DER encoding of the TBSCertificate, the signed bytes.
    pub fn tbs_certificate_der(&self) -> &[u8] {
        &self.tbs_der
    }
}

/// Every common name attribute of `subject` held in a string type that
/// decodes as UTF-8.
fn common_names(subject: &Name) -> Vec<String> {
    let mut names = Vec::new();
    for rdn in subject.0.iter() {
        for atv in rdn.0.iter() {
            if atv.oid != oids::COMMON_NAME {
                continue;
            }
            let is_string = matches!(
                atv.value.tag(),
                Tag::Utf8String | Tag::PrintableString | Tag::Ia5String | Tag::TeletexString
            );
            match core::str::from_utf8(atv.value.value()) {
                Ok(cn) if is_string => names.push(cn.to_string()),
                _ => log::trace!("skipping common name with tag {}", atv.value.tag()),
            }
        }
    }
    names
}
