// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! End-entity validation against its issuer.
//!
//! [`Validator::validate_certificate`] runs the checks in a fixed order and
//! stops at the first failure:
//!
//! 1. the issuer asserts `cA` in its basic constraints (unless disabled);
//! 2. the end-entity signature verifies under the issuer's key;
//! 3. the end-entity names satisfy the issuer's name constraints;
//! 4. every name the caller expects to be valid is;
//! 5. every name the caller expects to be invalid is not;
//! 6. the extended key usage, if present, includes the required purpose.
//!
//! Failures of steps 1 to 3 all surface as
//! [`ErrorKind::ChainTrustFailure`](crate::error::ErrorKind::ChainTrustFailure);
//! the specific cause is only logged.

extern crate alloc;

use const_oid::ObjectIdentifier;
use core::net::IpAddr;

use crate::certificate::ParsedCertificate;
#[cfg(feature = "ring-backend")]
use crate::crypto_backend::RingBackend;
use crate::crypto_backend::CryptoBackend;
use crate::error::{Error, Result};
use crate::name::{self, dns, ip, GeneralName};
use crate::oids;
use crate::signature::{self, SignatureAlgorithmId};

// ============================================================================
// Validation Options
// ============================================================================

/// Options for certificate validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Extended key usage the end-entity must allow, if any
    pub required_eku: Option<ObjectIdentifier>,

    /// Whether the issuer must assert `cA` in its basic constraints
    pub require_issuer_ca: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            required_eku: None,
            require_issuer_ca: true,
        }
    }
}

impl ValidationOptions {
    /// Create options with no usage requirement and the CA check enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the clientAuth extended key usage
    pub fn for_client_auth(self) -> Self {
        self.with_required_eku(oids::CLIENT_AUTH)
    }

    /// Require the serverAuth extended key usage
    pub fn for_server_auth(self) -> Self {
        self.with_required_eku(oids::SERVER_AUTH)
    }

    /// Require an arbitrary extended key usage
    pub fn with_required_eku(mut self, eku: ObjectIdentifier) -> Self {
        self.required_eku = Some(eku);
        self
    }

    /// Accept an issuer without the `cA` basic constraint
    pub fn skip_issuer_ca_check(mut self) -> Self {
        self.require_issuer_ca = false;
        self
    }
}

// ============================================================================
// Validator
// ============================================================================

/// Certificate validator.
#[derive(Debug, Clone, Default)]
pub struct Validator<B: CryptoBackend> {
    /// Crypto backend for signature verification
    backend: B,
}

#[cfg(feature = "ring-backend")]
impl Validator<RingBackend> {
    /// Create a new Validator with the Ring backend
    pub fn new() -> Self {
        Self::with_backend(RingBackend)
    }
}

impl<B: CryptoBackend> Validator<B> {
    /// Create a new Validator with a specific backend
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Validate `end_entity` as issued by `issuer`.
    ///
    /// `expected_valid` names must each be presented by the end-entity's
    /// subject alternative names; `expected_invalid` names must not be.
    pub fn validate_certificate(
        &self,
        end_entity: &ParsedCertificate,
        issuer: &ParsedCertificate,
        expected_valid: &[&str],
        expected_invalid: &[&str],
        options: &ValidationOptions,
    ) -> Result<()> {
        if options.require_issuer_ca && !issuer.is_ca() {
            log::error!("validate_certificate: issuer is not a CA");
            return Err(Error::trust_failure());
        }

        self.verify_issued_by(end_entity, issuer)?;

        match issuer.name_constraints() {
            Some(constraints) => name::enforce(&end_entity.subject_names(), constraints)?,
            None => log::trace!("validate_certificate: issuer has no name constraints"),
        }

        for reference in expected_valid {
            verify_is_valid_for_name(end_entity, reference)?;
        }

        for reference in expected_invalid {
            if verify_is_valid_for_name(end_entity, reference).is_ok() {
                log::error!("validate_certificate: {:?} unexpectedly valid", reference);
                return Err(Error::unexpectedly_valid_for_name(*reference));
            }
        }

        if let Some(required) = options.required_eku {
            check_extended_key_usage(end_entity, required)?;
        }

        log::trace!("validate_certificate: success");
        Ok(())
    }

    /// Verify the end-entity signature with the issuer's public key.
    ///
    /// Every failure, including an unsupported algorithm, is a trust
    /// failure.
    pub fn verify_issued_by(
        &self,
        end_entity: &ParsedCertificate,
        issuer: &ParsedCertificate,
    ) -> Result<()> {
        let sig_alg = end_entity.signature_algorithm();
        let issuer_key = issuer.public_key();

        let result = SignatureAlgorithmId::from_oid_with_params(
            &sig_alg.oid,
            issuer_key.key_type(),
            sig_alg.parameters.as_ref(),
        )
        .and_then(|algorithm| {
            signature::verify_signature_with_backend(
                &self.backend,
                issuer_key,
                algorithm,
                end_entity.tbs_certificate_der(),
                end_entity.signature(),
            )
        });

        result.map_err(|e| {
            log::error!("verify_issued_by: {}", e);
            Error::trust_failure()
        })
    }
}

/// Validate with the ring backend and default options.
#[cfg(feature = "ring-backend")]
pub fn validate_certificate(
    end_entity: &ParsedCertificate,
    issuer: &ParsedCertificate,
    expected_valid: &[&str],
    expected_invalid: &[&str],
) -> Result<()> {
    Validator::new().validate_certificate(
        end_entity,
        issuer,
        expected_valid,
        expected_invalid,
        &ValidationOptions::default(),
    )
}

/// Check that `end_entity` presents `reference` in its subject alternative
/// names.
///
/// IP address text is compared with IP SANs of the same family. Anything
/// else must be a DNS name and is matched against DNS SANs, wildcards
/// included. The subject common name is never consulted.
pub fn verify_is_valid_for_name(end_entity: &ParsedCertificate, reference: &str) -> Result<()> {
    let sans = end_entity.subject_alt_names();

    let found = match reference.parse::<IpAddr>() {
        Ok(addr) => sans.iter().any(|san| match san {
            GeneralName::IpAddress(presented) => ip::same_address(presented, &addr),
            GeneralName::DnsName(_) | GeneralName::Unsupported(_) => false,
        }),
        Err(_) if dns::is_valid_reference_id(reference) => sans.iter().any(|san| match san {
            GeneralName::DnsName(presented) => dns::presented_matches_reference(presented, reference),
            GeneralName::IpAddress(_) | GeneralName::Unsupported(_) => false,
        }),
        Err(_) => {
            log::trace!("verify_is_valid_for_name: {:?} is not a valid reference name", reference);
            false
        }
    };

    if found {
        Ok(())
    } else {
        log::error!("certificate is not valid for {:?}", reference);
        Err(Error::not_valid_for_name(reference))
    }
}

/// Check the extended key usage of `end_entity` allows `required`.
///
/// A certificate without the extension allows every usage.
pub fn check_extended_key_usage(
    end_entity: &ParsedCertificate,
    required: ObjectIdentifier,
) -> Result<()> {
    match end_entity.extended_key_usage() {
        None => Ok(()),
        Some(usages) if usages.contains(&required) => Ok(()),
        Some(usages) => {
            log::error!(
                "extended key usage {} not among {} usages",
                required,
                usages.len()
            );
            Err(Error::required_usage_not_found(required))
        }
    }
}
