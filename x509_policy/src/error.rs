// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Error types for certificate policy checks.
//!
//! Errors are grouped by the area that raised them. Callers that only care
//! about the outcome should match on [`Error::kind`], which folds every error
//! into a small, stable set of [`ErrorKind`]s. The trust-related kinds are
//! deliberately coarse: a bad issuer signature and a name-constraint
//! violation both surface as [`ErrorKind::ChainTrustFailure`].

extern crate alloc;

use alloc::string::{String, ToString};
use const_oid::ObjectIdentifier;
use core::fmt;

/// Result type alias for policy operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for certificate policy checks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input could not be decoded
    ParseError(ParseError),

    /// Signature algorithm lookup or verification failed
    SignatureError(SignatureError),

    /// The issuer does not vouch for the end-entity
    ChainError(ChainError),

    /// Reference name checks
    NameError(NameError),

    /// Extension policy checks
    ExtensionError(ExtensionError),
}

/// Decoding failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Error from der crate
    DerError(String),

    /// Invalid PEM encoding
    InvalidPem(String),

    /// A name or name constraint has an impossible shape
    MalformedName(String),

    /// A public key could not be decoded
    MalformedKey(String),

    /// The same extension appears more than once
    DuplicateExtension(ObjectIdentifier),
}

/// Signature failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// Algorithm unknown, or key type/size outside its supported range
    UnsupportedSignatureAlgorithmForPublicKey,

    /// Key and algorithm agree but the signature does not verify
    InvalidSignatureForPublicKey,
}

/// Issuer trust failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Issuer signature invalid, issuer not a CA, or name constraints violated
    TrustFailure,
}

/// Reference name failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The certificate is not valid for the given name
    CertNotValidForName(String),

    /// The certificate is valid for a name expected to be rejected
    CertUnexpectedlyValidForName(String),
}

/// Extension policy failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionError {
    /// Extended key usage present but the required purpose is missing
    RequiredUsageNotFound(ObjectIdentifier),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input could not be decoded
    Malformed,
    /// Issuer signature invalid or name constraints violated
    ChainTrustFailure,
    /// No matching SAN for an expected name
    CertNotValidForName,
    /// A name expected to be invalid matched
    CertUnexpectedlyValidForName,
    /// Algorithm unknown or incompatible with the key
    UnsupportedSignatureAlgorithmForPublicKey,
    /// Cryptographic verification failed
    InvalidSignatureForPublicKey,
    /// Extended key usage lacks the required purpose
    RequiredUsageNotFound,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ParseError(_) => ErrorKind::Malformed,
            Error::SignatureError(SignatureError::UnsupportedSignatureAlgorithmForPublicKey) => {
                ErrorKind::UnsupportedSignatureAlgorithmForPublicKey
            }
            Error::SignatureError(SignatureError::InvalidSignatureForPublicKey) => {
                ErrorKind::InvalidSignatureForPublicKey
            }
            Error::ChainError(ChainError::TrustFailure) => ErrorKind::ChainTrustFailure,
            Error::NameError(NameError::CertNotValidForName(_)) => ErrorKind::CertNotValidForName,
            Error::NameError(NameError::CertUnexpectedlyValidForName(_)) => {
                ErrorKind::CertUnexpectedlyValidForName
            }
            Error::ExtensionError(ExtensionError::RequiredUsageNotFound(_)) => {
                ErrorKind::RequiredUsageNotFound
            }
        }
    }
}

// ============================================================================
// Error Display Implementation (works in both std and no_std)
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::SignatureError(e) => write!(f, "Signature error: {}", e),
            Error::ChainError(e) => write!(f, "Chain validation error: {}", e),
            Error::NameError(e) => write!(f, "Name error: {}", e),
            Error::ExtensionError(e) => write!(f, "Extension error: {}", e),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::DerError(msg) => write!(f, "DER error: {}", msg),
            ParseError::InvalidPem(msg) => write!(f, "Invalid PEM: {}", msg),
            ParseError::MalformedName(msg) => write!(f, "Malformed name: {}", msg),
            ParseError::MalformedKey(msg) => write!(f, "Malformed public key: {}", msg),
            ParseError::DuplicateExtension(oid) => write!(f, "Duplicate extension: {}", oid),
        }
    }
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::UnsupportedSignatureAlgorithmForPublicKey => {
                write!(f, "Unsupported signature algorithm for public key")
            }
            SignatureError::InvalidSignatureForPublicKey => {
                write!(f, "Invalid signature for public key")
            }
        }
    }
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainError::TrustFailure => write!(f, "Issuer does not vouch for certificate"),
        }
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::CertNotValidForName(name) => {
                write!(f, "Certificate not valid for name: {}", name)
            }
            NameError::CertUnexpectedlyValidForName(name) => {
                write!(f, "Certificate unexpectedly valid for name: {}", name)
            }
        }
    }
}

impl fmt::Display for ExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionError::RequiredUsageNotFound(oid) => {
                write!(f, "Required extended key usage not found: {}", oid)
            }
        }
    }
}

// ============================================================================
// std::error::Error implementation (when std feature is enabled)
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// ============================================================================
// Conversions from external crate errors
// ============================================================================

/// Convert from der crate errors
impl From<der::Error> for Error {
    fn from(err: der::Error) -> Self {
        Error::ParseError(ParseError::DerError(err.to_string()))
    }
}

/// Convert from PEM decoding errors
impl From<pem_rfc7468::Error> for Error {
    fn from(err: pem_rfc7468::Error) -> Self {
        Error::ParseError(ParseError::InvalidPem(err.to_string()))
    }
}

/// Convert from ring's Unspecified error
#[cfg(feature = "ring-backend")]
impl From<ring::error::Unspecified> for Error {
    fn from(_: ring::error::Unspecified) -> Self {
        Error::invalid_signature()
    }
}

// ============================================================================
// Helper constructors for common error cases
// ============================================================================

impl Error {
    /// The issuer does not vouch for the end-entity
    pub fn trust_failure() -> Self {
        Error::ChainError(ChainError::TrustFailure)
    }

    /// Algorithm unknown or incompatible with the key
    pub fn unsupported_for_public_key() -> Self {
        Error::SignatureError(SignatureError::UnsupportedSignatureAlgorithmForPublicKey)
    }

    /// Signature did not verify
    pub fn invalid_signature() -> Self {
        Error::SignatureError(SignatureError::InvalidSignatureForPublicKey)
    }

    /// Create a not-valid-for-name error
    pub fn not_valid_for_name<S: Into<String>>(name: S) -> Self {
        Error::NameError(NameError::CertNotValidForName(name.into()))
    }

    /// Create an unexpectedly-valid-for-name error
    pub fn unexpectedly_valid_for_name<S: Into<String>>(name: S) -> Self {
        Error::NameError(NameError::CertUnexpectedlyValidForName(name.into()))
    }

    /// Create a malformed name error
    pub fn malformed_name<S: Into<String>>(msg: S) -> Self {
        Error::ParseError(ParseError::MalformedName(msg.into()))
    }

    /// Create a malformed key error
    pub fn malformed_key<S: Into<String>>(msg: S) -> Self {
        Error::ParseError(ParseError::MalformedKey(msg.into()))
    }

    /// Create a missing-usage error
    pub fn required_usage_not_found(usage: ObjectIdentifier) -> Self {
        Error::ExtensionError(ExtensionError::RequiredUsageNotFound(usage))
    }
}

// ============================================================================
// Tests
// ============================================================================
