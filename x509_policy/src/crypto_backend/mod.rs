// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Cryptographic backend abstraction for signature verification.
//!
//! The registry in [`crate::signature`] decides whether a key and an
//! algorithm belong together; a backend only performs the verification.

use crate::error::Result;
use crate::signature::SignatureAlgorithmId;

#[cfg(feature = "ring-backend")]
mod ring;
#[cfg(feature = "ring-backend")]
pub use self::ring::*;

/// Trait for cryptographic backends.
pub trait CryptoBackend {
    /// Verify `signature` over `message`.
    ///
    /// `public_key` is the content of the `subjectPublicKey` BIT STRING: a
    /// DER `RSAPublicKey`, an uncompressed EC point or a raw Ed25519 key.
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithmId,
        message: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()>;
}
