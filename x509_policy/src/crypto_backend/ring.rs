// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Ring cryptographic backend implementation.

use super::CryptoBackend;
use crate::error::{Error, Result};
use crate::signature::SignatureAlgorithmId;
use ring::signature::{self, UnparsedPublicKey};

/// Ring-based cryptographic backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct RingBackend;

fn ring_algorithm(algorithm: SignatureAlgorithmId) -> &'static dyn signature::VerificationAlgorithm {
    match algorithm {
        SignatureAlgorithmId::EcdsaP256Sha256 => &signature::ECDSA_P256_SHA256_ASN1,
        SignatureAlgorithmId::EcdsaP256Sha384 => &signature::ECDSA_P256_SHA384_ASN1,
        SignatureAlgorithmId::EcdsaP384Sha256 => &signature::ECDSA_P384_SHA256_ASN1,
        SignatureAlgorithmId::EcdsaP384Sha384 => &signature::ECDSA_P384_SHA384_ASN1,
        SignatureAlgorithmId::Ed25519 => &signature::ED25519,
        SignatureAlgorithmId::RsaPkcs1Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
        SignatureAlgorithmId::RsaPkcs1Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        SignatureAlgorithmId::RsaPkcs1Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        SignatureAlgorithmId::RsaPkcs1Sha384Min3072 => &signature::RSA_PKCS1_3072_8192_SHA384,
        SignatureAlgorithmId::RsaPssSha256 => &signature::RSA_PSS_2048_8192_SHA256,
        SignatureAlgorithmId::RsaPssSha384 => &signature::RSA_PSS_2048_8192_SHA384,
        SignatureAlgorithmId::RsaPssSha512 => &signature::RSA_PSS_2048_8192_SHA512,
    }
}

impl CryptoBackend for RingBackend {
    fn verify_signature(
        &self,
        algorithm: SignatureAlgorithmId,
        message: &[u8],
        signature: &[u8],
        public_key: &[u8],
    ) -> Result<()> {
        log::trace!("Verifying signature with algorithm {}", algorithm);

        let pk = UnparsedPublicKey::new(ring_algorithm(algorithm), public_key);
        pk.verify(message, signature)?;

        log::trace!("Signature verification successful");
        Ok(())
    }
}
