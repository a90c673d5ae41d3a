// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Public key classification.
//!
//! A `SubjectPublicKeyInfo` is reduced to the key type and size the
//! signature registry checks against, plus the raw key bytes the crypto
//! backend consumes (the contents of the `subjectPublicKey` BIT STRING).

extern crate alloc;

use alloc::vec::Vec;
use const_oid::ObjectIdentifier;
use der::asn1::UintRef;
use der::{Decode, Sequence};
use spki::SubjectPublicKeyInfoOwned;

use crate::error::{Error, Result};
use crate::oids;

/// Key types the registry knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// rsaEncryption
    Rsa,
    /// id-ecPublicKey on P-256
    EcdsaP256,
    /// id-ecPublicKey on P-384
    EcdsaP384,
    /// id-Ed25519
    Ed25519,
    /// Any other algorithm or curve. Every signature algorithm rejects it.
    Unsupported,
}

/// A classified public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    key_type: KeyType,
    bits: usize,
    algorithm: ObjectIdentifier,
    key_bytes: Vec<u8>,
}

/// ```asn1
/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,
///     publicExponent    INTEGER
/// }
/// ```
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

impl PublicKey {
    /// Classify a DER-encoded `SubjectPublicKeyInfo`.
    pub fn from_spki_der(spki_der: &[u8]) -> Result<Self> {
        let spki = SubjectPublicKeyInfoOwned::from_der(spki_der)?;
        Self::from_spki(&spki)
    }

    /// Classify a decoded `SubjectPublicKeyInfo`.
    ///
    /// Unknown algorithms and curves are not an error; they produce a key
    /// of type [`KeyType::Unsupported`]. A malformed RSA key is an error.
    pub fn from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self> {
        let key_bytes = spki
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| Error::malformed_key("subjectPublicKey has unused bits"))?;
        let algorithm = spki.algorithm.oid;

        let (key_type, bits) = match algorithm {
            oids::RSA_ENCRYPTION => (KeyType::Rsa, rsa_modulus_bits(key_bytes)?),
            oids::EC_PUBLIC_KEY => {
                let curve = spki
                    .algorithm
                    .parameters
                    .as_ref()
                    .and_then(|p| p.decode_as::<ObjectIdentifier>().ok());
                match curve {
                    Some(oids::SECP256R1) => (KeyType::EcdsaP256, 256),
                    Some(oids::SECP384R1) => (KeyType::EcdsaP384, 384),
                    Some(other) => {
                        log::trace!("public key on unsupported curve {}", other);
                        (KeyType::Unsupported, 0)
                    }
                    None => (KeyType::Unsupported, 0),
                }
            }
            oids::ED25519 => (KeyType::Ed25519, 256),
            other => {
                log::trace!("public key with unsupported algorithm {}", other);
                (KeyType::Unsupported, 0)
            }
        };

        Ok(Self {
            key_type,
            bits,
            algorithm,
            key_bytes: key_bytes.to_vec(),
        })
    }

    /// The key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The key size in bits. Zero for unsupported keys.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// The `SubjectPublicKeyInfo` algorithm OID
    pub fn algorithm(&self) -> ObjectIdentifier {
        self.algorithm
    }

    /// The `subjectPublicKey` contents, as handed to the crypto backend.
    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }
}

/// Exact bit length of an RSA modulus.
fn rsa_modulus_bits(key_bytes: &[u8]) -> Result<usize> {
    let key = RsaPublicKey::from_der(key_bytes)
        .map_err(|e| Error::malformed_key(alloc::format!("invalid RSAPublicKey: {}", e)))?;

    // UintRef strips the sign octet, so the first byte is the most
    // significant non-zero one.
    let modulus = key.modulus.as_bytes();
    let first = match modulus.first() {
        Some(b) if *b != 0 => *b,
        _ => return Err(Error::malformed_key("RSA modulus is zero")),
    };
    if key.public_exponent.as_bytes().is_empty() {
        return Err(Error::malformed_key("RSA public exponent is zero"));
    }

    Ok((modulus.len() - 1) * 8 + (8 - first.leading_zeros() as usize))
}
