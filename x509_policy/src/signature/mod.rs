// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Signature algorithm registry and verification.
//!
//! The registry is a fixed table: every algorithm names the key type it
//! accepts, its hash, padding scheme and the inclusive range of key sizes it
//! supports. Verification first checks the key against that entry and only
//! then runs the cryptography, so the two failure modes stay distinct:
//!
//! - [`ErrorKind::UnsupportedSignatureAlgorithmForPublicKey`]: the algorithm
//!   is unknown, or the key type or size is outside its range;
//! - [`ErrorKind::InvalidSignatureForPublicKey`]: key and algorithm agree but
//!   the signature does not verify.
//!
//! [`ErrorKind::UnsupportedSignatureAlgorithmForPublicKey`]: crate::error::ErrorKind::UnsupportedSignatureAlgorithmForPublicKey
//! [`ErrorKind::InvalidSignatureForPublicKey`]: crate::error::ErrorKind::InvalidSignatureForPublicKey

extern crate alloc;

use const_oid::ObjectIdentifier;
use core::fmt;
use core::str::FromStr;
use der::{Sequence, Tagged};
use spki::AlgorithmIdentifierOwned;

use crate::crypto_backend::CryptoBackend;
#[cfg(feature = "ring-backend")]
use crate::crypto_backend::RingBackend;
use crate::error::{Error, Result};
use crate::oids;

pub mod key;

pub use key::{KeyType, PublicKey};

// =============================================================================
// Algorithm identifiers
// =============================================================================

/// Identifier of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithmId {
    /// ECDSA on P-256 with SHA-256
    EcdsaP256Sha256,
    /// ECDSA on P-256 with SHA-384
    EcdsaP256Sha384,
    /// ECDSA on P-384 with SHA-256
    EcdsaP384Sha256,
    /// ECDSA on P-384 with SHA-384
    EcdsaP384Sha384,
    /// Ed25519, no pre-hash
    Ed25519,
    /// RSA PKCS#1 v1.5 with SHA-256, 2048 to 8192 bit keys
    RsaPkcs1Sha256,
    /// RSA PKCS#1 v1.5 with SHA-384, 2048 to 8192 bit keys
    RsaPkcs1Sha384,
    /// RSA PKCS#1 v1.5 with SHA-512, 2048 to 8192 bit keys
    RsaPkcs1Sha512,
    /// RSA PKCS#1 v1.5 with SHA-384, 3072 to 8192 bit keys
    RsaPkcs1Sha384Min3072,
    /// RSA-PSS with SHA-256 on an rsaEncryption key
    RsaPssSha256,
    /// RSA-PSS with SHA-384 on an rsaEncryption key
    RsaPssSha384,
    /// RSA-PSS with SHA-512 on an rsaEncryption key
    RsaPssSha512,
}

impl SignatureAlgorithmId {
    /// Every identifier, in registry order.
    pub const ALL: [SignatureAlgorithmId; 12] = [
        SignatureAlgorithmId::EcdsaP256Sha256,
        SignatureAlgorithmId::EcdsaP256Sha384,
        SignatureAlgorithmId::EcdsaP384Sha256,
        SignatureAlgorithmId::EcdsaP384Sha384,
        SignatureAlgorithmId::Ed25519,
        SignatureAlgorithmId::RsaPkcs1Sha256,
        SignatureAlgorithmId::RsaPkcs1Sha384,
        SignatureAlgorithmId::RsaPkcs1Sha512,
        SignatureAlgorithmId::RsaPkcs1Sha384Min3072,
        SignatureAlgorithmId::RsaPssSha256,
        SignatureAlgorithmId::RsaPssSha384,
        SignatureAlgorithmId::RsaPssSha512,
    ];

    /// Canonical name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            SignatureAlgorithmId::EcdsaP256Sha256 => "ECDSA_P256_SHA256",
            SignatureAlgorithmId::EcdsaP256Sha384 => "ECDSA_P256_SHA384",
            SignatureAlgorithmId::EcdsaP384Sha256 => "ECDSA_P384_SHA256",
            SignatureAlgorithmId::EcdsaP384Sha384 => "ECDSA_P384_SHA384",
            SignatureAlgorithmId::Ed25519 => "ED25519",
            SignatureAlgorithmId::RsaPkcs1Sha256 => "RSA_PKCS1_2048_8192_SHA256",
            SignatureAlgorithmId::RsaPkcs1Sha384 => "RSA_PKCS1_2048_8192_SHA384",
            SignatureAlgorithmId::RsaPkcs1Sha512 => "RSA_PKCS1_2048_8192_SHA512",
            SignatureAlgorithmId::RsaPkcs1Sha384Min3072 => "RSA_PKCS1_3072_8192_SHA384",
            SignatureAlgorithmId::RsaPssSha256 => "RSA_PSS_2048_8192_SHA256_LEGACY_KEY",
            SignatureAlgorithmId::RsaPssSha384 => "RSA_PSS_2048_8192_SHA384_LEGACY_KEY",
            SignatureAlgorithmId::RsaPssSha512 => "RSA_PSS_2048_8192_SHA512_LEGACY_KEY",
        }
    }

    /// The registry entry for this identifier.
    pub fn algorithm(&self) -> Result<&'static SignatureAlgorithm> {
        lookup(*self)
    }

    /// Resolve a certificate's signature algorithm.
    ///
    /// ECDSA signature OIDs do not name a curve, so the issuer's key type
    /// picks the entry. For RSASSA-PSS the parameters must be explicit: a
    /// SHA-2 hash, MGF1 with the same hash, a salt as long as the digest and
    /// the standard trailer. Anything else is unsupported.
    pub fn from_oid_with_params(
        sig_oid: &ObjectIdentifier,
        issuer_key_type: KeyType,
        params: Option<&der::Any>,
    ) -> Result<Self> {
        let id = match *sig_oid {
            oids::SHA256_WITH_RSA => SignatureAlgorithmId::RsaPkcs1Sha256,
            oids::SHA384_WITH_RSA => SignatureAlgorithmId::RsaPkcs1Sha384,
            oids::SHA512_WITH_RSA => SignatureAlgorithmId::RsaPkcs1Sha512,
            oids::ECDSA_WITH_SHA256 => match issuer_key_type {
                KeyType::EcdsaP256 => SignatureAlgorithmId::EcdsaP256Sha256,
                KeyType::EcdsaP384 => SignatureAlgorithmId::EcdsaP384Sha256,
                other => {
                    log::error!("ecdsa-with-SHA256 with a {:?} issuer key", other);
                    return Err(Error::unsupported_for_public_key());
                }
            },
            oids::ECDSA_WITH_SHA384 => match issuer_key_type {
                KeyType::EcdsaP256 => SignatureAlgorithmId::EcdsaP256Sha384,
                KeyType::EcdsaP384 => SignatureAlgorithmId::EcdsaP384Sha384,
                other => {
                    log::error!("ecdsa-with-SHA384 with a {:?} issuer key", other);
                    return Err(Error::unsupported_for_public_key());
                }
            },
            oids::ED25519 => SignatureAlgorithmId::Ed25519,
            oids::RSASSA_PSS => Self::parse_rsa_pss_params(params)?,
            _ => {
                log::error!("unsupported signature algorithm OID {}", sig_oid);
                return Err(Error::unsupported_for_public_key());
            }
        };
        log::trace!("signature algorithm {} resolved to {}", sig_oid, id);
        Ok(id)
    }

    /// Map RSASSA-PSS-params to a registry entry.
    fn parse_rsa_pss_params(params: Option<&der::Any>) -> Result<Self> {
        // The ASN.1 defaults are SHA-1 based and are never accepted.
        let params = match params {
            Some(p) => p.decode_as::<RsaPssParams>().map_err(|e| {
                log::error!("invalid RSASSA-PSS parameters: {}", e);
                Error::unsupported_for_public_key()
            })?,
            None => {
                log::error!("RSASSA-PSS without parameters");
                return Err(Error::unsupported_for_public_key());
            }
        };

        let hash = params
            .hash_algorithm
            .as_ref()
            .and_then(|alg| HashAlgorithm::from_algorithm_identifier(alg))
            .ok_or_else(|| {
                log::error!("RSASSA-PSS hash is absent or not SHA-2");
                Error::unsupported_for_public_key()
            })?;

        let mgf_hash = params
            .mask_gen_algorithm
            .as_ref()
            .filter(|mgf| mgf.oid == oids::MGF1)
            .and_then(|mgf| mgf.parameters.as_ref())
            .and_then(|p| p.decode_as::<AlgorithmIdentifierOwned>().ok())
            .and_then(|alg| HashAlgorithm::from_algorithm_identifier(&alg));
        if mgf_hash != Some(hash) {
            log::error!("RSASSA-PSS mask generation does not use MGF1 with {:?}", hash);
            return Err(Error::unsupported_for_public_key());
        }

        let salt_matches = params
            .salt_length
            .map_or(false, |salt| salt as usize == hash.digest_len());
        if !salt_matches {
            log::error!(
                "RSASSA-PSS salt length {:?} differs from the {:?} digest length",
                params.salt_length,
                hash
            );
            return Err(Error::unsupported_for_public_key());
        }

        if params.trailer_field.unwrap_or(1) != 1 {
            log::error!("RSASSA-PSS trailer field {:?}", params.trailer_field);
            return Err(Error::unsupported_for_public_key());
        }

        Ok(match hash {
            HashAlgorithm::Sha256 => SignatureAlgorithmId::RsaPssSha256,
            HashAlgorithm::Sha384 => SignatureAlgorithmId::RsaPssSha384,
            HashAlgorithm::Sha512 => SignatureAlgorithmId::RsaPssSha512,
        })
    }
}

impl fmt::Display for SignatureAlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SignatureAlgorithmId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| {
                log::error!("unknown signature algorithm {:?}", s);
                Error::unsupported_for_public_key()
            })
    }
}

/// ```asn1
/// RSASSA-PSS-params ::= SEQUENCE {
///     hashAlgorithm     [0] HashAlgorithm DEFAULT sha1,
///     maskGenAlgorithm  [1] MaskGenAlgorithm DEFAULT mgf1SHA1,
///     saltLength        [2] INTEGER DEFAULT 20,
///     trailerField      [3] TrailerField DEFAULT trailerFieldBC
/// }
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
struct RsaPssParams {
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    hash_algorithm: Option<AlgorithmIdentifierOwned>,
    #[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
    mask_gen_algorithm: Option<AlgorithmIdentifierOwned>,
    #[asn1(context_specific = "2", tag_mode = "EXPLICIT", optional = "true")]
    salt_length: Option<u32>,
    #[asn1(context_specific = "3", tag_mode = "EXPLICIT", optional = "true")]
    trailer_field: Option<u32>,
}

// =============================================================================
// Registry
// =============================================================================

/// Hash functions used by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in bytes
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// A hash AlgorithmIdentifier, with absent or NULL parameters.
    fn from_algorithm_identifier(alg: &AlgorithmIdentifierOwned) -> Option<Self> {
        let params_ok = match &alg.parameters {
            None => true,
            Some(any) => any.tag() == der::Tag::Null,
        };
        if !params_ok {
            return None;
        }
        match alg.oid {
            oids::SHA256 => Some(HashAlgorithm::Sha256),
            oids::SHA384 => Some(HashAlgorithm::Sha384),
            oids::SHA512 => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }
}

/// Signature schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5
    Pkcs1v15,
    /// RSASSA-PSS with MGF1 over the same hash
    Pss { salt_len: usize },
    /// ECDSA with an ASN.1 DER encoded signature
    Ecdsa,
    /// Pure EdDSA
    EdDsa,
}

/// A registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureAlgorithm {
    /// Identifier
    pub id: SignatureAlgorithmId,
    /// The only key type accepted
    pub key_type: KeyType,
    /// Message hash, `None` for Ed25519
    pub hash: Option<HashAlgorithm>,
    /// Padding or signature scheme
    pub scheme: SignatureScheme,
    /// Smallest accepted key, in bits
    pub min_key_bits: usize,
    /// Largest accepted key, in bits
    pub max_key_bits: usize,
    /// Accepts a key labelled rsaEncryption rather than id-RSASSA-PSS
    pub legacy: bool,
}

impl SignatureAlgorithm {
    /// Whether `key` has the type and size this algorithm needs.
    /// Both size bounds are inclusive.
    pub fn supports_key(&self, key: &PublicKey) -> bool {
        key.key_type() == self.key_type
            && key.bits() >= self.min_key_bits
            && key.bits() <= self.max_key_bits
    }
}

const fn ecdsa(
    id: SignatureAlgorithmId,
    key_type: KeyType,
    hash: HashAlgorithm,
    bits: usize,
) -> SignatureAlgorithm {
    SignatureAlgorithm {
        id,
        key_type,
        hash: Some(hash),
        scheme: SignatureScheme::Ecdsa,
        min_key_bits: bits,
        max_key_bits: bits,
        legacy: false,
    }
}

const fn rsa_pkcs1(
    id: SignatureAlgorithmId,
    hash: HashAlgorithm,
    min_key_bits: usize,
) -> SignatureAlgorithm {
    SignatureAlgorithm {
        id,
        key_type: KeyType::Rsa,
        hash: Some(hash),
        scheme: SignatureScheme::Pkcs1v15,
        min_key_bits,
        max_key_bits: 8192,
        legacy: false,
    }
}

const fn rsa_pss(id: SignatureAlgorithmId, hash: HashAlgorithm, salt_len: usize) -> SignatureAlgorithm {
    SignatureAlgorithm {
        id,
        key_type: KeyType::Rsa,
        hash: Some(hash),
        scheme: SignatureScheme::Pss { salt_len },
        min_key_bits: 2048,
        max_key_bits: 8192,
        legacy: true,
    }
}

/// The registry, one entry per [`SignatureAlgorithmId`].
pub static ALGORITHMS: [SignatureAlgorithm; 12] = [
    ecdsa(
        SignatureAlgorithmId::EcdsaP256Sha256,
        KeyType::EcdsaP256,
        HashAlgorithm::Sha256,
        256,
    ),
    ecdsa(
        SignatureAlgorithmId::EcdsaP256Sha384,
        KeyType::EcdsaP256,
        HashAlgorithm::Sha384,
        256,
    ),
    ecdsa(
        SignatureAlgorithmId::EcdsaP384Sha256,
        KeyType::EcdsaP384,
        HashAlgorithm::Sha256,
        384,
    ),
    ecdsa(
        SignatureAlgorithmId::EcdsaP384Sha384,
        KeyType::EcdsaP384,
        HashAlgorithm::Sha384,
        384,
    ),
    SignatureAlgorithm {
        id: SignatureAlgorithmId::Ed25519,
        key_type: KeyType::Ed25519,
        hash: None,
        scheme: SignatureScheme::EdDsa,
        min_key_bits: 256,
        max_key_bits: 256,
        legacy: false,
    },
    rsa_pkcs1(SignatureAlgorithmId::RsaPkcs1Sha256, HashAlgorithm::Sha256, 2048),
    rsa_pkcs1(SignatureAlgorithmId::RsaPkcs1Sha384, HashAlgorithm::Sha384, 2048),
    rsa_pkcs1(SignatureAlgorithmId::RsaPkcs1Sha512, HashAlgorithm::Sha512, 2048),
    rsa_pkcs1(
        SignatureAlgorithmId::RsaPkcs1Sha384Min3072,
        HashAlgorithm::Sha384,
        3072,
    ),
    rsa_pss(SignatureAlgorithmId::RsaPssSha256, HashAlgorithm::Sha256, 32),
    rsa_pss(SignatureAlgorithmId::RsaPssSha384, HashAlgorithm::Sha384, 48),
    rsa_pss(SignatureAlgorithmId::RsaPssSha512, HashAlgorithm::Sha512, 64),
];

/// Find the registry entry for `id`.
pub fn lookup(id: SignatureAlgorithmId) -> Result<&'static SignatureAlgorithm> {
    ALGORITHMS
        .iter()
        .find(|alg| alg.id == id)
        .ok_or_else(Error::unsupported_for_public_key)
}

// =============================================================================
// Verification
// =============================================================================

/// Verify `signature` over `message` with the ring backend.
#[cfg(feature = "ring-backend")]
pub fn verify_signature(
    public_key: &PublicKey,
    algorithm: SignatureAlgorithmId,
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    verify_signature_with_backend(&RingBackend, public_key, algorithm, message, signature)
}

/// Verify `signature` over `message` with a caller-supplied backend.
pub fn verify_signature_with_backend<B: CryptoBackend>(
    backend: &B,
    public_key: &PublicKey,
    algorithm: SignatureAlgorithmId,
    message: &[u8],
    signature: &[u8],
) -> Result<()> {
    let entry = lookup(algorithm)?;

    if !entry.supports_key(public_key) {
        log::error!(
            "verify_signature: {} does not accept a {}-bit {:?} key",
            algorithm,
            public_key.bits(),
            public_key.key_type()
        );
        return Err(Error::unsupported_for_public_key());
    }

    log::trace!(
        "verify_signature: {} with a {}-bit {:?} key",
        algorithm,
        public_key.bits(),
        public_key.key_type()
    );

    backend
        .verify_signature(algorithm, message, signature, public_key.key_bytes())
        .map_err(|e| {
            log::error!("verify_signature: {} failed: {}", algorithm, e);
            Error::invalid_signature()
        })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use der::Any;

    fn hash_alg(oid: ObjectIdentifier) -> AlgorithmIdentifierOwned {
        AlgorithmIdentifierOwned {
            oid,
            parameters: Some(Any::null()),
        }
    }

    fn pss_params(
        hash: Option<ObjectIdentifier>,
        mgf_hash: Option<ObjectIdentifier>,
        salt_length: Option<u32>,
        trailer_field: Option<u32>,
    ) -> Any {
        let params = RsaPssParams {
            hash_algorithm: hash.map(hash_alg),
            mask_gen_algorithm: mgf_hash.map(|oid| AlgorithmIdentifierOwned {
                oid: oids::MGF1,
                parameters: Some(Any::encode_from(&hash_alg(oid)).unwrap()),
            }),
            salt_length,
            trailer_field,
        };
        Any::encode_from(&params).unwrap()
    }

    fn resolve(oid: ObjectIdentifier, key: KeyType) -> Result<SignatureAlgorithmId> {
        SignatureAlgorithmId::from_oid_with_params(&oid, key, None)
    }

    // ── registry ──

    #[test]
    fn test_registry_ids_unique_and_complete() {
        for id in SignatureAlgorithmId::ALL {
            let count = ALGORITHMS.iter().filter(|alg| alg.id == id).count();
            assert_eq!(count, 1, "{}", id);
            assert_eq!(lookup(id).unwrap().id, id);
        }
    }

    #[test]
    fn test_pss_salt_equals_digest_length() {
        for alg in ALGORITHMS.iter() {
            if let SignatureScheme::Pss { salt_len } = alg.scheme {
                assert_eq!(Some(salt_len), alg.hash.map(|h| h.digest_len()));
                assert!(alg.legacy);
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for id in SignatureAlgorithmId::ALL {
            assert_eq!(id.name().parse::<SignatureAlgorithmId>().unwrap(), id);
        }
        let err = "RSA_PKCS1_1024_8192_SHA1"
            .parse::<SignatureAlgorithmId>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureAlgorithmForPublicKey);
    }

    #[test]
    fn test_rsa_bounds() {
        let pkcs1 = lookup(SignatureAlgorithmId::RsaPkcs1Sha384Min3072).unwrap();
        assert_eq!((pkcs1.min_key_bits, pkcs1.max_key_bits), (3072, 8192));
        let pkcs1 = lookup(SignatureAlgorithmId::RsaPkcs1Sha256).unwrap();
        assert_eq!((pkcs1.min_key_bits, pkcs1.max_key_bits), (2048, 8192));
    }

    // ── from_oid_with_params: ECDSA ──

    #[test]
    fn test_ecdsa_curve_from_issuer_key() {
        assert_eq!(
            resolve(oids::ECDSA_WITH_SHA256, KeyType::EcdsaP256).unwrap(),
            SignatureAlgorithmId::EcdsaP256Sha256
        );
        assert_eq!(
            resolve(oids::ECDSA_WITH_SHA256, KeyType::EcdsaP384).unwrap(),
            SignatureAlgorithmId::EcdsaP384Sha256
        );
        assert_eq!(
            resolve(oids::ECDSA_WITH_SHA384, KeyType::EcdsaP256).unwrap(),
            SignatureAlgorithmId::EcdsaP256Sha384
        );
        assert_eq!(
            resolve(oids::ECDSA_WITH_SHA384, KeyType::EcdsaP384).unwrap(),
            SignatureAlgorithmId::EcdsaP384Sha384
        );
    }

    #[test]
    fn test_ecdsa_with_non_ec_issuer_rejected() {
        for key in [KeyType::Rsa, KeyType::Ed25519, KeyType::Unsupported] {
            let err = resolve(oids::ECDSA_WITH_SHA256, key).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureAlgorithmForPublicKey);
        }
    }

    // ── from_oid_with_params: RSA PKCS#1 and Ed25519 ──

    #[test]
    fn test_rsa_pkcs1_and_ed25519() {
        assert_eq!(
            resolve(oids::SHA256_WITH_RSA, KeyType::Rsa).unwrap(),
            SignatureAlgorithmId::RsaPkcs1Sha256
        );
        assert_eq!(
            resolve(oids::SHA384_WITH_RSA, KeyType::Rsa).unwrap(),
            SignatureAlgorithmId::RsaPkcs1Sha384
        );
        assert_eq!(
            resolve(oids::SHA512_WITH_RSA, KeyType::Rsa).unwrap(),
            SignatureAlgorithmId::RsaPkcs1Sha512
        );
        assert_eq!(
            resolve(oids::ED25519, KeyType::Ed25519).unwrap(),
            SignatureAlgorithmId::Ed25519
        );
    }

    #[test]
    fn test_unknown_sig_oid_rejected() {
        // sha1WithRSAEncryption
        let oid = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.5");
        assert!(resolve(oid, KeyType::Rsa).is_err());
    }

    // ── RSA-PSS parameter parsing ──

    #[test]
    fn test_rsa_pss_explicit_params() {
        for (hash, salt, expected) in [
            (oids::SHA256, 32, SignatureAlgorithmId::RsaPssSha256),
            (oids::SHA384, 48, SignatureAlgorithmId::RsaPssSha384),
            (oids::SHA512, 64, SignatureAlgorithmId::RsaPssSha512),
        ] {
            let params = pss_params(Some(hash), Some(hash), Some(salt), None);
            let id = SignatureAlgorithmId::from_oid_with_params(
                &oids::RSASSA_PSS,
                KeyType::Rsa,
                Some(&params),
            )
            .unwrap();
            assert_eq!(id, expected);
        }
    }

    #[test]
    fn test_rsa_pss_no_params_rejected() {
        assert!(resolve(oids::RSASSA_PSS, KeyType::Rsa).is_err());
    }

    #[test]
    fn test_rsa_pss_default_params_rejected() {
        let params = pss_params(None, None, None, None);
        assert!(SignatureAlgorithmId::from_oid_with_params(
            &oids::RSASSA_PSS,
            KeyType::Rsa,
            Some(&params)
        )
        .is_err());
    }

    #[test]
    fn test_rsa_pss_mismatched_params_rejected() {
        let cases = [
            pss_params(Some(oids::SHA256), Some(oids::SHA384), Some(32), None),
            pss_params(Some(oids::SHA256), None, Some(32), None),
            pss_params(Some(oids::SHA256), Some(oids::SHA256), Some(20), None),
            pss_params(Some(oids::SHA256), Some(oids::SHA256), None, None),
            pss_params(Some(oids::SHA256), Some(oids::SHA256), Some(32), Some(2)),
        ];
        for params in cases.iter() {
            assert!(SignatureAlgorithmId::from_oid_with_params(
                &oids::RSASSA_PSS,
                KeyType::Rsa,
                Some(params)
            )
            .is_err());
        }
    }

    #[test]
    fn test_rsa_pss_explicit_trailer_accepted() {
        let params = pss_params(Some(oids::SHA384), Some(oids::SHA384), Some(48), Some(1));
        assert_eq!(
            SignatureAlgorithmId::from_oid_with_params(
                &oids::RSASSA_PSS,
                KeyType::Rsa,
                Some(&params)
            )
            .unwrap(),
            SignatureAlgorithmId::RsaPssSha384
        );
    }

    // ── verification with a stub backend ──

    struct AcceptAll;

    impl CryptoBackend for AcceptAll {
        fn verify_signature(
            &self,
            _algorithm: SignatureAlgorithmId,
            _message: &[u8],
            _signature: &[u8],
            _public_key: &[u8],
        ) -> Result<()> {
            Ok(())
        }
    }

    struct RejectAll;

    impl CryptoBackend for RejectAll {
        fn verify_signature(
            &self,
            _algorithm: SignatureAlgorithmId,
            _message: &[u8],
            _signature: &[u8],
            _public_key: &[u8],
        ) -> Result<()> {
            Err(Error::malformed_key("backend refused"))
        }
    }

    // SubjectPublicKeyInfo { id-Ed25519, 32 zero bytes }
    const ED25519_SPKI: [u8; 44] = [
        0x30, 0x2a, 0x30, 0x05, 0x06, 0x03, 0x2b, 0x65, 0x70, 0x03, 0x21, 0x00, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ];

    #[test]
    fn test_key_checked_before_backend() {
        let key = PublicKey::from_spki_der(&ED25519_SPKI).unwrap();
        assert_eq!(key.key_type(), KeyType::Ed25519);

        assert!(verify_signature_with_backend(
            &AcceptAll,
            &key,
            SignatureAlgorithmId::Ed25519,
            b"",
            b""
        )
        .is_ok());

        let err = verify_signature_with_backend(
            &AcceptAll,
            &key,
            SignatureAlgorithmId::EcdsaP256Sha256,
            b"",
            b"",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureAlgorithmForPublicKey);
    }

    #[test]
    fn test_backend_failure_is_invalid_signature() {
        let key = PublicKey::from_spki_der(&ED25519_SPKI).unwrap();
        let err = verify_signature_with_backend(
            &RejectAll,
            &key,
            SignatureAlgorithmId::Ed25519,
            b"hello world!",
            &[0u8; 64],
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSignatureForPublicKey);
    }
}
