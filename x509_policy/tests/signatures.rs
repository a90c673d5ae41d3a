// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![cfg(feature = "ring-backend")]

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

use x509_policy::{verify_signature, ErrorKind, ParsedCertificate, PublicKey, SignatureAlgorithmId};

#[derive(Debug, Deserialize)]
struct Manifest {
    message: String,
    cases: Vec<Case>,
}

#[derive(Debug, Deserialize)]
struct Case {
    key: String,
    algorithm: String,
    signature: Option<String>,
    expected: Expected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Expected {
    Ok,
    Invalid,
    Unsupported,
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../test_key/signatures")
}

fn read(name: &str) -> Vec<u8> {
    std::fs::read(fixture_dir().join(name)).unwrap()
}

fn manifest() -> Manifest {
    let _ = env_logger::builder().is_test(true).try_init();
    serde_json::from_str(include_str!("../../test_key/signatures/manifest.json")).unwrap()
}

fn public_key(key: &str) -> PublicKey {
    let cert = ParsedCertificate::from_der(&read(&format!("{}.ee.der", key))).unwrap();
    cert.public_key().clone()
}

fn outcome(result: x509_policy::Result<()>) -> Expected {
    match result.map_err(|e| e.kind()) {
        Ok(()) => Expected::Ok,
        Err(ErrorKind::InvalidSignatureForPublicKey) => Expected::Invalid,
        Err(ErrorKind::UnsupportedSignatureAlgorithmForPublicKey) => Expected::Unsupported,
        Err(other) => panic!("unexpected error kind {:?}", other),
    }
}

fn run(case: &Case, message: &[u8]) -> Expected {
    let key = public_key(&case.key);
    let algorithm = match case.algorithm.parse::<SignatureAlgorithmId>() {
        Ok(id) => id,
        Err(e) => return outcome(Err(e)),
    };
    match &case.signature {
        Some(sig) => outcome(verify_signature(&key, algorithm, message, &read(sig))),
        // Incompatible pairs are refused before any bytes are examined.
        None => outcome(verify_signature(&key, algorithm, &[], &[])),
    }
}

#[test]
fn manifest_cases() {
    let manifest = manifest();
    let message = read(&manifest.message);
    assert_eq!(message, b"hello world!");

    for case in &manifest.cases {
        assert_eq!(
            run(case, &message),
            case.expected,
            "{} with {}",
            case.key,
            case.algorithm
        );
    }
}

#[test]
fn every_key_meets_every_algorithm() {
    let manifest = manifest();
    let keys: BTreeSet<&str> = manifest.cases.iter().map(|c| c.key.as_str()).collect();
    for key in keys {
        let algorithms: BTreeSet<&str> = manifest
            .cases
            .iter()
            .filter(|c| c.key == key)
            .map(|c| c.algorithm.as_str())
            .collect();
        assert_eq!(algorithms.len(), SignatureAlgorithmId::ALL.len(), "{}", key);
    }
}

#[test]
fn unsupported_keys_are_refused_by_every_algorithm() {
    for key in ["ecdsa_p521", "rsa_1024"] {
        let key = public_key(key);
        for id in SignatureAlgorithmId::ALL {
            assert_eq!(outcome(verify_signature(&key, id, b"", b"")), Expected::Unsupported);
        }
    }
}

#[test]
fn rsa_2048_is_below_the_3072_minimum() {
    let key = public_key("rsa_2048");
    assert_eq!(key.bits(), 2048);
    let sig = read("rsa_2048_rsa_pkcs1_3072_8192_sha384_good.sig.bin");
    let result = verify_signature(
        &key,
        SignatureAlgorithmId::RsaPkcs1Sha384Min3072,
        b"hello world!",
        &sig,
    );
    assert_eq!(outcome(result), Expected::Unsupported);
}

#[test]
fn corrupted_signature_is_invalid() {
    let manifest = manifest();
    let message = read(&manifest.message);

    for case in manifest.cases.iter().filter(|c| c.expected == Expected::Ok) {
        let key = public_key(&case.key);
        let algorithm: SignatureAlgorithmId = case.algorithm.parse().unwrap();
        let mut sig = read(case.signature.as_deref().unwrap());
        let last = sig.len() - 1;
        sig[last] ^= 0x01;
        assert_eq!(
            outcome(verify_signature(&key, algorithm, &message, &sig)),
            Expected::Invalid,
            "{} with {}",
            case.key,
            case.algorithm
        );
    }
}

#[test]
fn verification_is_deterministic() {
    let manifest = manifest();
    let message = read(&manifest.message);
    for case in manifest.cases.iter().take(12) {
        assert_eq!(run(case, &message), run(case, &message));
    }
}

#[test]
fn unknown_algorithm_name_is_unsupported() {
    let err = "RSA_PKCS1_2048_8192_SHA1"
        .parse::<SignatureAlgorithmId>()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureAlgorithmForPublicKey);
}
