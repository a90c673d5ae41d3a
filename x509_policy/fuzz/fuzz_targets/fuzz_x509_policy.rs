// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

#![no_main]

use libfuzzer_sys::fuzz_target;

use x509_policy::certificate::extensions;
use x509_policy::{name, ParsedCertificate, PublicKey, SignatureAlgorithmId, Validator};

fuzz_target!(|data: &[u8]| {
    // Raw extension values and keys
    if let Ok(constraints) = extensions::name_constraints(data) {
        if let Ok(sans) = extensions::subject_alt_names(data) {
            let names = name::SubjectNames::from_certificate_parts(&["fuzz.example.com"][..], &sans);
            let _ = name::enforce(&names, &constraints);
        }
    }
    if let Ok(key) = PublicKey::from_spki_der(data) {
        for id in SignatureAlgorithmId::ALL {
            let _ = x509_policy::verify_signature(&key, id, data, data);
        }
    }

    // The whole input as one certificate, then split into an end-entity
    // and issuer pair at the position given by the first byte.
    let _ = ParsedCertificate::from_der(data);

    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(split) * rest.len() / 256;
    let (ee, ca) = rest.split_at(split);
    if let (Ok(ee), Ok(ca)) = (ParsedCertificate::from_der(ee), ParsedCertificate::from_der(ca)) {
        let _ = Validator::new().validate_certificate(
            &ee,
            &ca,
            &["fuzz.example.com", "127.0.0.1"],
            &["other.example.com"],
            &Default::default(),
        );
    }
});
