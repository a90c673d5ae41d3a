// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! DNS name syntax and matching.
//!
//! Three kinds of DNS identifier appear in certificate checks, each with its
//! own syntax:
//! - presented identifiers, the `dNSName` SAN entries (and DNS-like common
//!   names) of a certificate, which may carry a single leftmost `*` label;
//! - reference identifiers, the names a caller asks about, never wildcards;
//! - constraint identifiers, the `dNSName` subtrees of a name constraints
//!   extension, which may be empty or start with a dot.
//!
//! All comparisons are ASCII case-insensitive, ignore one trailing dot and
//! only ever split on whole labels.

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

fn trim_trailing_dot(name: &str) -> &[u8] {
    let bytes = name.as_bytes();
    match bytes.split_last() {
        Some((b'.', rest)) => rest,
        _ => bytes,
    }
}

fn is_valid_label(label: &[u8]) -> bool {
    match (label.first(), label.last()) {
        (Some(first), Some(last)) => {
            label.len() <= MAX_LABEL_LEN
                && *first != b'-'
                && *last != b'-'
                && label
                    .iter()
                    .all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
        }
        _ => false,
    }
}

fn is_valid_dns_id(name: &str, allow_wildcard: bool) -> bool {
    let name = trim_trailing_dot(name);
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }

    let mut labels = name.split(|b| *b == b'.').peekable();
    if allow_wildcard && labels.peek() == Some(&&b"*"[..]) {
        labels.next();
        // A wildcard needs at least two labels to its right.
        if name.iter().filter(|b| **b == b'.').count() < 2 {
            return false;
        }
    }

    let mut last = None;
    for label in labels {
        if !is_valid_label(label) {
            return false;
        }
        last = Some(label);
    }

    // An all-numeric final label reads as an IPv4 address, not a host.
    match last {
        Some(label) => !label.iter().all(u8::is_ascii_digit),
        None => false,
    }
}

/// Check the syntax of a presented identifier (SAN or common name).
pub fn is_valid_presented_id(name: &str) -> bool {
    is_valid_dns_id(name, true)
}

/// Check the syntax of a reference identifier supplied by a caller.
pub fn is_valid_reference_id(name: &str) -> bool {
    is_valid_dns_id(name, false)
}

/// Check the syntax of a `dNSName` constraint subtree.
pub fn is_valid_constraint(subtree: &str) -> bool {
    if subtree.is_empty() {
        return true;
    }
    let body = subtree.strip_prefix('.').unwrap_or(subtree);
    is_valid_dns_id(body, false)
}

fn ends_with_labels(name: &[u8], suffix: &[u8]) -> bool {
    if name.len() <= suffix.len() {
        return false;
    }
    let split = name.len() - suffix.len();
    name[split - 1] == b'.' && name[split..].eq_ignore_ascii_case(suffix)
}

/// Whether a presented name lies in a `dNSName` subtree.
///
/// The name matches when it equals the subtree or ends with `"." + subtree`.
/// A subtree with a leading dot only matches proper subdomains, and an empty
/// subtree matches everything. A leading `*` label in the name is compared as
/// an ordinary label.
pub fn subtree_contains(subtree: &str, name: &str) -> bool {
    let name = trim_trailing_dot(name);
    let subtree = trim_trailing_dot(subtree);

    if subtree.is_empty() {
        return true;
    }

    match subtree.split_first() {
        Some((b'.', parent)) => ends_with_labels(name, parent),
        _ => name.eq_ignore_ascii_case(subtree) || ends_with_labels(name, subtree),
    }
}

/// Whether a presented SAN identifies the given reference name.
///
/// A wildcard SAN `*.rest` covers exactly one extra leftmost label in front of
/// `rest`; everything else is an exact, case-insensitive comparison.
pub fn presented_matches_reference(presented: &str, reference: &str) -> bool {
    if !is_valid_presented_id(presented) || !is_valid_reference_id(reference) {
        return false;
    }

    let presented = trim_trailing_dot(presented);
    let reference = trim_trailing_dot(reference);

    match presented.strip_prefix(b"*.") {
        Some(rest) => match reference.iter().position(|b| *b == b'.') {
            Some(dot) if dot > 0 => reference[dot + 1..].eq_ignore_ascii_case(rest),
            _ => false,
        },
        None => presented.eq_ignore_ascii_case(reference),
    }
}
