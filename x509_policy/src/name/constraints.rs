// Copyright (c) 2026 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0 or MIT

//! Name constraint enforcement (RFC 5280 Section 4.2.1.10).
//!
//! The issuer's permitted and excluded subtrees are applied to every name
//! the end-entity presents. Exclusion is checked first and is absolute.
//! A permitted list only restricts the forms it mentions. Forms without
//! matching rules fail closed: a subtree of such a form rejects any
//! certificate that presents a name of that form. The subject
//! distinguished name is always presented, so a `directoryName` subtree
//! always rejects.
//!
//! Every rejection is reported as [`Error::trust_failure`]; the specific
//! reason only goes to the log.

use super::{dns, GeneralName, NameConstraintsSet, SubjectNames, Subtree};
use crate::error::{Error, Result};

/// Whether `name` lies within `subtree`.
///
/// Names and subtrees of different forms never match. Forms without
/// matching rules never match either; [`enforce`] handles them before
/// reaching this point.
pub fn matches(name: &GeneralName, subtree: &Subtree) -> bool {
    match (name, subtree) {
        (GeneralName::DnsName(name), Subtree::DnsName(base)) => dns::subtree_contains(base, name),
        (GeneralName::IpAddress(addr), Subtree::IpAddress(net)) => net.contains(addr),

        (GeneralName::DnsName(_), Subtree::IpAddress(_) | Subtree::Unsupported(_)) => false,
        (GeneralName::IpAddress(_), Subtree::DnsName(_) | Subtree::Unsupported(_)) => false,
        (
            GeneralName::Unsupported(_),
            Subtree::DnsName(_) | Subtree::IpAddress(_) | Subtree::Unsupported(_),
        ) => false,
    }
}

/// Apply `constraints` to every name in `names`.
pub fn enforce(names: &SubjectNames, constraints: &NameConstraintsSet) -> Result<()> {
    if constraints.is_empty() {
        log::trace!("enforce: no name constraints");
        return Ok(());
    }

    check_subtree_syntax(constraints)?;

    for name in names {
        check_name(name, constraints)?;
    }

    log::trace!("enforce: {} names conform", names.len());
    Ok(())
}

fn check_subtree_syntax(constraints: &NameConstraintsSet) -> Result<()> {
    for subtree in constraints.subtrees() {
        match subtree {
            Subtree::DnsName(base) if !dns::is_valid_constraint(base) => {
                log::error!("enforce: malformed dNSName constraint {:?}", base);
                return Err(Error::trust_failure());
            }
            Subtree::DnsName(_) | Subtree::IpAddress(_) | Subtree::Unsupported(_) => {}
        }
    }
    Ok(())
}

fn check_name(name: &GeneralName, constraints: &NameConstraintsSet) -> Result<()> {
    let form = name.form();

    match name {
        GeneralName::Unsupported(kind) => {
            if constraints.constrains(form) {
                log::error!("enforce: cannot evaluate constraints on {} names", kind);
                return Err(Error::trust_failure());
            }
            return Ok(());
        }
        GeneralName::DnsName(dns_name) => {
            if !dns::is_valid_presented_id(dns_name) && constraints.constrains(form) {
                log::error!(
                    "enforce: {:?} is not a valid DNS name and DNS names are constrained",
                    dns_name
                );
                return Err(Error::trust_failure());
            }
        }
        GeneralName::IpAddress(_) => {}
    }

    if let Some(subtree) = constraints
        .excluded
        .iter()
        .filter(|s| s.form() == form)
        .find(|s| matches(name, s))
    {
        log::error!("enforce: {} is in excluded subtree {}", name, subtree);
        return Err(Error::trust_failure());
    }

    let mut permitted = constraints
        .permitted
        .iter()
        .filter(|s| s.form() == form)
        .peekable();
    if permitted.peek().is_some() && !permitted.any(|s| matches(name, s)) {
        log::error!("enforce: {} is outside every permitted subtree", name);
        return Err(Error::trust_failure());
    }

    log::trace!("enforce: {} conforms", name);
    Ok(())
}
