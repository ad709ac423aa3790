// SPDX-License-Identifier: CC0-1.0

//! Working out which network an address belongs to.
//!
//! The search is a linear scan and its order is fixed: an explicit prefix settles the question;
//! without one the legacy form is tried first and then CashAddr under each registered prefix.
//! The order decides which error is reported when every attempt fails.

use network::{NetworkProfile, NetworkRegistry};

use super::{Address, NoMatchError, ParseError};

pub(super) fn resolve(s: &str, registry: &NetworkRegistry) -> Result<Address, ParseError> {
    if let Some(prefix) = cashaddr::explicit_prefix(s) {
        let network = registry
            .by_prefix(prefix)
            .ok_or_else(|| NoMatchError::UnknownPrefix(prefix.to_ascii_lowercase()))?;
        let address = Address::from_cashaddr_str(s, network)?;
        log::trace!("{} resolved to {} by prefix", s, network);
        return Ok(address);
    }

    let mut best = match Address::from_base58_str_in(s, registry) {
        Ok(address) => {
            log::trace!("{} resolved to {} as a legacy address", s, address.network());
            return Ok(address);
        }
        Err(e) => {
            log::debug!("{} is not a legacy address: {}", s, e);
            e
        }
    };

    for network in registry {
        match Address::from_cashaddr_str(s, network) {
            Ok(address) => {
                log::trace!("{} resolved to {} as unprefixed cashaddr", s, network);
                return Ok(address);
            }
            Err(e) => {
                log::debug!("{} is not a cashaddr for {}: {}", s, network, e);
                if e.specificity() > best.specificity() {
                    best = e;
                }
            }
        }
    }

    Err(best)
}

pub(super) fn resolve_for(s: &str, network: &NetworkProfile) -> Result<Address, ParseError> {
    if cashaddr::explicit_prefix(s).is_some() {
        return Address::from_cashaddr_str(s, network);
    }

    let legacy = match Address::from_base58_str(s, network) {
        Ok(address) => return Ok(address),
        Err(e) => {
            log::debug!("{} is not a legacy address for {}: {}", s, network, e);
            e
        }
    };
    match Address::from_cashaddr_str(s, network) {
        Ok(address) => Ok(address),
        Err(e) => {
            log::debug!("{} is not a cashaddr for {}: {}", s, network, e);
            if e.specificity() > legacy.specificity() {
                Err(e)
            } else {
                Err(legacy)
            }
        }
    }
}
