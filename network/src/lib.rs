// SPDX-License-Identifier: CC0-1.0

//! Bitcoin Cash network profiles.
//!
//! A [`NetworkProfile`] is the set of identifiers an address carries to say which chain it
//! belongs to: the CashAddr prefix (e.g. `bitcoincash`) and the two legacy Base58Check version
//! bytes (P2PKH and P2SH). Profiles are collected in an immutable [`NetworkRegistry`] which is
//! handed by reference to everything that needs to resolve a network.
//!
//! This crate can be used in a no-std environment but requires an allocator.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![doc(test(attr(warn(unused))))]
// Coding conventions.
#![warn(deprecated_in_future)]
#![warn(missing_docs)]
// Exclude lints we don't think are valuable.
#![allow(clippy::needless_question_mark)] // https://github.com/rust-bitcoin/rust-bitcoin/pull/2134
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::uninlined_format_args)] // Allow `format!("{}", x)` instead of enforcing `format!("{x}")`

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod registry;

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::registry::{NetworkRegistry, RegistryError, UnknownNetworkError};

/// The mainnet profile.
pub static MAINNET: NetworkProfile = NetworkProfile::MAINNET;
/// The testnet profile.
pub static TESTNET: NetworkProfile = NetworkProfile::TESTNET;
/// The regtest profile.
pub static REGTEST: NetworkProfile = NetworkProfile::REGTEST;

/// The identifiers an address uses to name the network it belongs to.
///
/// Two profiles are the same network iff all of their fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProfile"))]
pub struct NetworkProfile {
    id: Cow<'static, str>,
    cashaddr_prefix: Cow<'static, str>,
    p2pkh_version: u8,
    p2sh_version: u8,
}

impl NetworkProfile {
    /// The production network.
    pub const MAINNET: Self = Self {
        id: Cow::Borrowed("mainnet"),
        cashaddr_prefix: Cow::Borrowed("bitcoincash"),
        p2pkh_version: 0,
        p2sh_version: 5,
    };

    /// The public test network.
    pub const TESTNET: Self = Self {
        id: Cow::Borrowed("testnet"),
        cashaddr_prefix: Cow::Borrowed("bchtest"),
        p2pkh_version: 111,
        p2sh_version: 196,
    };

    /// The local regression test network.
    ///
    /// Shares its legacy version bytes with [`NetworkProfile::TESTNET`], so a legacy address can
    /// only be attributed to it when testnet is not registered ahead of it.
    pub const REGTEST: Self = Self {
        id: Cow::Borrowed("regtest"),
        cashaddr_prefix: Cow::Borrowed("bchreg"),
        p2pkh_version: 111,
        p2sh_version: 196,
    };

    /// Constructs a new custom profile.
    ///
    /// # Errors
    ///
    /// If `id` is empty or `cashaddr_prefix` is not a non-empty run of lowercase ASCII letters.
    pub fn new(
        id: impl Into<String>,
        cashaddr_prefix: impl Into<String>,
        p2pkh_version: u8,
        p2sh_version: u8,
    ) -> Result<Self, InvalidProfileError> {
        let id = id.into();
        let cashaddr_prefix = cashaddr_prefix.into();

        if id.is_empty() {
            return Err(InvalidProfileError::EmptyId);
        }
        if cashaddr_prefix.is_empty() {
            return Err(InvalidProfileError::EmptyPrefix { id });
        }
        if let Some(invalid) = cashaddr_prefix.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(InvalidProfileError::InvalidPrefixChar { prefix: cashaddr_prefix, invalid });
        }

        Ok(Self {
            id: Cow::Owned(id),
            cashaddr_prefix: Cow::Owned(cashaddr_prefix),
            p2pkh_version,
            p2sh_version,
        })
    }

    /// Returns the identifier of this network e.g., `mainnet`.
    pub fn id(&self) -> &str { &self.id }

    /// Returns the lowercase CashAddr prefix e.g., `bitcoincash`.
    pub fn cashaddr_prefix(&self) -> &str { &self.cashaddr_prefix }

    /// Returns the legacy version byte used by pay-to-pubkey-hash addresses.
    pub fn p2pkh_version(&self) -> u8 { self.p2pkh_version }

    /// Returns the legacy version byte used by pay-to-script-hash addresses.
    pub fn p2sh_version(&self) -> u8 { self.p2sh_version }

    /// Returns the legacy version bytes this network accepts, P2PKH first.
    pub fn legacy_versions(&self) -> [u8; 2] { [self.p2pkh_version, self.p2sh_version] }

    /// Returns true if `version` is one of this network's legacy version bytes.
    pub fn accepts_legacy_version(&self, version: u8) -> bool {
        self.legacy_versions().contains(&version)
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.id) }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    id: String,
    cashaddr_prefix: String,
    p2pkh_version: u8,
    p2sh_version: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProfile> for NetworkProfile {
    type Error = InvalidProfileError;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.cashaddr_prefix, raw.p2pkh_version, raw.p2sh_version)
    }
}

/// A custom network profile was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidProfileError {
    /// The network identifier was empty.
    EmptyId,
    /// The CashAddr prefix was empty.
    EmptyPrefix {
        /// Identifier of the offending profile.
        id: String,
    },
    /// The CashAddr prefix contained something other than a lowercase ASCII letter.
    InvalidPrefixChar {
        /// The offending prefix.
        prefix: String,
        /// The first character that is not allowed.
        invalid: char,
    },
}

impl fmt::Display for InvalidProfileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::EmptyId => f.write_str("network id must not be empty"),
            Self::EmptyPrefix { ref id } =>
                write!(f, "network {} has an empty cashaddr prefix", id),
            Self::InvalidPrefixChar { ref prefix, invalid } => write!(
                f,
                "cashaddr prefix {} contains {:?}, only lowercase ascii letters are allowed",
                prefix, invalid
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidProfileError {}
