// SPDX-License-Identifier: CC0-1.0

//! Bitcoin Cash addresses.
//!
//! This module defines the [`Address`] type, parsing from and formatting to both text encodings,
//! and network validation.

pub mod error;
mod resolve;

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use cashaddr::HashType;
use hashes::hash160;
use network::{NetworkProfile, NetworkRegistry};

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::error::{
    ChecksumError, FormatError, LegacyAddressTooLongError, NoMatchError, ParseError,
    PrefixMismatchError, UnknownAddressTypeError, WrongNetworkError,
};

/// Longer than any legacy address, a 64 byte hash encodes to at most 95 characters.
pub const MAX_BASE58_LEN: usize = 100;

/// The different types of addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum AddressType {
    /// Pay to pubkey hash.
    P2pkh,
    /// Pay to script hash.
    P2sh,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::P2pkh => "p2pkh",
            Self::P2sh => "p2sh",
        })
    }
}

impl FromStr for AddressType {
    type Err = UnknownAddressTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p2pkh" => Ok(Self::P2pkh),
            "p2sh" => Ok(Self::P2sh),
            _ => Err(UnknownAddressTypeError(s.to_owned())),
        }
    }
}

impl From<HashType> for AddressType {
    fn from(t: HashType) -> Self {
        match t {
            HashType::PubkeyHash => Self::P2pkh,
            HashType::ScriptHash => Self::P2sh,
        }
    }
}

impl From<AddressType> for HashType {
    fn from(t: AddressType) -> Self {
        match t {
            AddressType::P2pkh => Self::PubkeyHash,
            AddressType::P2sh => Self::ScriptHash,
        }
    }
}

/// Trait for types that can produce a P2PKH (HASH160) of a public key.
pub trait ToPubkeyHash {
    /// Returns the 20-byte HASH160(pubkey) for this input.
    fn to_pubkey_hash_bytes(&self) -> [u8; 20];
}

impl ToPubkeyHash for [u8; 20] {
    fn to_pubkey_hash_bytes(&self) -> [u8; 20] { *self }
}

impl ToPubkeyHash for hash160::Hash {
    fn to_pubkey_hash_bytes(&self) -> [u8; 20] { self.to_byte_array() }
}

/// Trait for types that can produce a P2SH (HASH160) of a redeem script.
pub trait ToScriptHash {
    /// Returns the 20-byte HASH160(redeem_script) for this input.
    fn to_script_hash_bytes(&self) -> [u8; 20];
}

impl ToScriptHash for [u8; 20] {
    fn to_script_hash_bytes(&self) -> [u8; 20] { *self }
}

impl ToScriptHash for hash160::Hash {
    fn to_script_hash_bytes(&self) -> [u8; 20] { self.to_byte_array() }
}

/// A Bitcoin Cash address.
///
/// An address is a hash, what the hash commits to, and the network it is meant for. How it was
/// written does not matter: the CashAddr and legacy forms of the same address compare equal.
///
/// Addresses sort by legacy version byte and then by hash.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    network: NetworkProfile,
    kind: AddressType,
    hash: Vec<u8>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        use core::fmt::Formatter;

        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = Address;

            fn expecting(&self, f: &mut Formatter) -> core::fmt::Result {
                f.write_str("a Bitcoin Cash address")
            }

            fn visit_str<E>(self, v: &str) -> core::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Address>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Address {
    /// Constructs a new address from a hash of any supported length.
    ///
    /// # Errors
    ///
    /// If `hash` is not 20, 24, 28, 32, 40, 48, 56 or 64 bytes long.
    pub fn new(
        network: &NetworkProfile,
        kind: AddressType,
        hash: &[u8],
    ) -> Result<Self, cashaddr::InvalidHashLengthError> {
        cashaddr::size_class(hash.len())?;
        Ok(Self { network: network.clone(), kind, hash: hash.to_vec() })
    }

    /// Constructs a new pay-to-public-key-hash (P2PKH) address from a public key hash.
    #[inline]
    pub fn p2pkh(pk: impl ToPubkeyHash, network: &NetworkProfile) -> Self {
        let hash = pk.to_pubkey_hash_bytes();
        Self { network: network.clone(), kind: AddressType::P2pkh, hash: hash.to_vec() }
    }

    /// Constructs a new pay-to-script-hash (P2SH) address from a script hash.
    #[inline]
    pub fn p2sh(script_hash: impl ToScriptHash, network: &NetworkProfile) -> Self {
        let hash = script_hash.to_script_hash_bytes();
        Self { network: network.clone(), kind: AddressType::P2sh, hash: hash.to_vec() }
    }

    /// Parses a legacy address that must belong to `network`.
    ///
    /// # Errors
    ///
    /// [`ParseError::WrongNetwork`] if the text is a valid legacy address for another network.
    pub fn from_base58_str(s: &str, network: &NetworkProfile) -> Result<Self, ParseError> {
        let (version, payload) = decode_base58(s)?;
        if !network.accepts_legacy_version(version) {
            return Err(WrongNetworkError {
                version,
                expected: network.legacy_versions(),
                network: network.id().to_owned(),
            }
            .into());
        }
        Self::from_legacy_parts(version, &payload, network)
    }

    /// Parses a legacy address, taking the network from `registry`.
    ///
    /// The first registered network that uses the version byte wins.
    pub fn from_base58_str_in(s: &str, registry: &NetworkRegistry) -> Result<Self, ParseError> {
        let (version, payload) = decode_base58(s)?;
        let network = registry
            .by_legacy_version(version)
            .ok_or(NoMatchError::UnknownLegacyVersion(version))?;
        Self::from_legacy_parts(version, &payload, network)
    }

    fn from_legacy_parts(
        version: u8,
        payload: &[u8],
        network: &NetworkProfile,
    ) -> Result<Self, ParseError> {
        let kind = if version == network.p2pkh_version() {
            AddressType::P2pkh
        } else {
            AddressType::P2sh
        };
        Ok(Self::new(network, kind, payload)?)
    }

    /// Parses a CashAddr address for `network`, the prefix may be left off.
    ///
    /// # Errors
    ///
    /// [`ParseError::PrefixMismatch`] if the text carries the prefix of another network, before
    /// any other check is made.
    pub fn from_cashaddr_str(s: &str, network: &NetworkProfile) -> Result<Self, ParseError> {
        if let Some(prefix) = cashaddr::explicit_prefix(s) {
            if !prefix.eq_ignore_ascii_case(network.cashaddr_prefix()) {
                return Err(PrefixMismatchError {
                    expected: network.cashaddr_prefix().to_owned(),
                    found: prefix.to_owned(),
                }
                .into());
            }
        }

        let (_, hash_type, hash) = cashaddr::decode(s, network.cashaddr_prefix())?.into_parts();
        Ok(Self { network: network.clone(), kind: hash_type.into(), hash })
    }

    /// Parses an address in either encoding, working out the network from `registry`.
    ///
    /// Text with a prefix is decoded as CashAddr for the network using that prefix. Otherwise the
    /// text is tried as a legacy address and then as CashAddr under each registered prefix, in
    /// registry order, and the first success is returned.
    ///
    /// # Errors
    ///
    /// If every attempt fails, the most specific failure: a content error (padding, reserved
    /// bit, type, length, network) over a checksum error over a format error over no match. A
    /// well formed legacy address with an unregistered version byte ranks with checksum errors.
    /// The earliest attempt wins a tie.
    pub fn from_text(s: &str, registry: &NetworkRegistry) -> Result<Self, ParseError> {
        resolve::resolve(s, registry)
    }

    /// Parses an address in either encoding that must belong to `network`.
    ///
    /// Text without a prefix is tried as a legacy address first. Errors are ranked as for
    /// [`Address::from_text`].
    pub fn from_text_for(s: &str, network: &NetworkProfile) -> Result<Self, ParseError> {
        resolve::resolve_for(s, network)
    }

    /// Returns the network the text would parse to, if any.
    pub fn network_of(s: &str, registry: &NetworkRegistry) -> Option<NetworkProfile> {
        Self::from_text(s, registry).ok().map(|address| address.network)
    }

    /// Gets the address type of the address.
    #[inline]
    pub fn address_type(&self) -> AddressType { self.kind }

    /// Returns the hash the address commits to.
    #[inline]
    pub fn hash(&self) -> &[u8] { &self.hash }

    /// Returns the network the address is meant for.
    #[inline]
    pub fn network(&self) -> &NetworkProfile { &self.network }

    /// Returns true if the address is meant for `network`.
    pub fn is_valid_for_network(&self, network: &NetworkProfile) -> bool {
        self.network == *network
    }

    /// Returns the version byte of the legacy form.
    pub fn legacy_version(&self) -> u8 {
        match self.kind {
            AddressType::P2pkh => self.network.p2pkh_version(),
            AddressType::P2sh => self.network.p2sh_version(),
        }
    }

    /// Encodes the address in the legacy Base58Check form.
    pub fn to_base58(&self) -> String { base58::encode_versioned(self.legacy_version(), &self.hash) }

    /// Encodes the address as CashAddr, prefix included.
    pub fn to_cashaddr(&self) -> String {
        cashaddr::encode(self.network.cashaddr_prefix(), self.kind.into(), &self.hash)
            .expect("hash length checked on construction")
    }

    /// Encodes the address as CashAddr without the prefix.
    pub fn to_cashaddr_unprefixed(&self) -> String {
        cashaddr::encode_without_prefix(self.network.cashaddr_prefix(), self.kind.into(), &self.hash)
            .expect("hash length checked on construction")
    }

    /// Constructs a new URI string `bitcoincash:ADDRESS` optimized for QR codes.
    pub fn to_qr_uri(&self) -> String { format!("{:#}", self) }
}

fn decode_base58(s: &str) -> Result<(u8, Vec<u8>), ParseError> {
    if s.len() > MAX_BASE58_LEN {
        return Err(FormatError::from(LegacyAddressTooLongError { length: s.len() }).into());
    }
    Ok(base58::decode_versioned(s)?)
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.legacy_version()
            .cmp(&other.legacy_version())
            .then_with(|| self.hash.cmp(&other.hash))
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.network.cmp(&other.network))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

// Alternate formatting `{:#}` returns an uppercase version of the address for QR codes.
impl fmt::Display for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut s = self.to_cashaddr();
        if fmt.alternate() {
            s.make_ascii_uppercase();
        }
        fmt.write_str(&s)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self, f) }
}

/// Parses with the built-in networks, see [`Address::from_text`].
impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::from_text(s, &NetworkRegistry::builtin())
    }
}
