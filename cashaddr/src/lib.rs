// SPDX-License-Identifier: CC0-1.0

//! CashAddr encoding and decoding.
//!
//! A CashAddr string is `prefix:payload`. The prefix names the network (e.g. `bitcoincash`) and
//! may be left off when the reader knows which network to expect. The payload is a version byte
//! and a hash, regrouped into five bit digits, followed by an eight digit BCH checksum that covers
//! the prefix as well. Digits are written in the alphabet `qpzry9x8gf2tvdw0s3jn54khce6mua7l`.
//!
//! The version byte packs the address type into bits 3 to 6 and the size class of the hash into
//! bits 0 to 2. Bit 7 is reserved and must be zero.
//!
//! # Examples
//!
//! ```
//! use bch_cashaddr::HashType;
//!
//! let hash = [0x12; 20];
//! let text = bch_cashaddr::encode("bitcoincash", HashType::PubkeyHash, &hash).unwrap();
//! let decoded = bch_cashaddr::decode(&text, "bitcoincash").unwrap();
//! assert_eq!(decoded.hash(), &hash[..]);
//!
//! // The prefix may be omitted.
//! let unprefixed = text.strip_prefix("bitcoincash:").unwrap();
//! assert_eq!(bch_cashaddr::decode(unprefixed, "bitcoincash").unwrap(), decoded);
//! ```
//!
//! This crate can be used in a no-std environment but requires an allocator.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]
#![doc(test(attr(warn(unused))))]
// Exclude lints we don't think are valuable.
#![allow(clippy::needless_question_mark)] // https://github.com/rust-bitcoin/rust-bitcoin/pull/2134
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::uninlined_format_args)] // Allow `format!("{}", x)` instead of enforcing `format!("{x}")`

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod checksum;
pub mod convert;
pub mod error;

use alloc::string::String;
use alloc::vec::Vec;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    checksum::CHECKSUM_LENGTH,
    convert::convert_bits,
    error::{
        ChecksumError, ConvertBitsError, DecodeError, FormatError, InvalidHashLengthError,
        LengthMismatchError, PaddingError, ReservedBitError, UnknownTypeError,
    },
};

/// The CashAddr alphabet, indexed by digit value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separates the prefix from the payload.
pub const SEPARATOR: char = ':';

/// Hash lengths in bytes, indexed by size class.
pub const HASH_LENGTHS: [usize; 8] = [20, 24, 28, 32, 40, 48, 56, 64];

#[rustfmt::skip]
static CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// What the hash in an address commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HashType {
    /// Hash of a public key (P2PKH).
    PubkeyHash,
    /// Hash of a redeem script (P2SH).
    ScriptHash,
}

impl HashType {
    /// Returns the value stored in the type field of the version byte.
    pub fn type_bits(self) -> u8 {
        match self {
            Self::PubkeyHash => 0,
            Self::ScriptHash => 1,
        }
    }

    /// Returns the hash type stored in the type field `bits`, if any.
    pub fn from_type_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::PubkeyHash),
            1 => Some(Self::ScriptHash),
            _ => None,
        }
    }
}

/// Returns the size class of a `length` byte hash.
pub fn size_class(length: usize) -> Result<u8, InvalidHashLengthError> {
    HASH_LENGTHS
        .iter()
        .position(|&l| l == length)
        .map(|class| class as u8) // at most 7
        .ok_or(InvalidHashLengthError { length })
}

/// Returns the hash length in bytes declared by the low three bits of `version`.
pub fn hash_length(version: u8) -> usize { HASH_LENGTHS[usize::from(version & 0x07)] }

/// Returns the version byte for `hash_type` and a `length` byte hash.
pub fn version_byte(hash_type: HashType, length: usize) -> Result<u8, InvalidHashLengthError> {
    Ok((hash_type.type_bits() << 3) | size_class(length)?)
}

/// Encodes `hash` as a CashAddr string under `prefix`.
///
/// `prefix` is written as given and should be lower case.
///
/// # Errors
///
/// If the length of `hash` has no size class.
pub fn encode(
    prefix: &str,
    hash_type: HashType,
    hash: &[u8],
) -> Result<String, InvalidHashLengthError> {
    let payload = encode_payload(prefix, hash_type, hash)?;
    let mut ret = String::with_capacity(prefix.len() + 1 + payload.len());
    ret.push_str(prefix);
    ret.push(SEPARATOR);
    ret.push_str(&payload);
    Ok(ret)
}

/// Encodes `hash` as an upper case CashAddr string under `prefix`.
///
/// Upper case text packs more densely into QR codes.
pub fn encode_upper(
    prefix: &str,
    hash_type: HashType,
    hash: &[u8],
) -> Result<String, InvalidHashLengthError> {
    let mut ret = encode(prefix, hash_type, hash)?;
    ret.make_ascii_uppercase();
    Ok(ret)
}

/// Encodes `hash` under `prefix` but returns only the part after the separator.
///
/// The checksum still covers `prefix`, so the result only decodes with the same prefix supplied
/// as the default.
pub fn encode_without_prefix(
    prefix: &str,
    hash_type: HashType,
    hash: &[u8],
) -> Result<String, InvalidHashLengthError> {
    encode_payload(prefix, hash_type, hash)
}

fn encode_payload(
    prefix: &str,
    hash_type: HashType,
    hash: &[u8],
) -> Result<String, InvalidHashLengthError> {
    let version = version_byte(hash_type, hash.len())?;

    let mut data = Vec::with_capacity(1 + hash.len());
    data.push(version);
    data.extend_from_slice(hash);

    let mut digits =
        convert_bits(&data, 8, 5, true).expect("bytes always regroup with padding");
    let checksum = checksum::create_checksum(prefix, &digits);
    digits.extend_from_slice(&checksum);

    Ok(digits.iter().map(|&d| char::from(CHARSET[usize::from(d)])).collect())
}

/// Returns the prefix written before the separator in `s`, if there is one.
///
/// No validation is done, this only splits the text.
pub fn explicit_prefix(s: &str) -> Option<&str> {
    s.split_once(SEPARATOR).map(|(prefix, _)| prefix).filter(|prefix| !prefix.is_empty())
}

/// The contents of a decoded CashAddr string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decoded {
    prefix: String,
    hash_type: HashType,
    hash: Vec<u8>,
}

impl Decoded {
    /// Returns the lower case prefix the checksum verified under.
    pub fn prefix(&self) -> &str { &self.prefix }

    /// Returns what the hash commits to.
    pub fn hash_type(&self) -> HashType { self.hash_type }

    /// Returns the hash.
    pub fn hash(&self) -> &[u8] { &self.hash }

    /// Returns the prefix, hash type and hash.
    pub fn into_parts(self) -> (String, HashType, Vec<u8>) {
        (self.prefix, self.hash_type, self.hash)
    }
}

/// Decodes a CashAddr string, using `default_prefix` when `s` does not carry one.
///
/// Upper and lower case input are both accepted but may not be mixed.
///
/// # Errors
///
/// The checks run in this order and the first failure is returned: format, checksum, padding,
/// reserved bit, address type, hash length.
pub fn decode(s: &str, default_prefix: &str) -> Result<Decoded, DecodeError> {
    let separator = scan(s)?;

    let (prefix, payload_start) = match separator {
        Some(pos) => (s[..pos].to_ascii_lowercase(), pos + 1),
        None => (default_prefix.to_ascii_lowercase(), 0),
    };

    let mut digits = Vec::with_capacity(s.len() - payload_start);
    for (i, c) in s[payload_start..].char_indices() {
        let digit = u8::try_from(c)
            .ok()
            .and_then(|b| CHARSET_REV.get(usize::from(b)))
            .and_then(|&d| u8::try_from(d).ok());
        match digit {
            Some(d) => digits.push(d),
            None => {
                let pos = payload_start + i;
                return Err(FormatError::InvalidCharacter { invalid: c, pos }.into());
            }
        }
    }

    if digits.len() < CHECKSUM_LENGTH {
        return Err(FormatError::TooShort { digits: digits.len() }.into());
    }
    if !checksum::verify_checksum(&prefix, &digits) {
        return Err(ChecksumError { prefix }.into());
    }
    digits.truncate(digits.len() - CHECKSUM_LENGTH);

    let data = match convert_bits(&digits, 5, 8, false) {
        Err(ConvertBitsError::Padding(e)) => return Err(e.into()),
        result => result.expect("digits are five bits wide"),
    };

    let (&version, hash) = match data.split_first() {
        Some(split) => split,
        None => return Err(FormatError::TooShort { digits: digits.len() }.into()),
    };

    if version & 0x80 != 0 {
        return Err(ReservedBitError { version }.into());
    }
    let hash_type = HashType::from_type_bits(version >> 3).ok_or(UnknownTypeError { version })?;
    let expected = hash_length(version);
    if hash.len() != expected {
        return Err(LengthMismatchError { expected, actual: hash.len() }.into());
    }

    Ok(Decoded { prefix, hash_type, hash: hash.to_vec() })
}

/// Checks the character classes of `s` and returns the position of the separator, if any.
fn scan(s: &str) -> Result<Option<usize>, FormatError> {
    let mut lower = false;
    let mut upper = false;
    let mut has_digit = false;
    let mut separator = None;

    for (pos, c) in s.char_indices() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => has_digit = true,
            SEPARATOR => {
                if pos == 0 || has_digit || separator.is_some() {
                    return Err(FormatError::InvalidSeparator { pos });
                }
                separator = Some(pos);
            }
            invalid => return Err(FormatError::InvalidCharacter { invalid, pos }),
        }
    }

    if lower && upper {
        return Err(FormatError::MixedCase);
    }
    Ok(separator)
}
