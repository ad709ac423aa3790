// SPDX-License-Identifier: CC0-1.0

//! Base58Check encoding and decoding.
//!
//! Base58Check is the text encoding of legacy Bitcoin Cash addresses: a version byte followed by
//! the payload and the first four bytes of the payload's double SHA-256, all written in the
//! Bitcoin base58 alphabet (no `0`, `O`, `I` or `l`).
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

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

static BASE58_CHARS: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub mod error;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use hashes::sha256d;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::error::{Error, IncorrectChecksumError, InvalidCharacterError, TooShortError};

/// Length of the double SHA-256 checksum appended by Base58Check.
pub const CHECKSUM_LEN: usize = 4;

#[rustfmt::skip]
static BASE58_DIGITS: [Option<u8>; 128] = [
    None,     None,     None,     None,     None,     None,     None,     None,     // 0-7
    None,     None,     None,     None,     None,     None,     None,     None,     // 8-15
    None,     None,     None,     None,     None,     None,     None,     None,     // 16-23
    None,     None,     None,     None,     None,     None,     None,     None,     // 24-31
    None,     None,     None,     None,     None,     None,     None,     None,     // 32-39
    None,     None,     None,     None,     None,     None,     None,     None,     // 40-47
    None,     Some(0),  Some(1),  Some(2),  Some(3),  Some(4),  Some(5),  Some(6),  // 48-55
    Some(7),  Some(8),  None,     None,     None,     None,     None,     None,     // 56-63
    None,     Some(9),  Some(10), Some(11), Some(12), Some(13), Some(14), Some(15), // 64-71
    Some(16), None,     Some(17), Some(18), Some(19), Some(20), Some(21), None,     // 72-79
    Some(22), Some(23), Some(24), Some(25), Some(26), Some(27), Some(28), Some(29), // 80-87
    Some(30), Some(31), Some(32), None,     None,     None,     None,     None,     // 88-95
    None,     Some(33), Some(34), Some(35), Some(36), Some(37), Some(38), Some(39), // 96-103
    Some(40), Some(41), Some(42), Some(43), None,     Some(44), Some(45), Some(46), // 104-111
    Some(47), Some(48), Some(49), Some(50), Some(51), Some(52), Some(53), Some(54), // 112-119
    Some(55), Some(56), Some(57), None,     None,     None,     None,     None,     // 120-127
];

/// Decodes a base58-encoded string into a byte vector.
pub fn decode(data: &str) -> Result<Vec<u8>, InvalidCharacterError> {
    // 11/15 is just over log_256(58)
    let mut scratch = vec![0u8; 1 + data.len() * 11 / 15];
    // Build in base 256, big endian.
    for (pos, d58) in data.bytes().enumerate() {
        // Compute "X = X * 58 + next_digit" in base 256
        let mut carry = match BASE58_DIGITS.get(usize::from(d58)) {
            Some(Some(digit)) => u32::from(*digit),
            _ => return Err(InvalidCharacterError { invalid: d58, pos }),
        };
        for d256 in scratch.iter_mut().rev() {
            carry += u32::from(*d256) * 58;
            *d256 = carry as u8; // cast loses data intentionally
            carry /= 256;
        }
        debug_assert_eq!(carry, 0);
    }

    // Copy leading zeroes directly
    let mut ret: Vec<u8> = data.bytes().take_while(|&x| x == BASE58_CHARS[0]).map(|_| 0).collect();
    // Copy rest of string
    ret.extend(scratch.into_iter().skip_while(|&x| x == 0));
    Ok(ret)
}

/// Decodes a base58check-encoded string into a byte vector verifying the checksum.
pub fn decode_check(data: &str) -> Result<Vec<u8>, Error> {
    let ret = decode(data)?;
    strip_checksum(ret, CHECKSUM_LEN)
}

/// Decodes a base58check-encoded string into its leading version byte and the payload after it.
///
/// At least five bytes (version and checksum) must decode.
pub fn decode_versioned(data: &str) -> Result<(u8, Vec<u8>), Error> {
    let mut ret = strip_checksum(decode(data)?, CHECKSUM_LEN + 1)?;
    let version = ret.remove(0);
    Ok((version, ret))
}

fn strip_checksum(mut data: Vec<u8>, required: usize) -> Result<Vec<u8>, Error> {
    if data.len() < required {
        return Err(TooShortError { length: data.len(), required }.into());
    }
    let check_start = data.len() - CHECKSUM_LEN;

    let expected = u32::from_le_bytes(checksum(&data[..check_start]));
    let mut supplied = [0u8; CHECKSUM_LEN];
    supplied.copy_from_slice(&data[check_start..]);
    let actual = u32::from_le_bytes(supplied);

    if actual != expected {
        return Err(IncorrectChecksumError { incorrect: actual, expected }.into());
    }

    data.truncate(check_start);
    Ok(data)
}

/// Returns the first four bytes of the double SHA-256 of `data`.
fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256d::Hash::hash(data).to_byte_array();
    let mut ret = [0u8; CHECKSUM_LEN];
    ret.copy_from_slice(&hash[..CHECKSUM_LEN]);
    ret
}

/// Encodes `data` as a base58 string (see also `base58::encode_check()`).
pub fn encode(data: &[u8]) -> String {
    let mut res = String::with_capacity(encoded_reserve_len(data.len()));
    format_iter(&mut res, data.iter().copied()).expect("string doesn't error");
    res
}

/// Encodes `data` as a base58 string including the checksum.
///
/// The checksum is the first four bytes of the sha256d of the data, concatenated onto the end.
pub fn encode_check(data: &[u8]) -> String {
    let mut res = String::with_capacity(encoded_reserve_len(data.len() + CHECKSUM_LEN));
    encode_check_to_writer(&mut res, data).expect("string doesn't fail");
    res
}

/// Encodes `version` followed by `payload` as a base58 string including the checksum.
pub fn encode_versioned(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);
    encode_check(&data)
}

/// Encodes a slice as base58, including the checksum, into a formatter.
pub fn encode_check_to_fmt(fmt: &mut fmt::Formatter, data: &[u8]) -> fmt::Result {
    encode_check_to_writer(fmt, data)
}

fn encode_check_to_writer(fmt: &mut impl fmt::Write, data: &[u8]) -> fmt::Result {
    let checksum = checksum(data);
    let iter = data.iter().copied().chain(checksum.iter().copied());
    format_iter(fmt, iter)
}

/// Returns the length to reserve when encoding base58 without checksum
const fn encoded_reserve_len(unencoded_len: usize) -> usize {
    // log2(256) / log2(58) ~ 1.37 = 137 / 100
    unencoded_len * 137 / 100
}

fn format_iter<I, W>(writer: &mut W, data: I) -> fmt::Result
where
    I: Iterator<Item = u8>,
    W: fmt::Write,
{
    let mut buf = Vec::with_capacity(encoded_reserve_len(data.size_hint().0));
    let mut leading_zero_count = 0;
    let mut leading_zeroes = true;
    // Build string in little endian with 0-58 in place of characters...
    for d256 in data {
        let mut carry = u32::from(d256);
        if leading_zeroes && carry == 0 {
            leading_zero_count += 1;
        } else {
            leading_zeroes = false;
        }

        for ch in buf.iter_mut() {
            let new_ch = u32::from(*ch) * 256 + carry;
            *ch = (new_ch % 58) as u8; // cast loses data intentionally
            carry = new_ch / 58;
        }

        while carry > 0 {
            buf.push((carry % 58) as u8); // cast loses data intentionally
            carry /= 58;
        }
    }

    // ... then reverse it and convert to chars
    for _ in 0..leading_zero_count {
        buf.push(0);
    }

    for ch in buf.iter().rev() {
        writer.write_char(char::from(BASE58_CHARS[usize::from(*ch)]))?;
    }

    Ok(())
}
