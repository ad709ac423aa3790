// SPDX-License-Identifier: CC0-1.0

//! The BCH checksum that protects a CashAddr string.
//!
//! The digits of an address are read as the coefficients of a polynomial over GF(32) and reduced
//! modulo a fixed degree-8 generator. The prefix is mixed in first, so a checksum computed for one
//! network does not verify under another.

use alloc::vec::Vec;

/// Number of five bit digits in a checksum.
pub const CHECKSUM_LENGTH: usize = 8;

/// The generator multiplied by 1, 2, 4, 8 and 16.
const GENERATORS: [u64; 5] = [0x98f2bc8e61, 0x79b76d99e2, 0xf33e5fb3c4, 0xae2eabe2a8, 0x1e4f43e470];

/// Computes the 40 bit remainder of `values`, a string of five bit digits.
///
/// The remainder is returned XORed with 1, zero means the digits end in a valid checksum.
pub fn polymod(values: &[u8]) -> u64 {
    let mut c: u64 = 1;
    for &d in values {
        let c0 = (c >> 35) as u8; // cast loses data intentionally
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(d);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if c0 & (1 << i) != 0 {
                c ^= generator;
            }
        }
    }
    c ^ 1
}

/// Returns the low five bits of every byte of `prefix` followed by a zero separator.
pub fn expand_prefix(prefix: &str) -> Vec<u8> {
    let mut ret = Vec::with_capacity(prefix.len() + 1);
    ret.extend(prefix.bytes().map(|b| b & 0x1f));
    ret.push(0);
    ret
}

/// Computes the checksum digits for `payload` under `prefix`, most significant first.
pub fn create_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = expand_prefix(prefix);
    values.extend_from_slice(payload);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let modulus = polymod(&values);

    let mut ret = [0u8; CHECKSUM_LENGTH];
    for (i, digit) in ret.iter_mut().enumerate() {
        *digit = ((modulus >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    ret
}

/// Returns true if `payload` ends in a valid checksum for `prefix`.
pub fn verify_checksum(prefix: &str, payload: &[u8]) -> bool {
    let mut values = expand_prefix(prefix);
    values.extend_from_slice(payload);
    polymod(&values) == 0
}
