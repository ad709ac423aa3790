// SPDX-License-Identifier: CC0-1.0

//! Error code for the `base58` crate.

use core::convert::Infallible;
use core::fmt;

/// An error occurred during base58 decoding (with checksum).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Invalid character while decoding.
    Decode(InvalidCharacterError),
    /// Checksum was not correct.
    IncorrectChecksum(IncorrectChecksumError),
    /// Checked data was too short.
    TooShort(TooShortError),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self { match never {} }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            Decode(ref e) => write!(f, "decode: {}", e),
            IncorrectChecksum(ref e) => write!(f, "incorrect checksum: {}", e),
            TooShort(ref e) => write!(f, "too short: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            Decode(ref e) => Some(e),
            IncorrectChecksum(ref e) => Some(e),
            TooShort(ref e) => Some(e),
        }
    }
}

impl From<InvalidCharacterError> for Error {
    fn from(e: InvalidCharacterError) -> Self { Self::Decode(e) }
}

impl From<IncorrectChecksumError> for Error {
    fn from(e: IncorrectChecksumError) -> Self { Self::IncorrectChecksum(e) }
}

impl From<TooShortError> for Error {
    fn from(e: TooShortError) -> Self { Self::TooShort(e) }
}

/// Checksum was not correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectChecksumError {
    /// The incorrect checksum.
    pub(super) incorrect: u32,
    /// The expected checksum.
    pub(super) expected: u32,
}

impl IncorrectChecksumError {
    /// Returns the checksum found at the end of the data.
    pub fn incorrect(&self) -> u32 { self.incorrect }

    /// Returns the checksum computed over the data.
    pub fn expected(&self) -> u32 { self.expected }
}

impl fmt::Display for IncorrectChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "base58 checksum {:#x} does not match expected {:#x}",
            self.incorrect, self.expected
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IncorrectChecksumError {}

/// The decoded data is shorter than the checksum plus whatever must precede it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooShortError {
    /// The length of the decoded data.
    pub(super) length: usize,
    /// The minimum length accepted.
    pub(super) required: usize,
}

impl TooShortError {
    /// Returns the number of bytes that decoded.
    pub fn length(&self) -> usize { self.length }

    /// Returns the minimum number of bytes accepted.
    pub fn required(&self) -> usize { self.required }
}

impl fmt::Display for TooShortError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "base58 decoded data was {} bytes long, at least {} bytes are required",
            self.length, self.required
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TooShortError {}

/// Found a invalid ASCII byte while decoding base58 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCharacterError {
    pub(super) invalid: u8,
    pub(super) pos: usize,
}

impl InvalidCharacterError {
    /// Returns the invalid byte.
    pub fn invalid_base58_byte(&self) -> u8 { self.invalid }

    /// Returns the byte offset of the invalid character.
    pub fn position(&self) -> usize { self.pos }
}

impl fmt::Display for InvalidCharacterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid base58 character {:#x} at position {}", self.invalid, self.pos)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCharacterError {}
