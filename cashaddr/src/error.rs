// SPDX-License-Identifier: CC0-1.0

//! Error types for the `cashaddr` crate.

use alloc::string::String;
use core::convert::Infallible;
use core::fmt;

/// An error decoding a CashAddr string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The text is not shaped like a CashAddr string.
    Format(FormatError),
    /// The checksum does not verify.
    Checksum(ChecksumError),
    /// The payload does not end on a clean byte boundary.
    Padding(PaddingError),
    /// The reserved top bit of the version byte is set.
    ReservedBit(ReservedBitError),
    /// The version byte names neither P2PKH nor P2SH.
    UnknownType(UnknownTypeError),
    /// The hash is not as long as the version byte declares.
    LengthMismatch(LengthMismatchError),
}

impl From<Infallible> for DecodeError {
    fn from(never: Infallible) -> Self { match never {} }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DecodeError::*;

        match *self {
            Format(ref e) => write!(f, "malformed cashaddr: {}", e),
            Checksum(ref e) => fmt::Display::fmt(e, f),
            Padding(ref e) => fmt::Display::fmt(e, f),
            ReservedBit(ref e) => fmt::Display::fmt(e, f),
            UnknownType(ref e) => fmt::Display::fmt(e, f),
            LengthMismatch(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DecodeError::*;

        match *self {
            Format(ref e) => Some(e),
            Checksum(ref e) => Some(e),
            Padding(ref e) => Some(e),
            ReservedBit(ref e) => Some(e),
            UnknownType(ref e) => Some(e),
            LengthMismatch(ref e) => Some(e),
        }
    }
}

impl From<FormatError> for DecodeError {
    fn from(e: FormatError) -> Self { Self::Format(e) }
}

impl From<ChecksumError> for DecodeError {
    fn from(e: ChecksumError) -> Self { Self::Checksum(e) }
}

impl From<PaddingError> for DecodeError {
    fn from(e: PaddingError) -> Self { Self::Padding(e) }
}

impl From<ReservedBitError> for DecodeError {
    fn from(e: ReservedBitError) -> Self { Self::ReservedBit(e) }
}

impl From<UnknownTypeError> for DecodeError {
    fn from(e: UnknownTypeError) -> Self { Self::UnknownType(e) }
}

impl From<LengthMismatchError> for DecodeError {
    fn from(e: LengthMismatchError) -> Self { Self::LengthMismatch(e) }
}

/// The characters of a CashAddr string are not arranged as `prefix:payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// Both upper and lower case letters are present.
    MixedCase,
    /// A `:` is the first character, repeated, or follows a digit.
    InvalidSeparator {
        /// Byte offset of the offending separator.
        pos: usize,
    },
    /// A character is outside the CashAddr alphabet.
    InvalidCharacter {
        /// The offending character.
        invalid: char,
        /// Byte offset of the offending character.
        pos: usize,
    },
    /// The payload is too short to hold a checksum and a version byte.
    TooShort {
        /// Number of payload digits present.
        digits: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FormatError::*;

        match *self {
            MixedCase => f.write_str("mixed upper and lower case"),
            InvalidSeparator { pos } => write!(f, "misplaced separator at position {}", pos),
            InvalidCharacter { invalid, pos } =>
                write!(f, "invalid character {:?} at position {}", invalid, pos),
            TooShort { digits } => write!(f, "payload of {} digits is too short", digits),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// The checksum does not verify under the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumError {
    pub(crate) prefix: String,
}

impl ChecksumError {
    /// Returns the prefix the checksum was verified against.
    pub fn prefix(&self) -> &str { &self.prefix }
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid cashaddr checksum for prefix {}", self.prefix)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChecksumError {}

/// The bits left over after regrouping digits into bytes are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PaddingError {
    /// A whole digit or more is left over.
    TooMuchPadding {
        /// Number of leftover bits.
        bits: u32,
    },
    /// The leftover bits are not all zero.
    NonZeroPadding,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::TooMuchPadding { bits } => write!(f, "too much padding: {} leftover bits", bits),
            Self::NonZeroPadding => f.write_str("non-zero padding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaddingError {}

/// Bit 7 of the version byte is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedBitError {
    pub(crate) version: u8,
}

impl ReservedBitError {
    /// Returns the version byte.
    pub fn version(&self) -> u8 { self.version }
}

impl fmt::Display for ReservedBitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "reserved bit set in version byte {:#04x}", self.version)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReservedBitError {}

/// The type field of the version byte is neither P2PKH nor P2SH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTypeError {
    pub(crate) version: u8,
}

impl UnknownTypeError {
    /// Returns the version byte.
    pub fn version(&self) -> u8 { self.version }

    /// Returns the unrecognised type field.
    pub fn type_bits(&self) -> u8 { self.version >> 3 }
}

impl fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown address type {} in version byte {:#04x}", self.type_bits(), self.version)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownTypeError {}

/// The decoded hash does not have the length the size class declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatchError {
    pub(crate) expected: usize,
    pub(crate) actual: usize,
}

impl LengthMismatchError {
    /// Returns the length declared by the version byte.
    pub fn expected(&self) -> usize { self.expected }

    /// Returns the length actually decoded.
    pub fn actual(&self) -> usize { self.actual }
}

impl fmt::Display for LengthMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "hash is {} bytes but the version byte declares {}", self.actual, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthMismatchError {}

/// No size class encodes a hash of this length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHashLengthError {
    pub(crate) length: usize,
}

impl InvalidHashLengthError {
    /// Constructs an error for a hash of `length` bytes.
    pub fn new(length: usize) -> Self { Self { length } }

    /// Returns the rejected length.
    pub fn length(&self) -> usize { self.length }
}

impl fmt::Display for InvalidHashLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a {} byte hash has no size class, expected one of 20, 24, 28, 32, 40, 48, 56 or 64",
            self.length
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidHashLengthError {}

/// Regrouping bits between word widths failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertBitsError {
    /// An input word is wider than the declared width.
    InvalidValue {
        /// The offending word.
        value: u8,
        /// The declared input width.
        from_bits: u32,
    },
    /// The trailing bits are invalid.
    Padding(PaddingError),
}

impl From<PaddingError> for ConvertBitsError {
    fn from(e: PaddingError) -> Self { Self::Padding(e) }
}

impl fmt::Display for ConvertBitsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidValue { value, from_bits } =>
                write!(f, "value {} does not fit in {} bits", value, from_bits),
            Self::Padding(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertBitsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::InvalidValue { .. } => None,
            Self::Padding(ref e) => Some(e),
        }
    }
}
