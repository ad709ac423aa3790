// SPDX-License-Identifier: CC0-1.0

//! Error code for the address module.

use alloc::string::String;
use core::convert::Infallible;
use core::fmt;

use cashaddr::{
    InvalidHashLengthError, LengthMismatchError, PaddingError, ReservedBitError, UnknownTypeError,
};

/// Address type is either invalid or not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownAddressTypeError(pub String);

impl fmt::Display for UnknownAddressTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as address type", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownAddressTypeError {}

/// Address parsing error.
///
/// Every variant is a distinct, actionable failure; callers are expected to report them
/// separately rather than as a generic "invalid address".
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The text is malformed in either encoding.
    Format(FormatError),
    /// The CashAddr or Base58Check checksum does not verify.
    Checksum(ChecksumError),
    /// The CashAddr payload does not end on a clean byte boundary.
    Padding(PaddingError),
    /// The reserved bit of the CashAddr version byte is set.
    ReservedBit(ReservedBitError),
    /// The CashAddr version byte names an unknown address type.
    UnknownType(UnknownTypeError),
    /// The CashAddr hash length disagrees with the declared size class.
    LengthMismatch(LengthMismatchError),
    /// A legacy payload or supplied hash has a length no size class encodes.
    InvalidHashLength(InvalidHashLengthError),
    /// The explicit CashAddr prefix belongs to a different network.
    PrefixMismatch(PrefixMismatchError),
    /// The legacy version byte is not one the requested network uses.
    WrongNetwork(WrongNetworkError),
    /// No registered network matches.
    NoMatch(NoMatchError),
}

impl ParseError {
    /// Ranks how much this error says about the input, higher is more specific.
    ///
    /// A structural error means the text decoded far enough for its content to be judged, a
    /// checksum error means it was at least shaped like an address. An unknown legacy version
    /// byte ranks with checksum errors, its checksum verified.
    pub(crate) fn specificity(&self) -> u8 {
        use ParseError::*;

        match *self {
            NoMatch(NoMatchError::UnknownLegacyVersion(_)) => 2,
            NoMatch(_) => 0,
            Format(_) => 1,
            Checksum(_) => 2,
            Padding(_) | ReservedBit(_) | UnknownType(_) | LengthMismatch(_)
            | InvalidHashLength(_) | PrefixMismatch(_) | WrongNetwork(_) => 3,
        }
    }
}

impl From<Infallible> for ParseError {
    fn from(never: Infallible) -> Self { match never {} }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseError::*;

        match *self {
            Format(ref e) => write!(f, "malformed address: {}", e),
            Checksum(ref e) => write!(f, "checksum mismatch: {}", e),
            Padding(ref e) => write!(f, "invalid padding: {}", e),
            ReservedBit(ref e) => fmt::Display::fmt(e, f),
            UnknownType(ref e) => fmt::Display::fmt(e, f),
            LengthMismatch(ref e) => fmt::Display::fmt(e, f),
            InvalidHashLength(ref e) => fmt::Display::fmt(e, f),
            PrefixMismatch(ref e) => fmt::Display::fmt(e, f),
            WrongNetwork(ref e) => fmt::Display::fmt(e, f),
            NoMatch(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ParseError::*;

        match *self {
            Format(ref e) => Some(e),
            Checksum(ref e) => Some(e),
            Padding(ref e) => Some(e),
            ReservedBit(ref e) => Some(e),
            UnknownType(ref e) => Some(e),
            LengthMismatch(ref e) => Some(e),
            InvalidHashLength(ref e) => Some(e),
            PrefixMismatch(ref e) => Some(e),
            WrongNetwork(ref e) => Some(e),
            NoMatch(ref e) => Some(e),
        }
    }
}

impl From<FormatError> for ParseError {
    fn from(e: FormatError) -> Self { Self::Format(e) }
}

impl From<ChecksumError> for ParseError {
    fn from(e: ChecksumError) -> Self { Self::Checksum(e) }
}

impl From<InvalidHashLengthError> for ParseError {
    fn from(e: InvalidHashLengthError) -> Self { Self::InvalidHashLength(e) }
}

impl From<PrefixMismatchError> for ParseError {
    fn from(e: PrefixMismatchError) -> Self { Self::PrefixMismatch(e) }
}

impl From<WrongNetworkError> for ParseError {
    fn from(e: WrongNetworkError) -> Self { Self::WrongNetwork(e) }
}

impl From<NoMatchError> for ParseError {
    fn from(e: NoMatchError) -> Self { Self::NoMatch(e) }
}

impl From<cashaddr::DecodeError> for ParseError {
    fn from(e: cashaddr::DecodeError) -> Self {
        use cashaddr::DecodeError as E;

        match e {
            E::Format(e) => Self::Format(FormatError::CashAddr(e)),
            E::Checksum(e) => Self::Checksum(ChecksumError::CashAddr(e)),
            E::Padding(e) => Self::Padding(e),
            E::ReservedBit(e) => Self::ReservedBit(e),
            E::UnknownType(e) => Self::UnknownType(e),
            E::LengthMismatch(e) => Self::LengthMismatch(e),
            other => Self::Format(FormatError::Other(other)),
        }
    }
}

impl From<base58::Error> for ParseError {
    fn from(e: base58::Error) -> Self {
        use base58::Error as E;

        match e {
            E::Decode(e) => Self::Format(FormatError::Base58(e)),
            E::TooShort(e) => Self::Format(FormatError::Base58TooShort(e)),
            E::IncorrectChecksum(e) => Self::Checksum(ChecksumError::Base58(e)),
            _ => Self::Format(FormatError::Unrecognised),
        }
    }
}

/// The address text is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// Malformed CashAddr text.
    CashAddr(cashaddr::FormatError),
    /// A character outside the base58 alphabet.
    Base58(base58::InvalidCharacterError),
    /// The Base58Check data is too short to carry a version and checksum.
    Base58TooShort(base58::TooShortError),
    /// Legacy address is too long.
    LegacyAddressTooLong(LegacyAddressTooLongError),
    /// Some other CashAddr decoding failure.
    Other(cashaddr::DecodeError),
    /// The text could not be decoded for an unrecognised reason.
    Unrecognised,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FormatError::*;

        match *self {
            CashAddr(ref e) => write!(f, "cashaddr: {}", e),
            Base58(ref e) => write!(f, "base58: {}", e),
            Base58TooShort(ref e) => write!(f, "base58: {}", e),
            LegacyAddressTooLong(ref e) => fmt::Display::fmt(e, f),
            Other(ref e) => fmt::Display::fmt(e, f),
            Unrecognised => f.write_str("unrecognised address encoding"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use FormatError::*;

        match *self {
            CashAddr(ref e) => Some(e),
            Base58(ref e) => Some(e),
            Base58TooShort(ref e) => Some(e),
            LegacyAddressTooLong(ref e) => Some(e),
            Other(ref e) => Some(e),
            Unrecognised => None,
        }
    }
}

impl From<LegacyAddressTooLongError> for FormatError {
    fn from(e: LegacyAddressTooLongError) -> Self { Self::LegacyAddressTooLong(e) }
}

/// The checksum of the address text does not verify.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChecksumError {
    /// CashAddr BCH checksum mismatch.
    CashAddr(cashaddr::ChecksumError),
    /// Base58Check double SHA-256 checksum mismatch.
    Base58(base58::IncorrectChecksumError),
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::CashAddr(ref e) => fmt::Display::fmt(e, f),
            Self::Base58(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChecksumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::CashAddr(ref e) => Some(e),
            Self::Base58(ref e) => Some(e),
        }
    }
}

/// Decoded base58 data was an invalid length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyAddressTooLongError {
    /// The length of the legacy address.
    pub(crate) length: usize,
}

impl LegacyAddressTooLongError {
    /// Returns the invalid legacy address length.
    pub fn invalid_legacy_address_length(&self) -> usize { self.length }
}

impl fmt::Display for LegacyAddressTooLongError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "legacy address is too long: {} (max {})", self.length, super::MAX_BASE58_LEN)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LegacyAddressTooLongError {}

/// The explicit CashAddr prefix is not the one the requested network uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMismatchError {
    pub(crate) expected: String,
    pub(crate) found: String,
}

impl PrefixMismatchError {
    /// Returns the prefix of the requested network.
    pub fn expected(&self) -> &str { &self.expected }

    /// Returns the prefix written in the address.
    pub fn found(&self) -> &str { &self.found }
}

impl fmt::Display for PrefixMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "address prefix {} does not match network prefix {}", self.found, self.expected)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PrefixMismatchError {}

/// The legacy version byte is valid but belongs to another network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrongNetworkError {
    pub(crate) version: u8,
    pub(crate) expected: [u8; 2],
    pub(crate) network: String,
}

impl WrongNetworkError {
    /// Returns the version byte found in the address.
    pub fn version(&self) -> u8 { self.version }

    /// Returns the version bytes the requested network accepts, P2PKH first.
    pub fn expected(&self) -> [u8; 2] { self.expected }

    /// Returns the id of the requested network.
    pub fn network(&self) -> &str { &self.network }
}

impl fmt::Display for WrongNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "version byte {} is not valid on {}, expected one of {:?}",
            self.version, self.network, self.expected
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WrongNetworkError {}

/// No registered network claims the address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoMatchError {
    /// No network uses this CashAddr prefix.
    UnknownPrefix(String),
    /// No network uses this legacy version byte.
    UnknownLegacyVersion(u8),
}

impl fmt::Display for NoMatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::UnknownPrefix(ref prefix) =>
                write!(f, "no registered network uses the prefix {}", prefix),
            Self::UnknownLegacyVersion(version) =>
                write!(f, "no registered network uses the legacy version byte {}", version),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NoMatchError {}
