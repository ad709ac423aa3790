// SPDX-License-Identifier: CC0-1.0

//! Bitcoin Cash Addresses
//!
//! A Bitcoin Cash address names a hash (of a public key or of a redeem script) and the network it
//! is meant for. It is written either as CashAddr (`bitcoincash:qq...`) or in the legacy
//! Base58Check form shared with Bitcoin (`1...`, `3...`). Both forms of the same address parse to
//! equal [`Address`] values.
//!
//! Networks are described by [`NetworkProfile`]s collected in an immutable [`NetworkRegistry`];
//! parsing functions that need to guess the network take the registry by reference.
//!
//! # Examples
//!
//! ```
//! use bch_addresses::{Address, NetworkRegistry};
//!
//! let registry = NetworkRegistry::builtin();
//! let legacy = Address::from_text("12gLdGD5q5KdWViDtq3MouheF9PJr8HmB1", &registry).unwrap();
//! let cashaddr = Address::from_text("qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s", &registry).unwrap();
//!
//! assert_eq!(legacy, cashaddr);
//! assert_eq!(legacy.network().id(), "mainnet");
//! assert_eq!(legacy.to_cashaddr(), "bitcoincash:qqfx3wcg8ts09mt5l3zey06wenapyfqq2qrcyj5x0s");
//! ```
//!
//! This crate can be used in a no-std environment but requires an allocator.

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
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

pub mod address;

#[cfg(test)]
mod tests;

#[rustfmt::skip]
pub use {
	base58,
	cashaddr,
	network,
};

#[doc(inline)]
pub use address::error::*;
#[doc(inline)]
pub use address::{Address, AddressType, ToPubkeyHash, ToScriptHash, MAX_BASE58_LEN};
#[doc(inline)]
pub use network::{NetworkProfile, NetworkRegistry, MAINNET, REGTEST, TESTNET};
