// SPDX-License-Identifier: CC0-1.0

//! The table of networks an address may belong to.
//!
//! A registry is built once and then only read. Lookups are linear scans in registration order;
//! when two profiles share a legacy version byte the one registered first wins.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NetworkProfile;

/// Built-in profiles in resolution order.
static BUILTIN: [NetworkProfile; 3] =
    [NetworkProfile::MAINNET, NetworkProfile::TESTNET, NetworkProfile::REGTEST];

/// An immutable, ordered set of [`NetworkProfile`]s.
///
/// Ids and CashAddr prefixes are unique within a registry, legacy version bytes need not be.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<NetworkProfile>", into = "Vec<NetworkProfile>")
)]
pub struct NetworkRegistry {
    profiles: Cow<'static, [NetworkProfile]>,
}

impl NetworkRegistry {
    /// Returns the built-in registry: mainnet, testnet, regtest.
    pub fn builtin() -> Self { Self { profiles: Cow::Borrowed(&BUILTIN) } }

    /// Constructs a registry from `profiles`, keeping their order.
    ///
    /// # Errors
    ///
    /// If `profiles` is empty or two profiles share an id or a CashAddr prefix.
    pub fn new(profiles: Vec<NetworkProfile>) -> Result<Self, RegistryError> {
        if profiles.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, profile) in profiles.iter().enumerate() {
            let earlier = &profiles[..i];
            if earlier.iter().any(|p| p.id() == profile.id()) {
                return Err(RegistryError::DuplicateId(profile.id().into()));
            }
            if earlier.iter().any(|p| p.cashaddr_prefix() == profile.cashaddr_prefix()) {
                return Err(RegistryError::DuplicatePrefix(profile.cashaddr_prefix().into()));
            }
        }
        log::debug!("network registry built with {} profiles", profiles.len());
        Ok(Self { profiles: Cow::Owned(profiles) })
    }

    /// Returns a new registry holding these profiles followed by `extra`.
    pub fn extend_with(
        &self,
        extra: impl IntoIterator<Item = NetworkProfile>,
    ) -> Result<Self, RegistryError> {
        let mut profiles = self.profiles.to_vec();
        profiles.extend(extra);
        Self::new(profiles)
    }

    /// Iterates the profiles in resolution order.
    pub fn iter(&self) -> slice::Iter<'_, NetworkProfile> { self.profiles.iter() }

    /// Returns the number of registered networks.
    pub fn len(&self) -> usize { self.profiles.len() }

    /// Returns true if no networks are registered, never the case for a constructed registry.
    pub fn is_empty(&self) -> bool { self.profiles.is_empty() }

    /// Looks up a network by its id.
    pub fn by_id(&self, id: &str) -> Option<&NetworkProfile> { self.iter().find(|p| p.id() == id) }

    /// Looks up a network by its CashAddr prefix, ignoring ASCII case.
    pub fn by_prefix(&self, prefix: &str) -> Option<&NetworkProfile> {
        self.iter().find(|p| p.cashaddr_prefix().eq_ignore_ascii_case(prefix))
    }

    /// Returns the first network that accepts the legacy `version` byte.
    pub fn by_legacy_version(&self, version: u8) -> Option<&NetworkProfile> {
        self.iter().find(|p| p.accepts_legacy_version(version))
    }

    /// Looks up a network by its id, failing if it is not registered.
    pub fn require(&self, id: &str) -> Result<&NetworkProfile, UnknownNetworkError> {
        self.by_id(id).ok_or_else(|| UnknownNetworkError(id.into()))
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self { Self::builtin() }
}

impl<'a> IntoIterator for &'a NetworkRegistry {
    type Item = &'a NetworkProfile;
    type IntoIter = slice::Iter<'a, NetworkProfile>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl TryFrom<Vec<NetworkProfile>> for NetworkRegistry {
    type Error = RegistryError;

    fn try_from(profiles: Vec<NetworkProfile>) -> Result<Self, Self::Error> { Self::new(profiles) }
}

impl From<NetworkRegistry> for Vec<NetworkProfile> {
    fn from(registry: NetworkRegistry) -> Self { registry.profiles.into_owned() }
}

/// A registry could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    /// No profiles were supplied.
    Empty,
    /// Two profiles share this id.
    DuplicateId(String),
    /// Two profiles share this CashAddr prefix.
    DuplicatePrefix(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("a network registry needs at least one profile"),
            Self::DuplicateId(ref id) => write!(f, "network id {} is registered twice", id),
            Self::DuplicatePrefix(ref prefix) =>
                write!(f, "cashaddr prefix {} is registered twice", prefix),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

/// No network with this id is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetworkError(pub String);

impl fmt::Display for UnknownNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown network: {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownNetworkError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAINNET, REGTEST, TESTNET};

    fn custom(id: &str, prefix: &str, p2pkh: u8, p2sh: u8) -> NetworkProfile {
        NetworkProfile::new(id, prefix, p2pkh, p2sh).expect("valid profile")
    }

    #[test]
    fn builtin_order() {
        let registry = NetworkRegistry::builtin();
        let ids: Vec<&str> = registry.iter().map(NetworkProfile::id).collect();
        assert_eq!(ids, ["mainnet", "testnet", "regtest"]);
        assert_eq!(registry, NetworkRegistry::default());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookups() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(registry.by_id("testnet"), Some(&TESTNET));
        assert_eq!(registry.by_id("bitcoin"), None);
        assert_eq!(registry.by_prefix("bitcoincash"), Some(&MAINNET));
        assert_eq!(registry.by_prefix("BCHREG"), Some(&REGTEST));
        assert_eq!(registry.by_prefix("ecash"), None);
        assert_eq!(registry.require("nope"), Err(UnknownNetworkError("nope".into())));
    }

    #[test]
    fn first_legacy_match_wins() {
        let registry = NetworkRegistry::builtin();
        assert_eq!(registry.by_legacy_version(0), Some(&MAINNET));
        assert_eq!(registry.by_legacy_version(5), Some(&MAINNET));
        // Testnet and regtest overlap, testnet is registered first.
        assert_eq!(registry.by_legacy_version(111), Some(&TESTNET));
        assert_eq!(registry.by_legacy_version(196), Some(&TESTNET));
        assert_eq!(registry.by_legacy_version(42), None);

        let reordered = NetworkRegistry::new(vec![REGTEST.clone(), TESTNET.clone()]).unwrap();
        assert_eq!(reordered.by_legacy_version(111), Some(&REGTEST));
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(NetworkRegistry::new(vec![]), Err(RegistryError::Empty));
        assert_eq!(
            NetworkRegistry::new(vec![MAINNET.clone(), custom("mainnet", "other", 1, 2)]),
            Err(RegistryError::DuplicateId("mainnet".into()))
        );
        assert_eq!(
            NetworkRegistry::builtin().extend_with([custom("ecash", "bitcoincash", 0, 5)]),
            Err(RegistryError::DuplicatePrefix("bitcoincash".into()))
        );
    }

    #[test]
    fn extend_keeps_builtins_first() {
        let registry =
            NetworkRegistry::builtin().extend_with([custom("ecash", "ecash", 0, 5)]).unwrap();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.by_legacy_version(0), Some(&MAINNET));
        assert_eq!(registry.by_prefix("ecash").map(NetworkProfile::id), Some("ecash"));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_roundtrip() {
        let registry =
            NetworkRegistry::builtin().extend_with([custom("ecash", "ecash", 0, 5)]).unwrap();
        let json = serde_json::to_string(&registry).expect("failed to serialize registry");
        let back: NetworkRegistry = serde_json::from_str(&json).expect("failed to deserialize");
        assert_eq!(back, registry);

        assert!(serde_json::from_str::<NetworkRegistry>("[]").is_err());
    }
}
