//! Basic Types
//!
//! Newtype pattern for identities that must not be compared as plain strings.

use serde::{Deserialize, Serialize};

/// Campaign owner wallet address
///
/// Wallet providers report the same address with varying hex casing, so
/// identity comparison is trimmed and case-insensitive. Derived `PartialEq`
/// stays byte-exact; use [`OwnerAddress::matches`] for identity checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerAddress(String);

impl OwnerAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive identity comparison against a caller address
    pub fn matches(&self, caller: &str) -> bool {
        self.0.trim().eq_ignore_ascii_case(caller.trim())
    }
}

impl std::fmt::Display for OwnerAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OwnerAddress {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}
