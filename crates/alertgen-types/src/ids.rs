//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Alerts are keyed by a random UUID v4 rendered in its hyphenated text
//! form. The newtype keeps alert identifiers from being mixed with other
//! UUIDs and gives the store a cheap `Copy` + `Hash` key.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a generated alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlertId(pub Uuid);

impl AlertId {
    /// Create a new identifier using UUID v4 (random).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build a UUID v4 identifier from caller-supplied random bytes.
    ///
    /// The version and variant bits are overwritten, so any 16 bytes are
    /// accepted. Used by the generator so seeded runs stay reproducible.
    pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for AlertId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AlertId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Uuid>().map(Self)
    }
}

impl From<Uuid> for AlertId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AlertId> for Uuid {
    fn from(id: AlertId) -> Self {
        id.0
    }
}
