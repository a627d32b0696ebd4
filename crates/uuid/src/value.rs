//! Typed UUID value.

use crate::codec::{to_canonical, to_raw, RawUuid};
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// An immutable 128-bit UUID that always displays in canonical form.
///
/// Use this wrapper when a UUID needs to travel through typed code (as a map key, a struct
/// field, a serde value) rather than as a bare string. It carries no ownership of any
/// storage; it is `Copy` and compares by value.
///
/// # Construction
/// - [`CanonicalUuid::parse`] (or [`FromStr`]) validates a string.
/// - [`CanonicalUuid::from_bytes`] wraps raw bytes as-is.
///
/// # Display format
/// Always the 36-character lowercase hyphenated form, whatever the case of the parsed input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalUuid(RawUuid);

impl CanonicalUuid {
    /// Parses a UUID string.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Format`] if `input` is not a well-formed UUID.
    pub fn parse(input: &str) -> UuidResult<Self> {
        to_raw(input).map(Self)
    }

    /// Wraps 16 raw bytes.
    pub const fn from_bytes(bytes: RawUuid) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &RawUuid {
        &self.0
    }

    /// Returns the version nibble (high four bits of byte 6).
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns true if the variant bits (top two bits of byte 8) are `10`.
    pub fn is_rfc4122_variant(&self) -> bool {
        self.0[8] & 0xc0 == 0x80
    }
}

impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_canonical(&self.0))
    }
}

impl FromStr for CanonicalUuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalUuid::parse(s)
    }
}

impl From<uuid::Uuid> for CanonicalUuid {
    fn from(value: uuid::Uuid) -> Self {
        Self(*value.as_bytes())
    }
}

impl From<CanonicalUuid> for uuid::Uuid {
    fn from(value: CanonicalUuid) -> Self {
        uuid::Uuid::from_bytes(value.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&to_canonical(&self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        CanonicalUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
