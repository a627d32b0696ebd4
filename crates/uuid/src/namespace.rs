//! Well-known namespace UUIDs from RFC 4122 Appendix C.

use crate::codec::validate;
use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Namespace for fully-qualified domain names.
pub const DNS: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

/// Namespace for URLs.
pub const URL: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";

/// Namespace for ISO object identifiers.
pub const OID: &str = "6ba7b812-9dad-11d1-80b4-00c04fd430c8";

/// Namespace for X.500 distinguished names (DER or text).
pub const X500: &str = "6ba7b814-9dad-11d1-80b4-00c04fd430c8";

/// One of the four predefined namespaces.
///
/// Parses from the short aliases `dns`, `url`, `oid` and `x500` (any case) and displays as
/// the canonical namespace UUID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Dns,
    Url,
    Oid,
    X500,
}

impl Namespace {
    /// All predefined namespaces, in RFC order.
    pub const ALL: [Namespace; 4] = [Self::Dns, Self::Url, Self::Oid, Self::X500];

    /// Returns the canonical UUID string for this namespace.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dns => DNS,
            Self::Url => URL,
            Self::Oid => OID,
            Self::X500 => X500,
        }
    }

    /// Returns the short alias accepted by [`FromStr`].
    pub fn alias(self) -> &'static str {
        match self {
            Self::Dns => "dns",
            Self::Url => "url",
            Self::Oid => "oid",
            Self::X500 => "x500",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ns| ns.alias().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                UuidError::InvalidInput(format!(
                    "unknown namespace alias '{}', expected one of dns, url, oid, x500",
                    s
                ))
            })
    }
}

/// Resolves a namespace given either as an alias or as a UUID string.
///
/// Aliases map to their predefined constant. Anything else must pass [`validate`] and is
/// returned unchanged.
///
/// # Errors
///
/// Returns [`UuidError::Format`] if `input` is neither an alias nor a well-formed UUID.
pub fn resolve_namespace(input: &str) -> UuidResult<String> {
    if let Ok(ns) = input.parse::<Namespace>() {
        return Ok(ns.as_str().to_owned());
    }
    if validate(input) {
        return Ok(input.to_owned());
    }
    Err(UuidError::Format(format!(
        "namespace must be dns, url, oid, x500 or a UUID, got: '{}'",
        input
    )))
}
