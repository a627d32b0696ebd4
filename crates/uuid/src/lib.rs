//! RFC 4122 UUID generation and validation.
//!
//! This crate produces and checks 128-bit identifiers in their canonical textual form:
//! **36 characters, lowercase hex, hyphens after the 8th, 12th, 16th and 20th digit**.
//!
//! This module provides:
//! - The four well-known namespaces from RFC 4122 Appendix C ([`DNS`], [`URL`], [`OID`],
//!   [`X500`]).
//! - Name-based generation with MD5 ([`v3`]) and SHA-1 ([`v5`]).
//! - Random generation ([`v4`], or [`v4_with`] for an injected [`RandomSource`]).
//! - Purely syntactic validation ([`validate`]).
//!
//! ## Canonical UUID form
//! - Length: 36
//! - Layout: `xxxxxxxx-xxxx-Mxxx-Nxxx-xxxxxxxxxxxx`
//! - `M` is the version nibble, `N` carries the variant bits (`8`, `9`, `a` or `b`)
//! - Example: `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
//!
//! Notes:
//! - Generated values are always lowercase.
//! - [`validate`] and [`to_raw`] accept either case, but never accept missing or misplaced
//!   hyphens.
//! - Name-based output is a pure function of `(namespace, name)`: the same pair always yields
//!   the same string.
//!
//! ## Randomness
//! [`v4`] reads from the operating system CSPRNG. There is no degraded fallback: if the OS
//! source fails the call returns [`UuidError::Entropy`] and the caller may retry.

mod codec;
mod generate;
mod namespace;
mod provider;
mod random;
mod value;

// Re-export public types
pub use codec::{is_canonical, to_canonical, to_raw, validate, RawUuid, CANONICAL_LEN};
pub use generate::{stamp, v3, v4, v4_with, v5};
pub use namespace::{resolve_namespace, Namespace, DNS, OID, URL, X500};
pub use provider::{UuidProvider, Version};
pub use random::{OsRandom, RandomSource, RngSource};
pub use value::CanonicalUuid;

/// Error type for UUID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Input could not be parsed as a canonical UUID.
    #[error("Invalid UUID format: {0}")]
    Format(String),
    /// The random source could not supply bytes.
    #[error("Random source unavailable: {0}")]
    Entropy(String),
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
