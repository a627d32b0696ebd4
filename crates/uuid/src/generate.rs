//! Name-based (versions 3 and 5) and random (version 4) generation.
//!
//! All three share [`stamp`], which writes the version nibble into byte 6 and the RFC 4122
//! variant bits into byte 8 before formatting. The name-based paths differ only in the digest
//! they run and the version they stamp.

use crate::codec::{to_canonical, to_raw, RawUuid};
use crate::random::{OsRandom, RandomSource};
use crate::UuidResult;
use md5::Md5;
use sha1::{Digest, Sha1};

const VERSION_MD5: u8 = 3;
const VERSION_RANDOM: u8 = 4;
const VERSION_SHA1: u8 = 5;

/// Stamps `version` and the RFC 4122 variant onto `bytes`.
///
/// - The high nibble of byte 6 becomes `version`.
/// - The two high bits of byte 8 become `10`.
///
/// Every other bit is left untouched.
pub fn stamp(mut bytes: RawUuid, version: u8) -> RawUuid {
    bytes[6] = (bytes[6] & 0x0f) | ((version & 0x0f) << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Generates a name-based UUID using MD5 (version 3).
///
/// `name` is hashed as raw bytes after the 16 bytes of `namespace`; no normalisation is
/// applied. The result depends only on its inputs.
///
/// # Errors
///
/// Returns [`crate::UuidError::Format`] if `namespace` is not a well-formed UUID string.
pub fn v3(namespace: &str, name: impl AsRef<[u8]>) -> UuidResult<String> {
    let ns = to_raw(namespace)?;

    let mut hasher = Md5::new();
    hasher.update(ns);
    hasher.update(name.as_ref());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);

    tracing::debug!(namespace, "generated version 3 UUID");
    Ok(to_canonical(&stamp(bytes, VERSION_MD5)))
}

/// Generates a name-based UUID using SHA-1 (version 5).
///
/// Same shape as [`v3`]; the 20-byte digest is truncated to its first 16 bytes.
///
/// # Errors
///
/// Returns [`crate::UuidError::Format`] if `namespace` is not a well-formed UUID string.
pub fn v5(namespace: &str, name: impl AsRef<[u8]>) -> UuidResult<String> {
    let ns = to_raw(namespace)?;

    let mut hasher = Sha1::new();
    hasher.update(ns);
    hasher.update(name.as_ref());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);

    tracing::debug!(namespace, "generated version 5 UUID");
    Ok(to_canonical(&stamp(bytes, VERSION_SHA1)))
}

/// Generates a random UUID (version 4) from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`crate::UuidError::Entropy`] if the OS random source is unavailable.
pub fn v4() -> UuidResult<String> {
    v4_with(&mut OsRandom)
}

/// Generates a random UUID (version 4) from the given source.
///
/// # Errors
///
/// Propagates the source's [`crate::UuidError::Entropy`].
pub fn v4_with<R: RandomSource + ?Sized>(source: &mut R) -> UuidResult<String> {
    let mut bytes = [0u8; 16];
    source.fill(&mut bytes)?;

    tracing::debug!("generated version 4 UUID");
    Ok(to_canonical(&stamp(bytes, VERSION_RANDOM)))
}
