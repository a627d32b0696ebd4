//! Byte sources for random (version 4) generation.

use crate::{UuidError, UuidResult};
use rand::rngs::OsRng;
use rand::RngCore;

/// A capability that fills a buffer with random bytes.
///
/// [`crate::v4_with`] takes one of these so callers can pick the source. Production code
/// should use [`OsRandom`]; tests can supply a fixed or seeded source to assert exact output.
pub trait RandomSource {
    /// Fills `dest` entirely.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::Entropy`] if the source cannot produce bytes.
    fn fill(&mut self, dest: &mut [u8]) -> UuidResult<()>;
}

/// The operating system CSPRNG.
///
/// Stateless and safe to construct per call. Failures are reported, never papered over with
/// a weaker generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, dest: &mut [u8]) -> UuidResult<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            tracing::warn!("operating system random source failed: {}", e);
            UuidError::Entropy(e.to_string())
        })
    }
}

/// Adapts any [`rand::RngCore`] into a [`RandomSource`].
///
/// Suitable for seeded generators in tests. The uniqueness guarantee of version 4 UUIDs is
/// only as good as the wrapped generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn fill(&mut self, dest: &mut [u8]) -> UuidResult<()> {
        self.0
            .try_fill_bytes(dest)
            .map_err(|e| UuidError::Entropy(e.to_string()))
    }
}
