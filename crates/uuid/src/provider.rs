//! Version-dispatching facade for callers that pick the UUID version at runtime.

use crate::codec::validate;
use crate::generate::{v3, v4, v5};
use crate::{UuidError, UuidResult};
use std::fmt;

/// A UUID version this crate can generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Version {
    /// Name-based, MD5.
    V3,
    /// Random.
    V4,
    /// Name-based, SHA-1.
    V5,
}

impl Version {
    /// Returns true if this version derives its value from a namespace and a name.
    pub fn is_name_based(self) -> bool {
        matches!(self, Self::V3 | Self::V5)
    }
}

impl TryFrom<u8> for Version {
    type Error = UuidError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::V3),
            4 => Ok(Self::V4),
            5 => Ok(Self::V5),
            other => Err(UuidError::InvalidInput(format!(
                "unsupported UUID version {}, expected 3, 4 or 5",
                other
            ))),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            Self::V3 => 3,
            Self::V4 => 4,
            Self::V5 => 5,
        };
        write!(f, "v{}", n)
    }
}

/// Stateless UUID provider.
///
/// Holds nothing; each call draws fresh randomness (for [`Version::V4`]) or hashes its inputs.
/// Cloning or sharing across threads needs no coordination.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidProvider;

impl UuidProvider {
    /// Creates a new provider.
    pub fn new() -> Self {
        Self
    }

    /// Generates a UUID of the given version.
    ///
    /// `namespace` and `name` are required for [`Version::V3`] and [`Version::V5`] and
    /// ignored for [`Version::V4`].
    ///
    /// # Errors
    ///
    /// - [`UuidError::InvalidInput`] if a name-based version is missing its namespace or name.
    /// - [`UuidError::Format`] if `namespace` is not a well-formed UUID.
    /// - [`UuidError::Entropy`] if the random source fails.
    pub fn generate(
        &self,
        version: Version,
        namespace: Option<&str>,
        name: Option<&str>,
    ) -> UuidResult<String> {
        if version == Version::V4 {
            return v4();
        }

        let (Some(namespace), Some(name)) = (namespace, name) else {
            return Err(UuidError::InvalidInput(format!(
                "{} UUIDs require both a namespace and a name",
                version
            )));
        };

        match version {
            Version::V3 => v3(namespace, name),
            _ => v5(namespace, name),
        }
    }

    /// Returns true if `candidate` is a well-formed UUID string. See [`crate::validate`].
    pub fn validate(&self, candidate: &str) -> bool {
        validate(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{DNS, URL};

    #[test]
    fn test_version_try_from() {
        assert_eq!(Version::try_from(3).unwrap(), Version::V3);
        assert_eq!(Version::try_from(4).unwrap(), Version::V4);
        assert_eq!(Version::try_from(5).unwrap(), Version::V5);

        for unsupported in [0u8, 1, 2, 6, 255] {
            match Version::try_from(unsupported) {
                Err(UuidError::InvalidInput(msg)) => {
                    assert!(msg.contains("unsupported UUID version"))
                }
                _ => panic!("Expected InvalidInput error for {}", unsupported),
            }
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::V3.to_string(), "v3");
        assert_eq!(Version::V5.to_string(), "v5");
        assert!(Version::V5.is_name_based());
        assert!(!Version::V4.is_name_based());
    }

    #[test]
    fn test_generate_dispatches_to_name_based_functions() {
        let provider = UuidProvider::new();

        assert_eq!(
            provider
                .generate(Version::V3, Some(DNS), Some("hello"))
                .unwrap(),
            v3(DNS, "hello").unwrap()
        );
        assert_eq!(
            provider
                .generate(Version::V5, Some(URL), Some("hello"))
                .unwrap(),
            v5(URL, "hello").unwrap()
        );
    }

    #[test]
    fn test_generate_v4_ignores_namespace_and_name() {
        let provider = UuidProvider::default();

        let uuid = provider
            .generate(Version::V4, Some("garbage"), None)
            .unwrap();

        assert!(provider.validate(&uuid));
        assert_eq!(uuid.as_bytes()[14], b'4');
    }

    #[test]
    fn test_generate_name_based_requires_inputs() {
        let provider = UuidProvider::new();

        for (namespace, name) in [(None, Some("hello")), (Some(DNS), None), (None, None)] {
            match provider.generate(Version::V5, namespace, name) {
                Err(UuidError::InvalidInput(msg)) => assert!(msg.contains("require both")),
                _ => panic!("Expected InvalidInput error"),
            }
        }
    }

    #[test]
    fn test_generate_rejects_malformed_namespace() {
        let provider = UuidProvider::new();

        assert!(matches!(
            provider.generate(Version::V3, Some("dns"), Some("hello")),
            Err(UuidError::Format(_))
        ));
    }

    #[test]
    fn test_validate() {
        let provider = UuidProvider::new();

        assert!(provider.validate(DNS));
        assert!(!provider.validate("6ba7b814-9dad-11d1-80b4-00c04fd430cx"));
    }
}
