//! Pool schema versioning and the version guard.
//!
//! Every state-mutating pool operation accepts a caller-declared minimum
//! version and runs [`assert_supported`] before anything else. Callers
//! built against an old schema keep working after a migration (a stale
//! minimum is still met), while callers that require a newer schema are
//! rejected until the pool is migrated — the standard pattern for
//! breaking upgrades behind a shared object.

use core::fmt;

use crate::error::{PoolError, Result};

/// A pool's schema/logic version.
///
/// Starts at [`Version::INITIAL`] and only ever increases, via an
/// admin-gated migration on the pool.
///
/// # Examples
///
/// ```
/// use cerberus_amm::domain::Version;
///
/// let v = Version::INITIAL;
/// assert_eq!(v.get(), 1);
/// assert!(Version::new(2) > v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version(u64);

impl Version {
    /// The version every pool is created with.
    pub const INITIAL: Self = Self(1);

    /// Creates a `Version` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Rejects calls whose declared minimum exceeds the pool's version.
///
/// # Errors
///
/// Returns [`PoolError::UnsupportedVersion`] when
/// `pool_version < min_version`.
pub const fn assert_supported(pool_version: Version, min_version: Version) -> Result<()> {
    if pool_version.get() < min_version.get() {
        return Err(PoolError::UnsupportedVersion);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_one() {
        assert_eq!(Version::INITIAL.get(), 1);
        assert_eq!(Version::default(), Version::INITIAL);
    }

    // -- assert_supported ---------------------------------------------------

    #[test]
    fn equal_versions_supported() {
        assert!(assert_supported(Version::new(3), Version::new(3)).is_ok());
    }

    #[test]
    fn stale_minimum_supported() {
        // Forward compatibility: old callers keep working after migration.
        assert!(assert_supported(Version::new(5), Version::INITIAL).is_ok());
    }

    #[test]
    fn future_minimum_rejected() {
        assert_eq!(
            assert_supported(Version::new(1), Version::new(2)),
            Err(PoolError::UnsupportedVersion)
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Version::new(4)), "v4");
    }
}
