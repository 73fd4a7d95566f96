//! Opaque identifiers for pools and capabilities.
//!
//! Identifiers are allocated by the
//! [`CapabilityRegistry`](crate::auth::CapabilityRegistry) from a single
//! monotonic counter, so no two objects it creates ever share an id.
//! Callers can copy and compare identifiers freely — knowing an id
//! authorizes nothing; only possession of the capability value does.

use core::fmt;

/// Unique identifier of a [`Pool`](crate::pool::Pool) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolId(u64);

impl PoolId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool-{}", self.0)
    }
}

/// Unique identifier of an issued capability.
///
/// A pool records the `CapabilityId` of its authoritative manager cap;
/// rotation replaces that record, which is what invalidates a superseded
/// capability without touching the capability value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityId(u64);

impl CapabilityId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cap-{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn pool_ids_compare_by_value() {
        assert_eq!(PoolId::new(1), PoolId::new(1));
        assert_ne!(PoolId::new(1), PoolId::new(2));
    }

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", PoolId::new(7)), "pool-7");
        assert_eq!(format!("{}", CapabilityId::new(3)), "cap-3");
    }
}
