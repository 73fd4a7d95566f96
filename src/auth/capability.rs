//! Unforgeable capability handles.
//!
//! A capability authorizes by *possession*: the types are deliberately
//! neither `Clone` nor `Copy`, have no public constructor, and cannot be
//! rebuilt from raw data a caller controls. The only mint is the
//! [`CapabilityRegistry`](super::CapabilityRegistry), and transferring a
//! capability means moving the value. Holding a reference long enough to
//! call a gated operation is the entire authorization protocol.

use core::fmt;

use crate::domain::{CapabilityId, PoolId};

/// The singleton administrative capability.
///
/// Issued exactly once per registry at bootstrap. Its holder may create
/// pools, freeze and unfreeze them, migrate versions, and rotate manager
/// capabilities. Transferable by move, never copyable.
#[derive(Debug, PartialEq, Eq)]
pub struct AdminCap {
    id: CapabilityId,
}

impl AdminCap {
    pub(crate) const fn new(id: CapabilityId) -> Self {
        Self { id }
    }

    /// Returns this capability's identifier.
    #[must_use]
    pub const fn id(&self) -> CapabilityId {
        self.id
    }
}

impl fmt::Display for AdminCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdminCap({})", self.id)
    }
}

/// A capability bound to exactly one pool.
///
/// Grants fee management on that pool: updating the fee rate and
/// withdrawing accumulated fees. Valid only while its identifier matches
/// the pool's recorded authoritative manager cap — rotation supersedes
/// the old handle without touching it.
#[derive(Debug, PartialEq, Eq)]
pub struct PoolManagerCap {
    id: CapabilityId,
    pool_id: PoolId,
}

impl PoolManagerCap {
    pub(crate) const fn new(id: CapabilityId, pool_id: PoolId) -> Self {
        Self { id, pool_id }
    }

    /// Returns this capability's identifier.
    #[must_use]
    pub const fn id(&self) -> CapabilityId {
        self.id
    }

    /// Returns the pool this capability is bound to.
    #[must_use]
    pub const fn pool_id(&self) -> PoolId {
        self.pool_id
    }
}

impl fmt::Display for PoolManagerCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolManagerCap({} for {})", self.id, self.pool_id)
    }
}
