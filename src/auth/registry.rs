//! Issuance and verification of capabilities.

use std::collections::HashMap;

use super::{AdminCap, PoolManagerCap};
use crate::domain::{CapabilityId, PoolId};
use crate::error::{PoolError, Result};

/// Mints capabilities and allocates identifiers.
///
/// The registry is a host-owned value: the host constructs one at
/// bootstrap, calls [`issue_admin_cap`](Self::issue_admin_cap) exactly
/// once, and keeps the registry alive for the lifetime of the engine.
/// The registry enforces the once-only admin issuance and the
/// once-per-pool manager issuance itself; it does not need to be shared
/// with callers that merely present capabilities, because verification
/// is pure.
///
/// # Examples
///
/// ```
/// use cerberus_amm::auth::CapabilityRegistry;
///
/// let mut registry = CapabilityRegistry::new();
/// let admin = registry.issue_admin_cap().expect("first issuance");
/// assert!(registry.issue_admin_cap().is_err());
/// # let _ = admin;
/// ```
#[derive(Debug)]
pub struct CapabilityRegistry {
    next_id: u64,
    admin_issued: bool,
    manager_caps: HashMap<PoolId, CapabilityId>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CapabilityRegistry {
    /// Creates an empty registry with no capabilities issued.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            admin_issued: false,
            manager_caps: HashMap::new(),
        }
    }

    /// Issues the singleton [`AdminCap`].
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::AlreadyInitialized`] on every call after the
    /// first. At most one valid admin capability exists per registry.
    pub fn issue_admin_cap(&mut self) -> Result<AdminCap> {
        if self.admin_issued {
            return Err(PoolError::AlreadyInitialized);
        }
        self.admin_issued = true;
        Ok(AdminCap::new(self.allocate_cap_id()))
    }

    /// Allocates a fresh pool identifier.
    pub fn allocate_pool_id(&mut self) -> PoolId {
        PoolId::new(self.allocate_raw())
    }

    /// Issues the manager capability for a newly created pool.
    ///
    /// Requires the admin capability; the reference is proof of
    /// possession and is otherwise unused.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::AlreadyInitialized`] if a manager capability
    /// was already issued for `pool_id`. Use
    /// [`reissue_manager_cap`](Self::reissue_manager_cap) to rotate.
    pub fn issue_manager_cap(
        &mut self,
        _admin: &AdminCap,
        pool_id: PoolId,
    ) -> Result<PoolManagerCap> {
        if self.manager_caps.contains_key(&pool_id) {
            return Err(PoolError::AlreadyInitialized);
        }
        let id = self.allocate_cap_id();
        self.manager_caps.insert(pool_id, id);
        Ok(PoolManagerCap::new(id, pool_id))
    }

    /// Mints a replacement manager capability for an existing pool.
    ///
    /// The old handle is not revoked here — it becomes invalid the
    /// moment the pool records the new capability as authoritative
    /// (see [`Pool::rotate_manager_cap`](crate::pool::Pool::rotate_manager_cap)).
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidCapability`] if `pool_id` never had a
    /// manager capability issued.
    pub fn reissue_manager_cap(
        &mut self,
        _admin: &AdminCap,
        pool_id: PoolId,
    ) -> Result<PoolManagerCap> {
        if !self.manager_caps.contains_key(&pool_id) {
            return Err(PoolError::InvalidCapability);
        }
        let id = self.allocate_cap_id();
        self.manager_caps.insert(pool_id, id);
        Ok(PoolManagerCap::new(id, pool_id))
    }

    fn allocate_cap_id(&mut self) -> CapabilityId {
        CapabilityId::new(self.allocate_raw())
    }

    fn allocate_raw(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Verifies a manager capability against a pool's authoritative record.
///
/// Pure and side-effect-free, so pool operations run it inside the same
/// critical section as the mutation they guard — the check and the
/// effect are never two separate steps.
///
/// # Errors
///
/// - [`PoolError::CapabilityMismatch`] when the capability is bound to a
///   different pool than `expected_pool_id`.
/// - [`PoolError::InvalidCapability`] when the capability's identifier is
///   not `authoritative_id` (e.g. it was superseded by rotation).
pub const fn verify_manager(
    cap: &PoolManagerCap,
    expected_pool_id: PoolId,
    authoritative_id: CapabilityId,
) -> Result<()> {
    if cap.pool_id().get() != expected_pool_id.get() {
        return Err(PoolError::CapabilityMismatch);
    }
    if cap.id().get() != authoritative_id.get() {
        return Err(PoolError::InvalidCapability);
    }
    Ok(())
}
