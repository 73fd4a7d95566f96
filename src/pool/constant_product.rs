//! The pool aggregate: two reserves, a fee treasury, and the guards.
//!
//! Every operation runs the same gauntlet: version guard first, then the
//! capability check where one applies, then checked math, then a single
//! atomic commit. All fallible computation happens before the first
//! field assignment, so an error of any kind leaves the pool exactly as
//! it was.

use crate::auth::{verify_manager, AdminCap, CapabilityRegistry, PoolManagerCap};
use crate::config::PoolConfig;
use crate::domain::{
    assert_supported, Amount, BasisPoints, CapabilityId, Liquidity, PoolId, SwapDirection, Version,
};
use crate::error::{PoolError, Result};
use crate::math;

use super::event::{
    FeeUpdated, FeesWithdrawn, LiquidityAdded, LiquidityRemoved, ManagerCapRotated, PoolCreated,
    PoolFrozen, PoolUnfrozen, SwapExecuted, VersionMigrated,
};

/// A capability-gated constant-product liquidity pool.
///
/// The pool owns its reserves, its fee treasuries, and its outstanding
/// LP shares exclusively; mutation goes through `&mut self`, so the
/// borrow checker is the per-instance mutual-exclusion boundary. A
/// multi-threaded host wraps each pool in its own lock and performs the
/// capability presentation and the call inside one critical section —
/// the operations re-verify capabilities internally, so check and effect
/// can never be separated.
///
/// Distinct pools are fully independent and need no coordination.
///
/// # Invariants
///
/// - Both reserves are strictly positive from creation onward.
/// - `reserve_a × reserve_b` never decreases across a swap.
/// - Fee treasuries are disjoint from the tradable reserves and only
///   leave through [`withdraw_fees`](Self::withdraw_fees).
///
/// # Examples
///
/// ```
/// use cerberus_amm::auth::CapabilityRegistry;
/// use cerberus_amm::config::PoolConfig;
/// use cerberus_amm::domain::{Amount, BasisPoints, SwapDirection, Version};
/// use cerberus_amm::pool::Pool;
///
/// let mut registry = CapabilityRegistry::new();
/// let admin = registry.issue_admin_cap().expect("bootstrap");
/// let cfg = PoolConfig::new(
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     BasisPoints::new(30),
/// )
/// .expect("valid config");
///
/// let (mut pool, _manager, _created) =
///     Pool::create(&mut registry, &admin, &cfg).expect("pool created");
///
/// let swap = pool
///     .swap(SwapDirection::AToB, Amount::new(100_000), Version::INITIAL)
///     .expect("swap committed");
/// assert_eq!(swap.fee, Amount::new(300));
/// assert_eq!(swap.amount_out, Amount::new(181_322));
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Pool {
    id: PoolId,
    reserve_a: Amount,
    reserve_b: Amount,
    fee_bps: BasisPoints,
    fee_treasury_a: Amount,
    fee_treasury_b: Amount,
    frozen: bool,
    version: Version,
    manager_cap_id: CapabilityId,
    total_shares: Liquidity,
}

impl Pool {
    /// Creates a pool from a validated config, minting its manager cap.
    ///
    /// Creation is atomic: the pool comes into existence already holding
    /// both initial deposits, with `version = 1`, unfrozen, and with
    /// genesis LP shares of `⌊√(a × b)⌋`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroInitialLiquidity`] / [`PoolError::InvalidFeeBps`]
    ///   from config validation.
    /// - [`PoolError::ArithmeticOverflow`] if the genesis share product
    ///   exceeds `u128`.
    /// - [`PoolError::AlreadyInitialized`] if the registry somehow holds
    ///   a manager cap for the freshly allocated id (not reachable
    ///   through this API).
    pub fn create(
        registry: &mut CapabilityRegistry,
        admin: &AdminCap,
        config: &PoolConfig,
    ) -> Result<(Self, PoolManagerCap, PoolCreated)> {
        config.validate()?;
        let initial_shares = math::initial_shares(config.initial_a(), config.initial_b())?;

        let id = registry.allocate_pool_id();
        let manager_cap = registry.issue_manager_cap(admin, id)?;

        let pool = Self {
            id,
            reserve_a: config.initial_a(),
            reserve_b: config.initial_b(),
            fee_bps: config.fee_bps(),
            fee_treasury_a: Amount::ZERO,
            fee_treasury_b: Amount::ZERO,
            frozen: false,
            version: Version::INITIAL,
            manager_cap_id: manager_cap.id(),
            total_shares: initial_shares,
        };

        let created = PoolCreated {
            pool_id: id,
            reserve_a: pool.reserve_a,
            reserve_b: pool.reserve_b,
            fee_bps: pool.fee_bps,
            manager_cap: manager_cap.id(),
            initial_shares,
        };

        Ok((pool, manager_cap, created))
    }

    /// Swaps `amount_in` of one asset for the other.
    ///
    /// The fee is carved off the input into the treasury first; the
    /// constant-product formula prices the remainder against the current
    /// reserves. The committed reserves therefore satisfy
    /// `k_after ≥ k_before`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedVersion`] if `min_version` exceeds the
    ///   pool's version.
    /// - [`PoolError::ZeroInput`] for a zero input amount.
    /// - [`PoolError::PoolFrozen`] while frozen.
    /// - [`PoolError::InsufficientLiquidity`] when the floored output is
    ///   zero or would equal or exceed the opposite reserve. The pool
    ///   never clamps — oversized trades must be split by the caller.
    /// - [`PoolError::ArithmeticOverflow`] on intermediate overflow.
    pub fn swap(
        &mut self,
        direction: SwapDirection,
        amount_in: Amount,
        min_version: Version,
    ) -> Result<SwapExecuted> {
        assert_supported(self.version, min_version)?;
        if amount_in.is_zero() {
            return Err(PoolError::ZeroInput);
        }
        if self.frozen {
            return Err(PoolError::PoolFrozen);
        }

        let fee = self.fee_bps.fee_amount(amount_in)?;
        // fee <= amount_in because fee_bps <= 10_000 and the fee floors.
        let net_input = amount_in
            .checked_sub(&fee)
            .ok_or(PoolError::ArithmeticOverflow("net input underflow"))?;

        let (reserve_in, reserve_out) = self.oriented_reserves(direction);
        let amount_out = math::constant_product_output(reserve_in, reserve_out, net_input)?;

        if amount_out.is_zero() || amount_out >= reserve_out {
            return Err(PoolError::InsufficientLiquidity);
        }

        let new_reserve_in = reserve_in
            .checked_add(&net_input)
            .ok_or(PoolError::ArithmeticOverflow("reserve after swap"))?;
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(PoolError::ArithmeticOverflow("reserve underflow after swap"))?;
        let new_treasury = self
            .treasury_for(direction)
            .checked_add(&fee)
            .ok_or(PoolError::ArithmeticOverflow("fee treasury"))?;

        // Commit. Nothing below can fail.
        match direction {
            SwapDirection::AToB => {
                self.reserve_a = new_reserve_in;
                self.reserve_b = new_reserve_out;
                self.fee_treasury_a = new_treasury;
            }
            SwapDirection::BToA => {
                self.reserve_b = new_reserve_in;
                self.reserve_a = new_reserve_out;
                self.fee_treasury_b = new_treasury;
            }
        }

        Ok(SwapExecuted {
            pool_id: self.id,
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Deposits both assets and mints LP shares.
    ///
    /// Shares are `min(⌊Δa·L/Ra⌋, ⌊Δb·L/Rb⌋)` — a lopsided deposit
    /// donates its excess to the pool.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedVersion`] / [`PoolError::PoolFrozen`]
    ///   from the standing guards.
    /// - [`PoolError::InvalidLiquidity`] if either amount is zero or the
    ///   deposit is too small to mint a single share.
    /// - [`PoolError::ArithmeticOverflow`] on intermediate overflow.
    pub fn add_liquidity(
        &mut self,
        amount_a: Amount,
        amount_b: Amount,
        min_version: Version,
    ) -> Result<LiquidityAdded> {
        assert_supported(self.version, min_version)?;
        if self.frozen {
            return Err(PoolError::PoolFrozen);
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(PoolError::InvalidLiquidity("deposit requires both assets"));
        }

        let minted = math::shares_for_deposit(
            amount_a,
            amount_b,
            self.reserve_a,
            self.reserve_b,
            self.total_shares,
        )?;
        if minted.is_zero() {
            return Err(PoolError::InvalidLiquidity("deposit too small to mint shares"));
        }

        let new_reserve_a = self
            .reserve_a
            .checked_add(&amount_a)
            .ok_or(PoolError::ArithmeticOverflow("reserve_a after deposit"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_add(&amount_b)
            .ok_or(PoolError::ArithmeticOverflow("reserve_b after deposit"))?;
        let new_total = self
            .total_shares
            .checked_add(&minted)
            .ok_or(PoolError::ArithmeticOverflow("total shares after deposit"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;

        Ok(LiquidityAdded {
            pool_id: self.id,
            amount_a,
            amount_b,
            minted,
        })
    }

    /// Burns LP shares and pays out both assets pro rata.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedVersion`] / [`PoolError::PoolFrozen`]
    ///   from the standing guards.
    /// - [`PoolError::InvalidLiquidity`] for a zero share amount.
    /// - [`PoolError::InsufficientLiquidity`] when burning more shares
    ///   than exist or when the payout would empty either reserve —
    ///   pools stay non-empty for their whole lifetime.
    pub fn remove_liquidity(
        &mut self,
        shares: Liquidity,
        min_version: Version,
    ) -> Result<LiquidityRemoved> {
        assert_supported(self.version, min_version)?;
        if self.frozen {
            return Err(PoolError::PoolFrozen);
        }
        if shares.is_zero() {
            return Err(PoolError::InvalidLiquidity("must burn a non-zero share amount"));
        }
        if shares > self.total_shares {
            return Err(PoolError::InsufficientLiquidity);
        }

        let (amount_a, amount_b) = math::amounts_for_withdrawal(
            shares,
            self.total_shares,
            self.reserve_a,
            self.reserve_b,
        )?;

        let new_reserve_a = self
            .reserve_a
            .checked_sub(&amount_a)
            .ok_or(PoolError::ArithmeticOverflow("reserve_a after withdrawal"))?;
        let new_reserve_b = self
            .reserve_b
            .checked_sub(&amount_b)
            .ok_or(PoolError::ArithmeticOverflow("reserve_b after withdrawal"))?;
        if new_reserve_a.is_zero() || new_reserve_b.is_zero() {
            return Err(PoolError::InsufficientLiquidity);
        }
        let new_total = self
            .total_shares
            .checked_sub(&shares)
            .ok_or(PoolError::ArithmeticOverflow("total shares after withdrawal"))?;

        self.reserve_a = new_reserve_a;
        self.reserve_b = new_reserve_b;
        self.total_shares = new_total;

        Ok(LiquidityRemoved {
            pool_id: self.id,
            shares_burned: shares,
            amount_a,
            amount_b,
        })
    }

    /// Changes the fee rate. Manager-gated.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedVersion`] from the version guard.
    /// - [`PoolError::CapabilityMismatch`] / [`PoolError::InvalidCapability`]
    ///   from capability verification.
    /// - [`PoolError::InvalidFeeBps`] outside `0..=10_000`.
    pub fn update_fee(
        &mut self,
        manager: &PoolManagerCap,
        new_fee_bps: BasisPoints,
        min_version: Version,
    ) -> Result<FeeUpdated> {
        assert_supported(self.version, min_version)?;
        verify_manager(manager, self.id, self.manager_cap_id)?;
        new_fee_bps.validate()?;

        let old_fee_bps = self.fee_bps;
        self.fee_bps = new_fee_bps;

        Ok(FeeUpdated {
            pool_id: self.id,
            old_fee_bps,
            new_fee_bps,
        })
    }

    /// Freezes the pool. Admin-gated, idempotent.
    ///
    /// Freezing an already-frozen pool is a successful no-op, not an
    /// error. While frozen, swaps and liquidity changes fail with
    /// [`PoolError::PoolFrozen`]; fee administration and migration stay
    /// available so an incident can be resolved without thawing.
    ///
    /// # Errors
    ///
    /// [`PoolError::UnsupportedVersion`] from the version guard.
    pub fn freeze(&mut self, _admin: &AdminCap, min_version: Version) -> Result<PoolFrozen> {
        assert_supported(self.version, min_version)?;
        self.frozen = true;
        Ok(PoolFrozen { pool_id: self.id })
    }

    /// Unfreezes the pool. Admin-gated, idempotent.
    ///
    /// # Errors
    ///
    /// [`PoolError::UnsupportedVersion`] from the version guard.
    pub fn unfreeze(&mut self, _admin: &AdminCap, min_version: Version) -> Result<PoolUnfrozen> {
        assert_supported(self.version, min_version)?;
        self.frozen = false;
        Ok(PoolUnfrozen { pool_id: self.id })
    }

    /// Drains both fee treasuries to the manager.
    ///
    /// Succeeds with zero amounts when nothing has accrued — an empty
    /// treasury is not an error.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedVersion`] from the version guard.
    /// - [`PoolError::CapabilityMismatch`] / [`PoolError::InvalidCapability`]
    ///   from capability verification.
    pub fn withdraw_fees(
        &mut self,
        manager: &PoolManagerCap,
        min_version: Version,
    ) -> Result<FeesWithdrawn> {
        assert_supported(self.version, min_version)?;
        verify_manager(manager, self.id, self.manager_cap_id)?;

        let amount_a = self.fee_treasury_a;
        let amount_b = self.fee_treasury_b;
        self.fee_treasury_a = Amount::ZERO;
        self.fee_treasury_b = Amount::ZERO;

        Ok(FeesWithdrawn {
            pool_id: self.id,
            amount_a,
            amount_b,
        })
    }

    /// Replaces the authoritative manager capability. Admin-gated.
    ///
    /// The registry mints a fresh capability bound to this pool and the
    /// pool records its identifier, which invalidates the superseded
    /// handle everywhere at once.
    ///
    /// # Errors
    ///
    /// - [`PoolError::UnsupportedVersion`] from the version guard.
    /// - [`PoolError::InvalidCapability`] if the registry has no record
    ///   of a manager capability for this pool.
    pub fn rotate_manager_cap(
        &mut self,
        registry: &mut CapabilityRegistry,
        admin: &AdminCap,
        min_version: Version,
    ) -> Result<(PoolManagerCap, ManagerCapRotated)> {
        assert_supported(self.version, min_version)?;

        let new_cap = registry.reissue_manager_cap(admin, self.id)?;
        let old_cap = self.manager_cap_id;
        self.manager_cap_id = new_cap.id();

        let rotated = ManagerCapRotated {
            pool_id: self.id,
            old_cap,
            new_cap: new_cap.id(),
        };
        Ok((new_cap, rotated))
    }

    /// Raises the pool's schema version. Admin-gated.
    ///
    /// Callers that declared a stale `min_version` keep working after a
    /// migration; callers requiring a newer version than the pool holds
    /// are rejected until the migration lands.
    ///
    /// # Errors
    ///
    /// [`PoolError::NonMonotonicVersion`] when `new_version` does not
    /// strictly exceed the current version.
    pub fn migrate(&mut self, _admin: &AdminCap, new_version: Version) -> Result<VersionMigrated> {
        if new_version <= self.version {
            return Err(PoolError::NonMonotonicVersion);
        }
        let old_version = self.version;
        self.version = new_version;

        Ok(VersionMigrated {
            pool_id: self.id,
            old_version,
            new_version,
        })
    }

    // -- Accessors ----------------------------------------------------------

    /// Returns the pool's immutable identifier.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Returns the tradable reserve of asset A (fees excluded).
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the tradable reserve of asset B (fees excluded).
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the current fee rate.
    #[must_use]
    pub const fn fee_bps(&self) -> BasisPoints {
        self.fee_bps
    }

    /// Returns accumulated, unwithdrawn fees in asset A.
    pub const fn fee_treasury_a(&self) -> Amount {
        self.fee_treasury_a
    }

    /// Returns accumulated, unwithdrawn fees in asset B.
    pub const fn fee_treasury_b(&self) -> Amount {
        self.fee_treasury_b
    }

    /// Returns `true` while the pool is frozen.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns the pool's current schema version.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Returns the identifier of the authoritative manager capability.
    #[must_use]
    pub const fn manager_cap_id(&self) -> CapabilityId {
        self.manager_cap_id
    }

    /// Returns the outstanding LP shares.
    #[must_use]
    pub const fn total_shares(&self) -> Liquidity {
        self.total_shares
    }

    /// Returns the invariant `reserve_a × reserve_b`, or `None` if the
    /// product exceeds `u128`.
    #[must_use]
    pub const fn constant_product(&self) -> Option<Amount> {
        self.reserve_a.checked_mul(&self.reserve_b)
    }

    const fn oriented_reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    const fn treasury_for(&self, direction: SwapDirection) -> Amount {
        match direction {
            SwapDirection::AToB => self.fee_treasury_a,
            SwapDirection::BToA => self.fee_treasury_b,
        }
    }
}
