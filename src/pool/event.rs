//! In-memory audit records emitted by pool operations.
//!
//! The engine has no transport of its own: every successful mutating
//! operation returns the record describing what it did, and the host
//! decides whether to serialize it to a log, a bus, or nowhere. With the
//! `serde` feature enabled all records derive `Serialize`/`Deserialize`.

use crate::domain::{
    Amount, BasisPoints, CapabilityId, Liquidity, PoolId, SwapDirection, Version,
};

/// A pool was created from an initial deposit of both assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolCreated {
    pub pool_id: PoolId,
    pub reserve_a: Amount,
    pub reserve_b: Amount,
    pub fee_bps: BasisPoints,
    pub manager_cap: CapabilityId,
    pub initial_shares: Liquidity,
}

/// A swap committed: fee collected, reserves rebalanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapExecuted {
    pub pool_id: PoolId,
    pub direction: SwapDirection,
    pub amount_in: Amount,
    pub amount_out: Amount,
    pub fee: Amount,
}

/// The pool's fee rate was changed by its manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeUpdated {
    pub pool_id: PoolId,
    pub old_fee_bps: BasisPoints,
    pub new_fee_bps: BasisPoints,
}

/// The pool was frozen by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolFrozen {
    pub pool_id: PoolId,
}

/// The pool was unfrozen by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolUnfrozen {
    pub pool_id: PoolId,
}

/// Both fee treasuries were drained to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeesWithdrawn {
    pub pool_id: PoolId,
    pub amount_a: Amount,
    pub amount_b: Amount,
}

/// The pool's schema version was raised by the admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionMigrated {
    pub pool_id: PoolId,
    pub old_version: Version,
    pub new_version: Version,
}

/// Liquidity was deposited and LP shares minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityAdded {
    pub pool_id: PoolId,
    pub amount_a: Amount,
    pub amount_b: Amount,
    pub minted: Liquidity,
}

/// LP shares were burned and both assets paid out pro rata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiquidityRemoved {
    pub pool_id: PoolId,
    pub shares_burned: Liquidity,
    pub amount_a: Amount,
    pub amount_b: Amount,
}

/// The authoritative manager capability was replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManagerCapRotated {
    pub pool_id: PoolId,
    pub old_cap: CapabilityId,
    pub new_cap: CapabilityId,
}

/// Uniform event stream over every record the engine can emit.
///
/// Operations return their specific record type; hosts that forward a
/// single stream downstream can lift any record into `PoolEvent` via
/// `From`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    Created(PoolCreated),
    Swap(SwapExecuted),
    FeeUpdated(FeeUpdated),
    Frozen(PoolFrozen),
    Unfrozen(PoolUnfrozen),
    FeesWithdrawn(FeesWithdrawn),
    Migrated(VersionMigrated),
    LiquidityAdded(LiquidityAdded),
    LiquidityRemoved(LiquidityRemoved),
    ManagerRotated(ManagerCapRotated),
}

macro_rules! impl_from_event {
    ($($record:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$record> for PoolEvent {
                fn from(record: $record) -> Self {
                    Self::$variant(record)
                }
            }
        )*
    };
}

impl_from_event! {
    PoolCreated => Created,
    SwapExecuted => Swap,
    FeeUpdated => FeeUpdated,
    PoolFrozen => Frozen,
    PoolUnfrozen => Unfrozen,
    FeesWithdrawn => FeesWithdrawn,
    VersionMigrated => Migrated,
    LiquidityAdded => LiquidityAdded,
    LiquidityRemoved => LiquidityRemoved,
    ManagerCapRotated => ManagerRotated,
}
