//! The pool aggregate and its audit event records.
//!
//! [`Pool`] composes the three leaf concerns — version guard, capability
//! verification, and integer pricing math — into the atomic operations
//! of the engine. Each successful operation returns the event record
//! describing what it committed.

mod constant_product;
mod event;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::Pool;
pub use event::{
    FeeUpdated, FeesWithdrawn, LiquidityAdded, LiquidityRemoved, ManagerCapRotated, PoolCreated,
    PoolEvent, PoolFrozen, PoolUnfrozen, SwapExecuted, VersionMigrated,
};
