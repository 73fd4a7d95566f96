//! Convenience re-exports for common types.
//!
//! A single import brings the whole working surface into scope:
//!
//! ```rust
//! use cerberus_amm::prelude::*;
//! ```

pub use crate::auth::{AdminCap, CapabilityRegistry, PoolManagerCap};
pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, BasisPoints, CapabilityId, Liquidity, PoolId, SwapDirection, Version,
};
pub use crate::error::{PoolError, Result};
pub use crate::pool::{Pool, PoolEvent};
