//! Fundamental domain value types used throughout the engine.
//!
//! All quantities are validated newtypes over plain integers: asset
//! amounts, basis-point fee rates, LP shares, schema versions, and the
//! opaque identifiers that bind capabilities to pools. No floating point
//! appears anywhere in the crate.

mod amount;
mod basis_points;
mod direction;
mod id;
mod liquidity;
mod version;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use direction::SwapDirection;
pub use id::{CapabilityId, PoolId};
pub use liquidity::Liquidity;
pub use version::{assert_supported, Version};
