//! Capability issuance and verification.
//!
//! Authorization in this engine is possession-based: an operation is
//! gated not by who the caller claims to be but by whether they can
//! present an unforgeable capability value. [`CapabilityRegistry`] is
//! the only mint; [`AdminCap`] and [`PoolManagerCap`] are the two
//! capability kinds; [`verify_manager`] is the pure check every
//! manager-gated pool operation runs before mutating anything.

mod capability;
mod registry;

pub use capability::{AdminCap, PoolManagerCap};
pub use registry::{verify_manager, CapabilityRegistry};
