//! Integer-only pricing and share math.
//!
//! Everything here is pure and bounded-time: constant-product output
//! pricing and LP-share mint/burn arithmetic. All intermediates are
//! checked `u128` operations, all divisions floor, and no floating point
//! is used anywhere.

mod constant_product;
mod shares;

pub use constant_product::constant_product_output;
pub(crate) use shares::{amounts_for_withdrawal, initial_shares, shares_for_deposit};
