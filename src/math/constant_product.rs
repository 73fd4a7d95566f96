//! Constant-product pricing (`x · y = k`).
//!
//! The output formula is applied to the *post-fee* input; the fee itself
//! is computed by [`BasisPoints::fee_amount`](crate::domain::BasisPoints)
//! and never passes through here. Every division floors, so rounding
//! error always accrues to the pool and the invariant
//! `k_after ≥ k_before` holds for any committed swap.

use crate::domain::Amount;
use crate::error::{PoolError, Result};

/// Computes `floor(amount_in * reserve_out / (reserve_in + amount_in))`.
///
/// # Errors
///
/// - [`PoolError::ArithmeticOverflow`] when the numerator multiplication
///   or the denominator addition exceeds `u128`.
/// - [`PoolError::DivisionByZero`] when `reserve_in + amount_in == 0`.
///   Unreachable while pool reserves stay positive, but checked anyway.
///
/// # Examples
///
/// ```
/// use cerberus_amm::domain::Amount;
/// use cerberus_amm::math::constant_product_output;
///
/// let out = constant_product_output(
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     Amount::new(99_700),
/// );
/// assert_eq!(out, Ok(Amount::new(181_322)));
/// ```
pub const fn constant_product_output(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
) -> Result<Amount> {
    let denominator = match reserve_in.checked_add(&amount_in) {
        Some(v) => v,
        None => return Err(PoolError::ArithmeticOverflow("output denominator")),
    };
    if denominator.is_zero() {
        return Err(PoolError::DivisionByZero);
    }

    let numerator = match amount_in.checked_mul(&reserve_out) {
        Some(v) => v,
        None => return Err(PoolError::ArithmeticOverflow("output numerator")),
    };

    match numerator.checked_div(&denominator) {
        Some(v) => Ok(v),
        None => Err(PoolError::DivisionByZero),
    }
}
