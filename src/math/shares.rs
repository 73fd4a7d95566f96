//! LP-share mint and burn math.
//!
//! Genesis shares are `⌊√(reserve_a × reserve_b)⌋`; later deposits mint
//! `min(Δa·L/Ra, Δb·L/Rb)` and withdrawals pay out pro rata. Everything
//! floors, so share value per unit of liquidity can only drift upward.

use crate::domain::{Amount, Liquidity};
use crate::error::{PoolError, Result};

/// Integer square root via Newton's method.
///
/// Converges for every `u128` input; the loop strictly decreases `x`.
pub(crate) const fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// Shares minted for the initial deposit: `⌊√(a × b)⌋`.
///
/// # Errors
///
/// Returns [`PoolError::ArithmeticOverflow`] when `a × b` exceeds `u128`,
/// and [`PoolError::ZeroInitialLiquidity`] when the product is so small
/// the square root floors to zero.
pub(crate) const fn initial_shares(a: Amount, b: Amount) -> Result<Liquidity> {
    let product = match a.checked_mul(&b) {
        Some(v) => v,
        None => return Err(PoolError::ArithmeticOverflow("initial share product")),
    };
    let shares = isqrt(product.get());
    if shares == 0 {
        return Err(PoolError::ZeroInitialLiquidity);
    }
    Ok(Liquidity::new(shares))
}

/// Shares minted for a proportional deposit:
/// `min(⌊Δa·L/Ra⌋, ⌊Δb·L/Rb⌋)`.
///
/// Taking the minimum means a lopsided deposit donates its excess to the
/// pool rather than minting unearned shares.
///
/// # Errors
///
/// - [`PoolError::ArithmeticOverflow`] on intermediate multiplication.
/// - [`PoolError::DivisionByZero`] if either reserve is zero (unreachable
///   while pool invariants hold).
pub(crate) fn shares_for_deposit(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Liquidity,
) -> Result<Liquidity> {
    let share_a = proportional(amount_a, total.get(), reserve_a)?;
    let share_b = proportional(amount_b, total.get(), reserve_b)?;
    Ok(Liquidity::new(share_a.min(share_b)))
}

/// Amounts paid out for burning `shares`: `(⌊s·Ra/L⌋, ⌊s·Rb/L⌋)`.
///
/// # Errors
///
/// - [`PoolError::ArithmeticOverflow`] on intermediate multiplication.
/// - [`PoolError::DivisionByZero`] if `total` is zero.
pub(crate) fn amounts_for_withdrawal(
    shares: Liquidity,
    total: Liquidity,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount)> {
    let out_a = proportional(reserve_a, shares.get(), Amount::new(total.get()))?;
    let out_b = proportional(reserve_b, shares.get(), Amount::new(total.get()))?;
    Ok((Amount::new(out_a), Amount::new(out_b)))
}

/// `⌊value × factor / divisor⌋` with checked intermediates.
fn proportional(value: Amount, factor: u128, divisor: Amount) -> Result<u128> {
    let numerator = value
        .checked_mul(&Amount::new(factor))
        .ok_or(PoolError::ArithmeticOverflow("share proportion numerator"))?;
    let quotient = numerator
        .checked_div(&divisor)
        .ok_or(PoolError::DivisionByZero)?;
    Ok(quotient.get())
}
