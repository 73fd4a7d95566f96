//! Basis-point fee rates.

use core::fmt;

use super::Amount;
use crate::error::{PoolError, Result};

/// Maximum value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Any `u32` can be constructed, but the pool only accepts rates in
/// `0..=10_000`; [`validate`](Self::validate) enforces the range at the
/// configuration and fee-update boundaries. A rate of exactly 10 000 bp
/// is legal: it consumes the whole input as fee, which makes every swap
/// fail with insufficient liquidity rather than being rejected up front.
///
/// # Examples
///
/// ```
/// use cerberus_amm::domain::{Amount, BasisPoints};
///
/// let fee = BasisPoints::new(30); // 0.30%
/// assert_eq!(fee.fee_amount(Amount::new(100_000)), Ok(Amount::new(300)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `Ok` when the rate is in the valid range `0..=10_000`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidFeeBps`] above 10 000 bp.
    pub const fn validate(&self) -> Result<()> {
        if self.0 > MAX_BPS {
            return Err(PoolError::InvalidFeeBps);
        }
        Ok(())
    }

    /// Computes `floor(amount * self / 10_000)`.
    ///
    /// Ties round down, so the fee never exceeds the exact proportional
    /// share of the input. The exact flooring matters: conservation tests
    /// assert `fee + net_input == input` on the same integers.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticOverflow`] if the intermediate
    /// multiplication exceeds `u128`.
    pub const fn fee_amount(&self, amount: Amount) -> Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(PoolError::ArithmeticOverflow("fee multiplication")),
        };
        Ok(Amount::new(product / MAX_BPS as u128))
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
