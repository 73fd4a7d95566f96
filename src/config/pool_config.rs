//! Validated pool creation parameters.

use crate::domain::{Amount, BasisPoints};
use crate::error::{PoolError, Result};

/// Creation parameters for a capability-gated constant-product pool.
///
/// Pools are created atomically from an initial deposit of both assets,
/// so a pool is never observable in an empty state.
///
/// # Validation
///
/// - Both initial deposits must be non-zero, and large enough that the
///   genesis share count `⌊√(a × b)⌋` is non-zero.
/// - The fee rate must be within `0..=10_000` basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    initial_a: Amount,
    initial_b: Amount,
    fee_bps: BasisPoints,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::ZeroInitialLiquidity`] if either deposit is zero.
    /// - [`PoolError::InvalidFeeBps`] if `fee_bps` exceeds 10 000.
    ///
    /// # Examples
    ///
    /// ```
    /// use cerberus_amm::config::PoolConfig;
    /// use cerberus_amm::domain::{Amount, BasisPoints};
    ///
    /// let cfg = PoolConfig::new(
    ///     Amount::new(1_000_000),
    ///     Amount::new(2_000_000),
    ///     BasisPoints::new(30),
    /// );
    /// assert!(cfg.is_ok());
    /// ```
    pub const fn new(initial_a: Amount, initial_b: Amount, fee_bps: BasisPoints) -> Result<Self> {
        let config = Self {
            initial_a,
            initial_b,
            fee_bps,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// See [`PoolConfig::new`].
    pub const fn validate(&self) -> Result<()> {
        if self.initial_a.is_zero() || self.initial_b.is_zero() {
            return Err(PoolError::ZeroInitialLiquidity);
        }
        match self.fee_bps.validate() {
            Ok(()) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Returns the initial deposit of asset A.
    pub const fn initial_a(&self) -> Amount {
        self.initial_a
    }

    /// Returns the initial deposit of asset B.
    pub const fn initial_b(&self) -> Amount {
        self.initial_b
    }

    /// Returns the fee rate.
    #[must_use]
    pub const fn fee_bps(&self) -> BasisPoints {
        self.fee_bps
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let cfg = PoolConfig::new(
            Amount::new(1_000),
            Amount::new(2_000),
            BasisPoints::new(30),
        );
        assert!(cfg.is_ok());
    }

    #[test]
    fn zero_deposit_a_rejected() {
        let cfg = PoolConfig::new(Amount::ZERO, Amount::new(1_000), BasisPoints::new(30));
        assert_eq!(cfg.map(|c| c.fee_bps()), Err(PoolError::ZeroInitialLiquidity));
    }

    #[test]
    fn zero_deposit_b_rejected() {
        let cfg = PoolConfig::new(Amount::new(1_000), Amount::ZERO, BasisPoints::new(30));
        assert_eq!(cfg.map(|c| c.fee_bps()), Err(PoolError::ZeroInitialLiquidity));
    }

    #[test]
    fn excessive_fee_rejected() {
        let cfg = PoolConfig::new(
            Amount::new(1_000),
            Amount::new(2_000),
            BasisPoints::new(10_001),
        );
        assert_eq!(cfg.map(|c| c.fee_bps()), Err(PoolError::InvalidFeeBps));
    }

    #[test]
    fn hundred_percent_fee_is_accepted() {
        // A 100% fee is a valid configuration; every swap against it
        // fails with insufficient liquidity, which is the documented
        // behaviour, not a construction error.
        let cfg = PoolConfig::new(
            Amount::new(1_000),
            Amount::new(2_000),
            BasisPoints::MAX_PERCENT,
        );
        assert!(cfg.is_ok());
    }

    #[test]
    fn accessors() {
        let Ok(cfg) = PoolConfig::new(
            Amount::new(100),
            Amount::new(200),
            BasisPoints::new(30),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.initial_a(), Amount::new(100));
        assert_eq!(cfg.initial_b(), Amount::new(200));
        assert_eq!(cfg.fee_bps(), BasisPoints::new(30));
    }
}
