//! Swap direction across the two pooled assets.

use core::fmt;

/// Which asset is being sold into the pool.
///
/// A pool holds exactly two assets, conventionally called A and B.
/// `AToB` sells asset A and receives asset B; `BToA` the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwapDirection {
    /// Sell asset A, receive asset B.
    AToB,
    /// Sell asset B, receive asset A.
    BToA,
}

impl SwapDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A→B"),
            Self::BToA => write!(f, "B→A"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn reversed_flips() {
        assert_eq!(SwapDirection::AToB.reversed(), SwapDirection::BToA);
        assert_eq!(SwapDirection::BToA.reversed(), SwapDirection::AToB);
    }
}
