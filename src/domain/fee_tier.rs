//! Swap fee retained by the pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Rounding};
use crate::error::{AmmError, Result};

/// The share of every swap input that stays in the pool.
///
/// The fee is never paid out separately: it is simply not priced into the
/// output, so it remains in the input-side reserve and accrues to all
/// share holders.  A fee of 100 % or more would make every swap output
/// zero and is rejected by [`validate`](Self::validate).
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::FeeTier;
///
/// assert_eq!(FeeTier::ZERO.basis_points().get(), 0);
/// assert_eq!(FeeTier::TIER_0_30_PERCENT.basis_points().get(), 30);
/// assert!(FeeTier::TIER_1_00_PERCENT.validate().is_ok());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// Fee-less swaps: the pure constant-product curve.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.30 % (Uniswap v2).
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00 %, the rate of the single-pair ETH/token exchanges.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Wraps arbitrary basis points.  Call [`validate`](Self::validate)
    /// before using the tier for pricing.
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` for a fee-less tier.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.get() == 0
    }

    /// Checks that the fee is strictly below 100 %.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] otherwise.
    pub const fn validate(&self) -> Result<()> {
        if self.0.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(AmmError::InvalidFee("fee must be below 10000bp"));
        }
        Ok(())
    }

    /// Fee charged on `amount_in`, rounded up so the pool never
    /// under-reports what it kept.
    ///
    /// # Errors
    ///
    /// Propagates [`BasisPoints::apply`] failures.
    pub fn fee_on(&self, amount_in: Amount) -> Result<Amount> {
        self.0.apply(amount_in, Rounding::Up)
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert!(FeeTier::ZERO.is_zero());
        assert_eq!(FeeTier::default(), FeeTier::ZERO);
        assert_eq!(FeeTier::TIER_1_00_PERCENT.basis_points().get(), 100);
    }

    #[test]
    fn full_fee_rejected() {
        let tier = FeeTier::new(BasisPoints::MAX_PERCENT);
        assert!(matches!(tier.validate(), Err(AmmError::InvalidFee(_))));
        assert!(FeeTier::new(BasisPoints::new(9_999)).validate().is_ok());
    }

    #[test]
    fn fee_on_rounds_up() {
        let Ok(fee) = FeeTier::TIER_0_30_PERCENT.fee_on(Amount::new(100)) else {
            panic!("expected Ok");
        };
        // 100 * 30 / 10_000 = 0.3 -> 1
        assert_eq!(fee, Amount::new(1));
        let Ok(none) = FeeTier::ZERO.fee_on(Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(none, Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::TIER_0_30_PERCENT.to_string(), "FeeTier(30bp)");
    }
}
