//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::Result;
use crate::math::mul_div;

/// Denominator that represents 100 %.
pub(crate) const BPS_DENOMINATOR: u128 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01 %, 10 000 bp = 100 %).
///
/// Every `u16` is representable; [`is_valid_percent`](Self::is_valid_percent)
/// tells whether the value lies in `0..=10_000`.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.apply(Amount::new(10_000), Rounding::Up).ok(), Some(Amount::new(30)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// 0 %.
    pub const ZERO: Self = Self(0);

    /// 100 %.
    pub const MAX_PERCENT: Self = Self(10_000);

    /// Wraps a raw basis-point count.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the raw basis-point count.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `true` if the value is within `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 as u128 <= BPS_DENOMINATOR
    }

    /// Returns `10_000 − self`, the share of an amount that is kept.
    ///
    /// Saturates at zero for values above 100 %.
    #[must_use]
    pub const fn complement(&self) -> u128 {
        BPS_DENOMINATOR.saturating_sub(self.0 as u128)
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// The product is formed in 256-bit arithmetic, so any `amount` is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
    /// result exceeds `u128` (only possible above 100 %).
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(amount.get(), u128::from(self.0), BPS_DENOMINATOR, rounding).map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
