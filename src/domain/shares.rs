//! LP share quantities.

use core::fmt;

/// A quantity of liquidity-provider shares.
///
/// Shares are a claim on a proportional slice of **both** reserves, so
/// they are kept distinct from [`Amount`](super::Amount) at the type
/// level: a share count can never be added to a reserve by accident.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::Shares;
///
/// let minted = Shares::new(5);
/// let supply = Shares::new(50);
/// assert_eq!(supply.checked_add(&minted), Some(Shares::new(55)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw `u128`.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.  Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.  Returns `None` if `other > self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_default() {
        assert!(Shares::ZERO.is_zero());
        assert_eq!(Shares::default(), Shares::ZERO);
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(Shares::new(u128::MAX).checked_add(&Shares::new(1)), None);
    }

    #[test]
    fn checked_sub_underflow() {
        assert_eq!(Shares::new(4).checked_sub(&Shares::new(5)), None);
        assert_eq!(Shares::new(5).checked_sub(&Shares::new(5)), Some(Shares::ZERO));
    }

    #[test]
    fn display() {
        assert_eq!(Shares::new(1_000).to_string(), "1000");
    }
}
