//! Rule for the shares minted by the first deposit into an empty pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Shares};
use crate::error::{AmmError, Result};
use crate::math::sqrt_product;

/// How many shares the bootstrapping deposit receives.
///
/// Subsequent deposits always mint proportionally to the existing supply,
/// so this choice only fixes the unit in which shares are denominated.
///
/// # Serialization
///
/// Internally tagged on `rule`:
///
/// ```json
/// { "rule": "scaled_base", "multiplier": 1 }
/// { "rule": "geometric_mean" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum BootstrapPolicy {
    /// `shares = base_in × multiplier`.
    ///
    /// A multiplier of `1` mints exactly the base-asset amount deposited.
    ScaledBase {
        /// Factor applied to the base deposit.  Must be non-zero.
        multiplier: u64,
    },
    /// `shares = ⌊√(base_in × token_in)⌋`, independent of which asset is
    /// called "base".
    GeometricMean,
}

impl BootstrapPolicy {
    /// One share per base unit deposited.
    pub const BASE_UNITS: Self = Self::ScaledBase { multiplier: 1 };

    /// Checks the policy parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] for a zero multiplier.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::ScaledBase { multiplier: 0 } => Err(AmmError::InvalidConfiguration(
                "bootstrap multiplier must be non-zero".to_string(),
            )),
            Self::ScaledBase { .. } | Self::GeometricMean => Ok(()),
        }
    }

    /// Shares minted for the first deposit of `base_in` and `token_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the policy is invalid.
    /// - [`AmmError::Overflow`] if the scaled base exceeds `u128`.
    pub fn initial_shares(&self, base_in: Amount, token_in: Amount) -> Result<Shares> {
        self.validate()?;
        match *self {
            Self::ScaledBase { multiplier } => base_in
                .get()
                .checked_mul(u128::from(multiplier))
                .map(Shares::new)
                .ok_or(AmmError::Overflow("bootstrap share amount")),
            Self::GeometricMean => Ok(Shares::new(sqrt_product(base_in.get(), token_in.get()))),
        }
    }
}

impl Default for BootstrapPolicy {
    fn default() -> Self {
        Self::BASE_UNITS
    }
}
