//! Configuration for a constant-product exchange pool.

use serde::{Deserialize, Serialize};

use super::BootstrapPolicy;
use crate::domain::{AssetPair, FeeTier};
use crate::error::{AmmError, Result};

/// Immutable parameters of a [`ConstantProductPool`](crate::pools::ConstantProductPool).
///
/// A pool always starts empty; there are no initial reserves to
/// configure.  The first deposit sets the price and is handled by the
/// [`BootstrapPolicy`].
///
/// # Defaults
///
/// Omitted fields deserialize to a zero fee and
/// [`BootstrapPolicy::BASE_UNITS`].
///
/// # Validation
///
/// - The two assets must be distinct.
/// - The fee must be strictly below 100 %.
/// - A `ScaledBase` bootstrap multiplier must be non-zero.
///
/// # Examples
///
/// ```
/// use lp_exchange::config::PoolConfig;
///
/// let cfg = PoolConfig::from_json(r#"{ "pair": { "base": "ETH", "token": "ZD618" } }"#)
///     .expect("valid config");
/// assert!(cfg.fee_tier().is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    pair: AssetPair,
    #[serde(default)]
    fee_tier: FeeTier,
    #[serde(default)]
    bootstrap: BootstrapPolicy,
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(pair: AssetPair, fee_tier: FeeTier, bootstrap: BootstrapPolicy) -> Result<Self> {
        let config = Self {
            pair,
            fee_tier,
            bootstrap,
        };
        config.validate()?;
        Ok(config)
    }

    /// Zero-fee configuration with the default bootstrap rule.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if the pair is degenerate.
    pub fn with_pair(pair: AssetPair) -> Result<Self> {
        Self::new(pair, FeeTier::ZERO, BootstrapPolicy::default())
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the document is malformed.
    /// - Any error from [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AmmError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AmmError::InvalidConfiguration(e.to_string()))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if both sides of the pair are equal.
    /// - [`AmmError::InvalidFee`] if the fee is 100 % or more.
    /// - [`AmmError::InvalidConfiguration`] for a zero bootstrap multiplier.
    pub fn validate(&self) -> Result<()> {
        self.pair.validate()?;
        self.fee_tier.validate()?;
        self.bootstrap.validate()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn asset_pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the bootstrap rule.
    #[must_use]
    pub const fn bootstrap(&self) -> BootstrapPolicy {
        self.bootstrap
    }
}
