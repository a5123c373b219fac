//! Construction trait for building a pool from its configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction, so a successfully built pool is always in a valid
//! initial state:
//!
//! - the asset pair has two distinct identifiers
//! - the fee is strictly below 100 %
//! - the bootstrap rule is usable
//!
//! There is no blanket `impl<T> FromConfig<T>`; every pool-config pairing
//! is written out explicitly.

use crate::error::Result;

/// Builds `Self` from a configuration of type `C`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`](crate::error::AmmError::InvalidConfiguration)
/// (or a more specific variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new pool from `config`.
    ///
    /// The configuration is taken by reference so it can be reused, for
    /// instance to build several identical pools.
    ///
    /// # Errors
    ///
    /// - `InvalidAsset` if the pair is degenerate.
    /// - `InvalidFee` if the fee is unsupported.
    /// - `InvalidConfiguration` for any other invalid parameter.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
