//! Core swap trait for executing swaps and querying pool state.
//!
//! [`SwapPool`] covers the full lifecycle of a trade:
//!
//! 1. **Quote**: [`SwapPool::quote_swap`] prices a trade without touching
//!    state.
//! 2. **Execute**: [`SwapPool::swap`] commits the trade, guarded by the
//!    caller's minimum output.
//! 3. **Inspect**: [`SwapPool::asset_pair`], [`SwapPool::fee_tier`] and
//!    [`SwapPool::reserves`].
//!
//! # Fee Retention
//!
//! The fee is priced out of the input before the curve is applied, but
//! the **full** input is credited to the input reserve:
//!
//! ```text
//! amount_out  = curve(amount_in × (1 − fee))
//! reserve_in  += amount_in
//! reserve_out -= amount_out
//! ```
//!
//! so the retained fee accrues to every share holder.

use crate::domain::{Amount, AssetPair, FeeTier, HolderId, Reserves, SwapDirection, SwapOutcome};
use crate::error::Result;

/// Trait for pools that exchange one asset for the other.
///
/// # Errors
///
/// Common error variants:
///
/// - [`AmmError::EmptyPool`](crate::error::AmmError::EmptyPool): a reserve is zero
/// - [`AmmError::SlippageExceeded`](crate::error::AmmError::SlippageExceeded):
///   output below the caller's bound
/// - [`AmmError::Overflow`](crate::error::AmmError::Overflow): the input reserve
///   would exceed `u128`
pub trait SwapPool {
    /// Sells `amount_in` of the input side selected by `direction`.
    ///
    /// The transition is atomic: on `Err` the reserves are unchanged.
    ///
    /// # Arguments
    ///
    /// - `trader`: who sends the input; used for tracing only, since the
    ///   asset transfer itself is settled outside the pool.
    /// - `amount_in`: input quantity, already escrowed by the caller.
    /// - `direction`: which reserve receives the input.
    /// - `min_amount_out`: the smallest acceptable output.
    ///
    /// # Errors
    ///
    /// - `EmptyPool` if either reserve is zero.
    /// - `InvalidQuantity` if `amount_in` is zero or the output rounds to
    ///   zero.
    /// - `SlippageExceeded` if the output is below `min_amount_out`.
    /// - `Overflow` if the input reserve would exceed `u128`.
    fn swap(
        &mut self,
        trader: &HolderId,
        amount_in: Amount,
        direction: SwapDirection,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome>;

    /// Output that [`swap`](Self::swap) would produce right now.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap), minus the slippage check.
    fn quote_swap(&self, amount_in: Amount, direction: SwapDirection) -> Result<Amount>;

    /// Returns the asset pair backing the two reserves.
    #[must_use]
    fn asset_pair(&self) -> &AssetPair;

    /// Returns the swap fee, constant for the pool's lifetime.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;

    /// Returns the current reserves.
    #[must_use]
    fn reserves(&self) -> Reserves;
}
