//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds share-based liquidity provision on top of the
//! swap functionality provided by [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! The total share supply **only** changes through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`].
//! Swaps move reserves but never mint or burn.  At every point:
//!
//! ```text
//! total_shares = Σ share_balance(holder)   for all holders
//! ```
//!
//! # Proportionality
//!
//! Deposits and withdrawals keep `base_reserve / token_reserve` unchanged
//! up to the truncation of the operation itself.  Only swaps move the
//! price.

use super::SwapPool;
use crate::domain::{AddLiquidityOutcome, Amount, HolderId, RemoveLiquidityOutcome, Shares};
use crate::error::Result;

/// Trait for pools that issue proportional claim shares.
pub trait LiquidityPool: SwapPool {
    /// Deposits `base_in` plus the matching token amount, capped at
    /// `token_max`, and credits the minted shares to `provider`.
    ///
    /// On an empty pool the deposit is taken verbatim as
    /// `(base_in, token_max)` and fixes the initial price.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `base_in` is zero, if the first deposit has
    ///   no token side, or if the deposit is too small to mint a share.
    /// - `SlippageExceeded` if the required token amount exceeds
    ///   `token_max`.
    /// - `Overflow` if a reserve or the share supply would exceed `u128`.
    fn add_liquidity(
        &mut self,
        provider: &HolderId,
        base_in: Amount,
        token_max: Amount,
    ) -> Result<AddLiquidityOutcome>;

    /// Burns `shares` held by `holder` and releases the proportional part
    /// of both reserves.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `shares` is zero.
    /// - `EmptyPool` if no shares are outstanding.
    /// - `InsufficientBalance` if `holder` owns fewer than `shares`.
    fn remove_liquidity(
        &mut self,
        holder: &HolderId,
        shares: Shares,
    ) -> Result<RemoveLiquidityOutcome>;

    /// Returns the outstanding share supply.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Returns `holder`'s share balance; zero for unknown holders.
    #[must_use]
    fn share_balance(&self, holder: &HolderId) -> Shares;
}
