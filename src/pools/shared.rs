//! Thread-safe handle around a [`ConstantProductPool`].

use std::sync::Arc;

use parking_lot::RwLock;

use super::ConstantProductPool;
use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidityOutcome, Amount, HolderId, PoolSnapshot, PoolState, RemoveLiquidityOutcome, Shares,
    SwapDirection, SwapOutcome,
};
use crate::error::Result;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A cloneable, shareable pool.
///
/// Every transition holds the write lock for its whole check-then-commit
/// span, so transitions are serialized.  Readers take the read lock and
/// receive owned values: a [`PoolSnapshot`] always pairs the reserves with
/// the supply of the same moment.
///
/// Clones share the same pool.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use lp_exchange::config::PoolConfig;
/// use lp_exchange::domain::{Amount, AssetId, AssetPair, HolderId, SwapDirection};
/// use lp_exchange::pools::SharedPool;
/// use lp_exchange::traits::FromConfig;
///
/// let pair = AssetPair::new(AssetId::new("ETH").expect("id"), AssetId::new("ZD").expect("id"))
///     .expect("pair");
/// let pool = SharedPool::from_config(&PoolConfig::with_pair(pair).expect("cfg")).expect("pool");
/// let lp = HolderId::new("lp").expect("id");
/// pool.add_liquidity(&lp, Amount::new(10_000), Amount::new(10_000)).expect("seed");
///
/// let worker = pool.clone();
/// thread::spawn(move || {
///     let t = HolderId::new("t").expect("id");
///     worker.swap(&t, Amount::new(100), SwapDirection::BaseToToken, Amount::ZERO)
/// })
/// .join()
/// .expect("thread")
/// .expect("swap");
///
/// assert_eq!(pool.snapshot().reserves.base, Amount::new(10_100));
/// ```
#[derive(Debug, Clone)]
pub struct SharedPool {
    inner: Arc<RwLock<ConstantProductPool>>,
}

impl SharedPool {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: ConstantProductPool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(pool)),
        }
    }

    /// See [`LiquidityPool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as the wrapped pool; state is unchanged on `Err`.
    pub fn add_liquidity(
        &self,
        provider: &HolderId,
        base_in: Amount,
        token_max: Amount,
    ) -> Result<AddLiquidityOutcome> {
        self.inner.write().add_liquidity(provider, base_in, token_max)
    }

    /// See [`LiquidityPool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as the wrapped pool; state is unchanged on `Err`.
    pub fn remove_liquidity(
        &self,
        holder: &HolderId,
        shares: Shares,
    ) -> Result<RemoveLiquidityOutcome> {
        self.inner.write().remove_liquidity(holder, shares)
    }

    /// See [`SwapPool::swap`].
    ///
    /// # Errors
    ///
    /// Same as the wrapped pool; state is unchanged on `Err`.
    pub fn swap(
        &self,
        trader: &HolderId,
        amount_in: Amount,
        direction: SwapDirection,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        self.inner
            .write()
            .swap(trader, amount_in, direction, min_amount_out)
    }

    /// See [`SwapPool::quote_swap`].
    ///
    /// # Errors
    ///
    /// Same as the wrapped pool.
    pub fn quote_swap(&self, amount_in: Amount, direction: SwapDirection) -> Result<Amount> {
        self.inner.read().quote_swap(amount_in, direction)
    }

    /// Consistent copy of reserves, supply and fee counters.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        self.inner.read().snapshot()
    }

    /// Share balance of `holder`.
    #[must_use]
    pub fn share_balance(&self, holder: &HolderId) -> Shares {
        self.inner.read().share_balance(holder)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PoolState {
        self.inner.read().state()
    }

    /// Runs `f` against the pool under a single read lock.
    ///
    /// Use this when several values must come from the same point in
    /// time, e.g. a quote together with the reserves it was priced on.
    pub fn read<R>(&self, f: impl FnOnce(&ConstantProductPool) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<ConstantProductPool> for SharedPool {
    fn from(pool: ConstantProductPool) -> Self {
        Self::new(pool)
    }
}

impl FromConfig<PoolConfig> for SharedPool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        ConstantProductPool::from_config(config).map(Self::new)
    }
}
