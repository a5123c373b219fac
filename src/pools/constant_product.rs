//! Constant-product exchange pool.
//!
//! The pool holds a base-asset reserve, a token reserve and the ledger of
//! claim shares issued against them.  Pricing follows `x × y = k`:
//!
//! # Swap Algorithm (base → token)
//!
//! 1. `net = amount_in × (10 000 − fee_bps)`
//! 2. `amount_out = ⌊net × token_reserve / (base_reserve × 10 000 + net)⌋`
//! 3. `base_reserve += amount_in` (fee stays in the pool)
//! 4. `token_reserve -= amount_out`
//!
//! # Liquidity
//!
//! The first deposit into an empty pool is taken verbatim and fixes the
//! price; its share amount comes from the configured
//! [`BootstrapPolicy`].  Every later deposit is quoted in base units:
//! the token side and the minted shares are both proportional to
//! `base_in / base_reserve`.  Withdrawals release the proportional part of
//! both reserves.
//!
//! # Atomicity
//!
//! Every transition computes its complete result first and only then
//! writes.  The single fallible write (the ledger) goes first; the reserve
//! assignments after it cannot fail.  A transition that returns `Err` has
//! changed nothing.

use log::{debug, trace};

use super::ShareLedger;
use crate::config::{BootstrapPolicy, PoolConfig};
use crate::domain::{
    AddLiquidityOutcome, Amount, AssetPair, FeeTier, HolderId, PoolSnapshot, PoolState,
    RemoveLiquidityOutcome, Reserves, Shares, SwapDirection, SwapOutcome,
};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::pricing;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

/// A two-asset constant-product pool (`x · y = k`).
///
/// Created from a [`PoolConfig`] via [`FromConfig`]; a new pool is always
/// [`PoolState::Empty`].
///
/// # State
///
/// - `reserves`: base and token balances, fees included
/// - `ledger`: holder share balances and their total
/// - `accumulated_fees_*`: lifetime fee counters, informational only
///
/// # Example
///
/// ```rust
/// use lp_exchange::config::PoolConfig;
/// use lp_exchange::domain::{Amount, AssetId, AssetPair, HolderId, SwapDirection};
/// use lp_exchange::pools::ConstantProductPool;
/// use lp_exchange::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let pair = AssetPair::new(AssetId::new("ETH").expect("id"), AssetId::new("ZD618").expect("id"))
///     .expect("distinct");
/// let cfg = PoolConfig::with_pair(pair).expect("valid config");
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("pool created");
///
/// let alice = HolderId::new("alice").expect("id");
/// let add = pool
///     .add_liquidity(&alice, Amount::new(1_000), Amount::new(1_000))
///     .expect("bootstrap");
/// assert_eq!(add.shares_minted.get(), 1_000);
///
/// let out = pool
///     .swap(&alice, Amount::new(100), SwapDirection::BaseToToken, Amount::new(90))
///     .expect("swap ok");
/// assert_eq!(out.amount_out.get(), 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    pair: AssetPair,
    fee_tier: FeeTier,
    bootstrap: BootstrapPolicy,
    reserves: Reserves,
    ledger: ShareLedger,
    accumulated_fees_base: Amount,
    accumulated_fees_token: Amount,
}

/// A fully computed deposit, ready to commit.
struct AddPlan {
    outcome: AddLiquidityOutcome,
    reserves: Reserves,
}

/// A fully computed withdrawal, ready to commit.
struct RemovePlan {
    outcome: RemoveLiquidityOutcome,
    reserves: Reserves,
}

/// A fully computed swap, ready to commit.
struct SwapPlan {
    outcome: SwapOutcome,
    reserves: Reserves,
}

impl ConstantProductPool {
    /// Returns the share ledger.
    #[must_use]
    pub const fn ledger(&self) -> &ShareLedger {
        &self.ledger
    }

    /// Returns the bootstrap rule applied to the first deposit.
    #[must_use]
    pub const fn bootstrap(&self) -> BootstrapPolicy {
        self.bootstrap
    }

    /// `Empty` while no shares are outstanding, `Active` otherwise.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.ledger.total().is_zero() {
            PoolState::Empty
        } else {
            PoolState::Active
        }
    }

    /// Fees retained in the base reserve since creation.
    pub const fn accumulated_fees_base(&self) -> Amount {
        self.accumulated_fees_base
    }

    /// Fees retained in the token reserve since creation.
    pub const fn accumulated_fees_token(&self) -> Amount {
        self.accumulated_fees_token
    }

    /// Owned copy of the reserves, supply and fee counters.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserves: self.reserves,
            total_shares: self.ledger.total(),
            fee_tier: self.fee_tier,
            accumulated_fees_base: self.accumulated_fees_base,
            accumulated_fees_token: self.accumulated_fees_token,
        }
    }

    /// What [`add_liquidity`](LiquidityPool::add_liquidity) would do with
    /// these amounts right now, without doing it.
    ///
    /// On an active pool `token_in` is the amount the pool requires; a
    /// caller can pass it back as `token_max`.
    ///
    /// # Errors
    ///
    /// Same as [`add_liquidity`](LiquidityPool::add_liquidity).
    pub fn quote_add(&self, base_in: Amount, token_max: Amount) -> Result<AddLiquidityOutcome> {
        let plan = self.plan_add(base_in, token_max)?;
        trace!("quote add {base_in}/{token_max}: {}", plan.outcome);
        Ok(plan.outcome)
    }

    /// Assets released by burning `shares`, ignoring who holds them.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `shares` is zero.
    /// - [`AmmError::EmptyPool`] if no shares are outstanding.
    /// - [`AmmError::InsufficientSupply`] if `shares` exceeds the supply.
    pub fn quote_remove(&self, shares: Shares) -> Result<RemoveLiquidityOutcome> {
        let plan = self.plan_remove(shares)?;
        trace!("quote remove {shares}: {}", plan.outcome);
        Ok(plan.outcome)
    }

    /// Input needed to receive at least `amount_out` from a swap in
    /// `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::InvalidQuantity`] if `amount_out` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` is not below
    ///   the output reserve.
    pub fn quote_swap_exact_out(
        &self,
        amount_out: Amount,
        direction: SwapDirection,
    ) -> Result<Amount> {
        let (reserve_in, reserve_out) = self.oriented(direction);
        let amount_in =
            pricing::swap_input_for_output(amount_out, reserve_in, reserve_out, self.fee_tier)?;
        trace!("quote exact-out {direction} {amount_out}: needs {amount_in}");
        Ok(amount_in)
    }

    /// Verifies share conservation and reserve/supply consistency.
    ///
    /// Debug builds run this after every committed transition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvariantViolation`] describing the first
    /// broken rule.
    pub fn check_invariants(&self) -> Result<()> {
        self.ledger.verify()?;
        let Reserves { base, token } = self.reserves;
        if self.reserves.is_lopsided() {
            return Err(AmmError::InvariantViolation(format!(
                "one-sided reserves {base}/{token}"
            )));
        }
        let total = self.ledger.total();
        match (total.is_zero(), self.reserves.is_empty()) {
            (true, false) => Err(AmmError::InvariantViolation(format!(
                "no shares outstanding but reserves are {base}/{token}"
            ))),
            (false, true) => Err(AmmError::InvariantViolation(format!(
                "{total} shares outstanding against empty reserves"
            ))),
            _ => Ok(()),
        }
    }

    /// `(reserve_in, reserve_out)` for a swap in `direction`.
    const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::BaseToToken => (self.reserves.base, self.reserves.token),
            SwapDirection::TokenToBase => (self.reserves.token, self.reserves.base),
        }
    }

    fn plan_add(&self, base_in: Amount, token_max: Amount) -> Result<AddPlan> {
        if base_in.is_zero() {
            return Err(AmmError::InvalidQuantity("base deposit must be non-zero"));
        }

        let total = self.ledger.total();
        let bootstrap = total.is_zero();
        let (token_in, shares) = if bootstrap {
            if token_max.is_zero() {
                return Err(AmmError::InvalidQuantity(
                    "first deposit requires both assets",
                ));
            }
            let shares = self.bootstrap.initial_shares(base_in, token_max)?;
            (token_max, shares)
        } else {
            let token_required =
                pricing::token_amount_for_base(base_in, self.reserves.base, self.reserves.token)?;
            if token_required > token_max {
                return Err(AmmError::SlippageExceeded {
                    expected: token_required.get(),
                    limit: token_max.get(),
                });
            }
            if token_required.is_zero() {
                return Err(AmmError::InvalidQuantity(
                    "deposit too small to require any token",
                ));
            }
            let shares = pricing::shares_for_deposit(base_in, self.reserves.base, total)?;
            (token_required, shares)
        };

        if shares.is_zero() {
            return Err(AmmError::InvalidQuantity("deposit too small to mint shares"));
        }
        self.ledger.check_mint(shares)?;

        let reserves = Reserves::new(
            self.reserves.base.safe_add(&base_in, "base reserve overflow")?,
            self.reserves.token.safe_add(&token_in, "token reserve overflow")?,
        );
        Ok(AddPlan {
            outcome: AddLiquidityOutcome {
                shares_minted: shares,
                base_in,
                token_in,
                bootstrap,
            },
            reserves,
        })
    }

    fn plan_remove(&self, shares: Shares) -> Result<RemovePlan> {
        if shares.is_zero() {
            return Err(AmmError::InvalidQuantity("cannot burn zero shares"));
        }
        let total = self.ledger.total();
        if total.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        let (base_out, token_out) =
            pricing::withdraw_amounts(shares, total, self.reserves.base, self.reserves.token)?;
        let reserves = Reserves::new(
            self.reserves.base.safe_sub(&base_out, "base reserve underflow")?,
            self.reserves.token.safe_sub(&token_out, "token reserve underflow")?,
        );
        Ok(RemovePlan {
            outcome: RemoveLiquidityOutcome {
                shares_burned: shares,
                base_out,
                token_out,
            },
            reserves,
        })
    }

    fn plan_swap(&self, amount_in: Amount, direction: SwapDirection) -> Result<SwapPlan> {
        let (reserve_in, reserve_out) = self.oriented(direction);
        let amount_out = pricing::swap_output(amount_in, reserve_in, reserve_out, self.fee_tier)?;
        let new_in = reserve_in.safe_add(&amount_in, "input reserve overflow after swap")?;
        let new_out = reserve_out.safe_sub(&amount_out, "output reserve underflow after swap")?;
        let fee = self.fee_tier.fee_on(amount_in)?;
        let reserves = match direction {
            SwapDirection::BaseToToken => Reserves::new(new_in, new_out),
            SwapDirection::TokenToBase => Reserves::new(new_out, new_in),
        };
        Ok(SwapPlan {
            outcome: SwapOutcome {
                direction,
                amount_in,
                amount_out,
                fee,
            },
            reserves,
        })
    }

    fn debug_check(&self) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "pool invariants broken: {:?}",
            self.check_invariants()
        );
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool for the configured pair.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "new pool {}/{} fee={} bootstrap={:?}",
            config.asset_pair().base(),
            config.asset_pair().token(),
            config.fee_tier(),
            config.bootstrap()
        );
        Ok(Self {
            pair: config.asset_pair().clone(),
            fee_tier: config.fee_tier(),
            bootstrap: config.bootstrap(),
            reserves: Reserves::default(),
            ledger: ShareLedger::new(),
            accumulated_fees_base: Amount::ZERO,
            accumulated_fees_token: Amount::ZERO,
        })
    }
}

impl SwapPool for ConstantProductPool {
    /// Executes a swap against the constant-product curve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::EmptyPool`] if either reserve is zero.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `min_amount_out`.
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero or the output
    ///   rounds to zero.
    /// - [`AmmError::Overflow`] if the input reserve would exceed `u128`.
    fn swap(
        &mut self,
        trader: &HolderId,
        amount_in: Amount,
        direction: SwapDirection,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        let plan = self.plan_swap(amount_in, direction)?;
        let out = plan.outcome.amount_out;
        if out < min_amount_out {
            return Err(AmmError::SlippageExceeded {
                expected: out.get(),
                limit: min_amount_out.get(),
            });
        }
        if out.is_zero() {
            return Err(AmmError::InvalidQuantity("swap output rounds to zero"));
        }

        let k_before = self.reserves.k();
        self.reserves = plan.reserves;
        // Counters are informational; they saturate instead of failing a swap.
        let fee = plan.outcome.fee;
        match direction {
            SwapDirection::BaseToToken => {
                self.accumulated_fees_base = self
                    .accumulated_fees_base
                    .checked_add(&fee)
                    .unwrap_or(Amount::MAX);
            }
            SwapDirection::TokenToBase => {
                self.accumulated_fees_token = self
                    .accumulated_fees_token
                    .checked_add(&fee)
                    .unwrap_or(Amount::MAX);
            }
        }
        debug_assert!(self.reserves.k() >= k_before, "swap decreased k");
        debug!(
            "swap by {trader}: {} -> reserves {}/{}",
            plan.outcome, self.reserves.base, self.reserves.token
        );
        self.debug_check();
        Ok(plan.outcome)
    }

    fn quote_swap(&self, amount_in: Amount, direction: SwapDirection) -> Result<Amount> {
        let plan = self.plan_swap(amount_in, direction)?;
        trace!("quote swap {direction} {amount_in}: {}", plan.outcome.amount_out);
        Ok(plan.outcome.amount_out)
    }

    fn asset_pair(&self) -> &AssetPair {
        &self.pair
    }

    fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    fn reserves(&self) -> Reserves {
        self.reserves
    }
}

impl LiquidityPool for ConstantProductPool {
    /// Deposits liquidity and mints shares to `provider`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `base_in` is zero, the first
    ///   deposit has no token side, or no shares would be minted.
    /// - [`AmmError::SlippageExceeded`] if the pool needs more than
    ///   `token_max`.
    /// - [`AmmError::Overflow`] if a reserve or the supply would exceed
    ///   `u128`.
    fn add_liquidity(
        &mut self,
        provider: &HolderId,
        base_in: Amount,
        token_max: Amount,
    ) -> Result<AddLiquidityOutcome> {
        let plan = self.plan_add(base_in, token_max)?;
        self.ledger.mint(provider, plan.outcome.shares_minted)?;
        self.reserves = plan.reserves;
        debug!(
            "add by {provider}: {} -> reserves {}/{}, supply {}",
            plan.outcome,
            self.reserves.base,
            self.reserves.token,
            self.ledger.total()
        );
        self.debug_check();
        Ok(plan.outcome)
    }

    /// Burns `shares` from `holder` and releases the matching reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `shares` is zero.
    /// - [`AmmError::EmptyPool`] if no shares are outstanding.
    /// - [`AmmError::InsufficientBalance`] if `holder` owns fewer shares.
    fn remove_liquidity(
        &mut self,
        holder: &HolderId,
        shares: Shares,
    ) -> Result<RemoveLiquidityOutcome> {
        if !shares.is_zero() && !self.ledger.total().is_zero() {
            self.ledger.check_burn(holder, shares)?;
        }
        let plan = self.plan_remove(shares)?;
        self.ledger.burn(holder, shares)?;
        self.reserves = plan.reserves;
        debug!(
            "remove by {holder}: {} -> reserves {}/{}, supply {}",
            plan.outcome,
            self.reserves.base,
            self.reserves.token,
            self.ledger.total()
        );
        self.debug_check();
        Ok(plan.outcome)
    }

    fn total_shares(&self) -> Shares {
        self.ledger.total()
    }

    fn share_balance(&self, holder: &HolderId) -> Shares {
        self.ledger.balance_of(holder)
    }
}
