//! Immutable views of pool state.

use core::fmt;

use super::{Amount, FeeTier, Shares};
use crate::math::U256;

/// Lifecycle state of a pool.
///
/// ```text
///          first add_liquidity
///   Empty ─────────────────────▶ Active ──┐ swap / add / partial remove
///     ▲                            │  ◀───┘
///     └────────────────────────────┘
///        remove_liquidity drains supply
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolState {
    /// Zero reserves, zero shares.  The next deposit fixes the price.
    Empty,
    /// Both reserves and the share supply are positive.
    Active,
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Active => write!(f, "Active"),
        }
    }
}

/// The pool's two reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reserves {
    /// Base asset held by the pool.
    pub base: Amount,
    /// Token held by the pool.
    pub token: Amount,
}

impl Reserves {
    /// Creates a reserve pair.
    pub const fn new(base: Amount, token: Amount) -> Self {
        Self { base, token }
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.base.is_zero() && self.token.is_zero()
    }

    /// Returns `true` if one reserve is zero and the other is not, a
    /// state no transition may produce.
    #[must_use]
    pub const fn is_lopsided(&self) -> bool {
        self.base.is_zero() != self.token.is_zero()
    }

    /// The constant product `base × token`, exact in 256 bits.
    #[must_use]
    pub fn k(&self) -> U256 {
        U256::from(self.base.get()) * U256::from(self.token.get())
    }
}

/// A consistent, owned copy of everything a reader may ask about a pool.
///
/// Produced under a single borrow (or a single read lock for
/// [`SharedPool`](crate::pools::SharedPool)), so the reserve pair and the
/// share supply always belong to the same point between transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolSnapshot {
    /// Reserves at snapshot time.
    pub reserves: Reserves,
    /// Total outstanding shares.
    pub total_shares: Shares,
    /// Swap fee in force.
    pub fee_tier: FeeTier,
    /// Fees retained in the base reserve since creation.
    pub accumulated_fees_base: Amount,
    /// Fees retained in the token reserve since creation.
    pub accumulated_fees_token: Amount,
}

impl PoolSnapshot {
    /// Lifecycle state implied by the share supply.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        if self.total_shares.is_zero() {
            PoolState::Empty
        } else {
            PoolState::Active
        }
    }
}
