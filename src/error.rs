//! Unified error types for the exchange core.
//!
//! All fallible operations across the crate return [`AmmError`], so a
//! caller can match on one enum regardless of whether the failure came
//! from the pricing functions, the share ledger, or the pool itself.
//!
//! Every error is reported **before** any state is touched: a transition
//! that returns `Err` leaves reserves, share supply and balances exactly as
//! they were.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every failure the exchange core can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A ratio was requested against a zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The pool holds no reserves, so no price is defined.
    #[error("pool is empty")]
    EmptyPool,

    /// A computed amount violates the caller-supplied bound.
    ///
    /// For swaps `expected` is the computed output and `limit` the
    /// minimum accepted; for deposits `expected` is the token amount the
    /// pool requires and `limit` the caller's ceiling.
    #[error("slippage exceeded: computed {expected}, limit {limit}")]
    SlippageExceeded {
        /// Amount the pool computed.
        expected: u128,
        /// Bound the caller supplied.
        limit: u128,
    },

    /// A holder tried to burn more shares than they own.
    #[error("insufficient share balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Shares the holder asked to burn.
        requested: u128,
        /// Shares the holder actually owns.
        available: u128,
    },

    /// Withdrawal attempted against a zero (or too small) share supply.
    #[error("insufficient share supply")]
    InsufficientSupply,

    /// Reserves cannot satisfy the requested output.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// An input quantity is zero or rounds to nothing.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A fee rate is outside the supported range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// An asset identifier is malformed or not part of the pool pair.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A holder identity is malformed.
    #[error("invalid holder: {0}")]
    InvalidHolder(&'static str),

    /// Pool configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A final quantity does not fit in the `u128` boundary type.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A result would drop below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Internal bookkeeping disagrees with itself, e.g. share balances
    /// that no longer sum to the supply.  Never produced by a correct
    /// sequence of transitions.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl AmmError {
    /// Returns `true` for failures caused by the caller's bounds rather
    /// than by pool state.  Re-quoting and resubmitting may succeed.
    #[must_use]
    pub const fn is_slippage(&self) -> bool {
        matches!(self, Self::SlippageExceeded { .. })
    }
}
