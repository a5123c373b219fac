//! Results of pool transitions and quotes.

use core::fmt;

use super::{Amount, Shares, SwapDirection};

/// What an `add_liquidity` call committed (or would commit, when returned
/// by a quote).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityOutcome {
    /// Shares credited to the provider.
    pub shares_minted: Shares,
    /// Base asset moved into the reserve.
    pub base_in: Amount,
    /// Token moved into the reserve.  On a bootstrap deposit this is the
    /// caller's full `token_max`; otherwise the proportional requirement.
    pub token_in: Amount,
    /// `true` if this deposit moved the pool from empty to active.
    pub bootstrap: bool,
}

/// What a `remove_liquidity` call committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityOutcome {
    /// Shares burned from the holder.
    pub shares_burned: Shares,
    /// Base asset released from the reserve.
    pub base_out: Amount,
    /// Token released from the reserve.
    pub token_out: Amount,
}

/// What a swap committed.
///
/// # Invariants
///
/// - `amount_out > 0`.
/// - `fee <= amount_in`; the fee is informational and is already part of
///   `amount_in` (it stays in the input reserve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    /// Side that was sold.
    pub direction: SwapDirection,
    /// Amount added to the input reserve.
    pub amount_in: Amount,
    /// Amount removed from the output reserve.
    pub amount_out: Amount,
    /// Portion of `amount_in` retained as fee.
    pub fee: Amount,
}

impl fmt::Display for AddLiquidityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Add(base={}, token={}, shares={})",
            self.base_in, self.token_in, self.shares_minted
        )
    }
}

impl fmt::Display for RemoveLiquidityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Remove(shares={}, base={}, token={})",
            self.shares_burned, self.base_out, self.token_out
        )
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({}, in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let swap = SwapOutcome {
            direction: SwapDirection::BaseToToken,
            amount_in: Amount::new(100),
            amount_out: Amount::new(90),
            fee: Amount::ZERO,
        };
        assert_eq!(swap.to_string(), "Swap(base->token, in=100, out=90, fee=0)");

        let add = AddLiquidityOutcome {
            shares_minted: Shares::new(5),
            base_in: Amount::new(10),
            token_in: Amount::new(20),
            bootstrap: false,
        };
        assert_eq!(add.to_string(), "Add(base=10, token=20, shares=5)");
    }
}
