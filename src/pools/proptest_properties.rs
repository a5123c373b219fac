//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers:
//!
//! 1. **Share conservation**: balances always sum to the supply, across
//!    arbitrary add/remove sequences.
//! 2. **No free swap**: `k` never decreases across a swap.
//! 3. **Proportionality**: add and remove move the reserve ratio by no more
//!    than their own truncation.
//! 4. **No extraction**: depositing then withdrawing returns at most what
//!    was put in.
//! 5. **Round trip**: A→B→A returns at most the original input, and
//!    strictly less whenever a fee applies or the first leg truncates.
//! 6. **Empty-pool rejection**: swaps and withdrawals on an empty pool fail
//!    without side effects.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::ConstantProductPool;
use crate::config::{BootstrapPolicy, PoolConfig};
use crate::domain::{Amount, AssetId, AssetPair, FeeTier, HolderId, Shares, SwapDirection};
use crate::error::AmmError;
use crate::math::U256;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn holder(i: usize) -> HolderId {
    let Ok(id) = HolderId::new(format!("holder-{i}")) else {
        panic!("valid holder id");
    };
    id
}

fn make_pool(fee: FeeTier, bootstrap: BootstrapPolicy) -> ConstantProductPool {
    let Ok(base) = AssetId::new("ETH") else {
        panic!("valid id");
    };
    let Ok(token) = AssetId::new("ZD618") else {
        panic!("valid id");
    };
    let Ok(pair) = AssetPair::new(base, token) else {
        panic!("valid pair");
    };
    let Ok(cfg) = PoolConfig::new(pair, fee, bootstrap) else {
        panic!("valid config");
    };
    let Ok(pool) = ConstantProductPool::from_config(&cfg) else {
        panic!("valid pool");
    };
    pool
}

fn seeded(base: u128, token: u128, fee: FeeTier) -> ConstantProductPool {
    let mut pool = make_pool(fee, BootstrapPolicy::default());
    let Ok(_) = pool.add_liquidity(&holder(0), Amount::new(base), Amount::new(token)) else {
        panic!("bootstrap deposit");
    };
    pool
}

fn wide(v: Amount) -> U256 {
    U256::from(v.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000_000u128
}

/// Fee tiers from zero up to 1 %.
fn fee_strategy() -> impl Strategy<Value = FeeTier> {
    prop_oneof![
        Just(FeeTier::ZERO),
        Just(FeeTier::TIER_0_30_PERCENT),
        Just(FeeTier::TIER_1_00_PERCENT),
    ]
}

fn bootstrap_strategy() -> impl Strategy<Value = BootstrapPolicy> {
    prop_oneof![
        Just(BootstrapPolicy::BASE_UNITS),
        Just(BootstrapPolicy::ScaledBase { multiplier: 1_000 }),
        Just(BootstrapPolicy::GeometricMean),
    ]
}

/// One step of a random liquidity sequence.
#[derive(Debug, Clone)]
enum Op {
    Add { who: usize, base: u128, token_max: u128 },
    Remove { who: usize, permille: u128 },
    Swap { base_in: bool, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4, 1u128..1_000_000, 1u128..10_000_000)
            .prop_map(|(who, base, token_max)| Op::Add { who, base, token_max }),
        (0usize..4, 1u128..=1_000).prop_map(|(who, permille)| Op::Remove { who, permille }),
        (any::<bool>(), 1u128..100_000).prop_map(|(base_in, amount)| Op::Swap { base_in, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Share conservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_share_conservation(
        bootstrap in bootstrap_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let mut pool = make_pool(FeeTier::TIER_0_30_PERCENT, bootstrap);
        let trader = holder(99);
        for op in ops {
            let before = pool.clone();
            let result = match op {
                Op::Add { who, base, token_max } => pool
                    .add_liquidity(&holder(who), Amount::new(base), Amount::new(token_max))
                    .map(|_| ()),
                Op::Remove { who, permille } => {
                    let h = holder(who);
                    let shares = pool.share_balance(&h).get() * permille / 1_000;
                    pool.remove_liquidity(&h, Shares::new(shares)).map(|_| ())
                }
                Op::Swap { base_in, amount } => pool
                    .swap(&trader, Amount::new(amount), SwapDirection::from(base_in), Amount::ZERO)
                    .map(|_| ()),
            };
            if result.is_err() {
                prop_assert_eq!(&pool, &before, "failed transition mutated the pool");
            }
            let sum = pool
                .ledger()
                .holders()
                .fold(0u128, |acc, (_, s)| acc + s.get());
            prop_assert_eq!(sum, pool.total_shares().get());
            prop_assert!(pool.check_invariants().is_ok());
            prop_assert_eq!(pool.share_balance(&trader), Shares::ZERO);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: No free swap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_decreases_k(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        fee in fee_strategy(),
        base_in in any::<bool>(),
        amount in 1u128..=1_000_000_000u128,
    ) {
        let mut pool = seeded(rb, rt, fee);
        let k_before = pool.reserves().k();
        let Ok(out) = pool.swap(&holder(1), Amount::new(amount), SwapDirection::from(base_in), Amount::ZERO) else {
            // Output rounded to zero; nothing was committed.
            prop_assert_eq!(pool.reserves().k(), k_before);
            return Ok(());
        };
        prop_assert!(out.amount_out.get() > 0);
        prop_assert!(
            pool.reserves().k() >= k_before,
            "k decreased: {} < {}", pool.reserves().k(), k_before
        );
    }
}

// ---------------------------------------------------------------------------
// Property 3: Proportionality
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_preserves_ratio(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        base in 1u128..=1_000_000_000u128,
    ) {
        let mut pool = seeded(rb, rt, FeeTier::ZERO);
        let before = pool.reserves();
        let Ok(_) = pool.add_liquidity(&holder(1), Amount::new(base), Amount::MAX) else {
            return Ok(());
        };
        let after = pool.reserves();
        // (B + b)·T − (T + t)·B = b·T − ⌊b·T/B⌋·B  ∈ [0, B)
        let lhs = wide(after.base) * wide(before.token);
        let rhs = wide(after.token) * wide(before.base);
        prop_assert!(lhs >= rhs);
        prop_assert!(lhs < rhs + wide(before.base));
    }

    #[test]
    fn prop_remove_preserves_ratio(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        permille in 1u128..1_000u128,
    ) {
        let mut pool = seeded(rb, rt, FeeTier::ZERO);
        let lp = holder(0);
        let shares = (pool.share_balance(&lp).get() * permille / 1_000).max(1);
        let before = pool.reserves();
        let Ok(_) = pool.remove_liquidity(&lp, Shares::new(shares)) else {
            return Ok(());
        };
        let after = pool.reserves();
        // (B − b)·T − (T − t)·B lies strictly between −B and T.
        let lhs = wide(after.base) * wide(before.token);
        let rhs = wide(after.token) * wide(before.base);
        prop_assert!(lhs + wide(before.base) > rhs);
        prop_assert!(rhs + wide(before.token) > lhs);
    }
}

// ---------------------------------------------------------------------------
// Property 4: No extraction through add/remove
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_add_then_remove_returns_at_most_deposit(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        base in 1u128..=1_000_000_000u128,
    ) {
        let mut pool = seeded(rb, rt, FeeTier::ZERO);
        let bob = holder(1);
        let Ok(added) = pool.add_liquidity(&bob, Amount::new(base), Amount::MAX) else {
            return Ok(());
        };
        let Ok(removed) = pool.remove_liquidity(&bob, added.shares_minted) else {
            panic!("holder must be able to burn freshly minted shares");
        };
        prop_assert!(removed.base_out <= added.base_in);
        prop_assert!(removed.token_out <= added.token_in);
        prop_assert_eq!(pool.share_balance(&bob), Shares::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_never_profits(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        fee in fee_strategy(),
        amount in 1u128..=1_000_000u128,
    ) {
        let mut pool = seeded(rb, rt, fee);
        let trader = holder(1);
        let Ok(there) = pool.swap(&trader, Amount::new(amount), SwapDirection::BaseToToken, Amount::ZERO) else {
            return Ok(());
        };
        let Ok(back) = pool.swap(&trader, there.amount_out, SwapDirection::TokenToBase, Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            back.amount_out.get() <= amount,
            "round trip gained: {} > {}", back.amount_out, amount
        );
        if !fee.is_zero() {
            prop_assert!(back.amount_out.get() < amount);
        }
    }

    #[test]
    fn prop_fee_free_round_trip_loses_on_truncation(
        rb in reserve_strategy(),
        rt in reserve_strategy(),
        amount in 1u128..=1_000_000u128,
    ) {
        let mut pool = seeded(rb, rt, FeeTier::ZERO);
        let trader = holder(1);
        let Ok(there) = pool.swap(&trader, Amount::new(amount), SwapDirection::BaseToToken, Amount::ZERO) else {
            return Ok(());
        };
        let Ok(back) = pool.swap(&trader, there.amount_out, SwapDirection::TokenToBase, Amount::ZERO) else {
            return Ok(());
        };
        // First leg is exact iff out · (B + a) == a · T.
        let a = U256::from(amount);
        let exact = wide(there.amount_out) * (U256::from(rb) + a) == a * U256::from(rt);
        if exact {
            prop_assert!(back.amount_out.get() <= amount);
        } else {
            prop_assert!(
                back.amount_out.get() < amount,
                "truncated first leg still returned {} of {}", back.amount_out, amount
            );
        }
    }

    #[test]
    fn prop_fee_free_exact_round_trip_is_lossless(
        base in 1u128..=1_000_000u128,
        scale in 1u128..=1_000u128,
    ) {
        // Reserves (b, b) and input b: the first leg pays exactly b/2 when b
        // is even, and the second leg returns the full input.
        let b = base * 2;
        let mut pool = seeded(b * scale, b * scale, FeeTier::ZERO);
        let amount = b * scale;
        let trader = holder(1);
        let Ok(there) = pool.swap(&trader, Amount::new(amount), SwapDirection::BaseToToken, Amount::ZERO) else {
            panic!("first leg");
        };
        prop_assert_eq!(there.amount_out.get(), amount / 2);
        let Ok(back) = pool.swap(&trader, there.amount_out, SwapDirection::TokenToBase, Amount::ZERO) else {
            panic!("second leg");
        };
        prop_assert_eq!(back.amount_out.get(), amount);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Empty-pool rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_empty_pool_rejects(
        amount in 1u128..=u128::MAX,
        base_in in any::<bool>(),
        bootstrap in bootstrap_strategy(),
    ) {
        let mut pool = make_pool(FeeTier::ZERO, bootstrap);
        let before = pool.clone();
        prop_assert_eq!(
            pool.swap(&holder(1), Amount::new(amount), SwapDirection::from(base_in), Amount::ZERO),
            Err(AmmError::EmptyPool)
        );
        prop_assert_eq!(
            pool.remove_liquidity(&holder(1), Shares::new(amount)),
            Err(AmmError::EmptyPool)
        );
        prop_assert_eq!(pool, before);
    }
}
