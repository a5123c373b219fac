//! Single-pair exchange walkthrough.
//!
//! Loads a pool configuration from JSON, seeds the pool, trades in both
//! directions with slippage bounds, and drains it back to empty.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example exchange
//! ```

use lp_exchange::prelude::*;

const CONFIG: &str = r#"{
    "pair": { "base": "ETH", "token": "ZD618" },
    "fee_tier": 100,
    "bootstrap": { "rule": "scaled_base", "multiplier": 1 }
}"#;

fn print_pool(pool: &ConstantProductPool) {
    let snap = pool.snapshot();
    println!(
        "  reserves: {} ETH / {} ZD618, shares: {}, state: {}",
        snap.reserves.base,
        snap.reserves.token,
        snap.total_shares,
        snap.state()
    );
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== ETH / ZD618 exchange (x · y = k) ===\n");

    // ── 1. Configuration ────────────────────────────────────────────────
    let config = PoolConfig::from_json(CONFIG)?;
    let mut pool = ConstantProductPool::from_config(&config)?;
    println!("Fee: {}", pool.fee_tier());
    print_pool(&pool);

    let alice = HolderId::new("alice")?;
    let bob = HolderId::new("bob")?;
    let carol = HolderId::new("carol")?;

    // ── 2. Alice fixes the price ────────────────────────────────────────
    let seed = pool.add_liquidity(&alice, Amount::new(1_000_000), Amount::new(4_000_000))?;
    println!("\nalice {seed}");
    print_pool(&pool);

    // ── 3. Bob joins at the current ratio ───────────────────────────────
    let quote = pool.quote_add(Amount::new(250_000), Amount::MAX)?;
    println!("\nbob needs {} ZD618 for 250000 ETH", quote.token_in);
    let added = pool.add_liquidity(&bob, Amount::new(250_000), quote.token_in)?;
    println!("bob {added}");
    print_pool(&pool);

    // ── 4. Carol buys ZD618, accepting 0.5 % slippage ───────────────────
    let amount_in = Amount::new(50_000);
    let expected = pool.quote_swap(amount_in, SwapDirection::BaseToToken)?;
    let min_out = Amount::new(expected.get() * 995 / 1_000);
    let bought = pool.swap(&carol, amount_in, SwapDirection::BaseToToken, min_out)?;
    println!("\ncarol {bought}");
    print_pool(&pool);

    // ── 5. A stale bound is rejected without side effects ───────────────
    match pool.swap(&carol, amount_in, SwapDirection::BaseToToken, expected) {
        Err(e) if e.is_slippage() => println!("\nsecond buy rejected: {e}"),
        other => println!("\nsecond buy: {other:?}"),
    }

    // ── 6. Carol wants exactly 10 000 ETH back ──────────────────────────
    let want = Amount::new(10_000);
    let needed = pool.quote_swap_exact_out(want, SwapDirection::TokenToBase)?;
    let sold = pool.swap(&carol, needed, SwapDirection::TokenToBase, want)?;
    println!("\ncarol {sold}");
    print_pool(&pool);

    // ── 7. Providers withdraw, collecting the retained fees ─────────────
    for lp in [&alice, &bob] {
        let shares = pool.share_balance(lp);
        let out = pool.remove_liquidity(lp, shares)?;
        println!("\n{lp} {out}");
        print_pool(&pool);
    }

    pool.check_invariants()?;
    println!("\nPool drained back to {}.", pool.state());
    Ok(())
}
