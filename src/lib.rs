//! # lp-exchange
//!
//! Accounting core of a two-asset constant-product exchange: a pool that
//! holds a base asset and a token, issues proportional claim shares, and
//! supports adding liquidity, removing liquidity and swapping.
//!
//! The crate never moves assets.  Callers settle transfers elsewhere and
//! then ask the pool to commit the matching transition.  Every quantity is
//! an unsigned integer in the asset's smallest unit; there is no floating
//! point anywhere.
//!
//! ## Create a pool, seed it and swap
//!
//! ```rust
//! use lp_exchange::prelude::*;
//!
//! let pair = AssetPair::new(
//!     AssetId::new("ETH").expect("valid id"),
//!     AssetId::new("ZD618").expect("valid id"),
//! )
//! .expect("distinct assets");
//! let config = PoolConfig::new(pair, FeeTier::ZERO, BootstrapPolicy::default())
//!     .expect("valid config");
//! let mut pool = ConstantProductPool::from_config(&config).expect("pool created");
//!
//! let alice = HolderId::new("alice").expect("valid holder");
//! pool.add_liquidity(&alice, Amount::new(1_000), Amount::new(1_000))
//!     .expect("first deposit");
//!
//! // Quote, then execute with the quote as the slippage bound.
//! let quote = pool.quote_swap(Amount::new(100), SwapDirection::BaseToToken)
//!     .expect("quote");
//! let outcome = pool
//!     .swap(&alice, Amount::new(100), SwapDirection::BaseToToken, quote)
//!     .expect("swap");
//! assert_eq!(outcome.amount_out, Amount::new(90));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  PoolConfig (code or JSON), HolderId, amounts
//! └──────┬───────┘
//!        │ add_liquidity / remove_liquidity / swap
//!        ▼
//! ┌──────────────┐
//! │  SharedPool   │  optional Arc<RwLock<_>> for concurrent callers
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves + ShareLedger, check-then-commit
//! └──────┬───────┘
//!        │ pure functions
//!        ▼
//! ┌──────────────┐
//! │   Pricing     │  floor-rounded ratios in 256/512-bit integers
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), outcomes, snapshots |
//! | [`pricing`] | Stateless quote formulas |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool), [`ShareLedger`](pools::ShareLedger), [`SharedPool`](pools::SharedPool) |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`BootstrapPolicy`](config::BootstrapPolicy) |
//! | [`math`] | Wide integers and checked arithmetic |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Transitions are reported through the [`log`] facade at `debug` level and
//! quotes at `trace` level.  The library never installs a logger.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricing;
pub mod traits;
