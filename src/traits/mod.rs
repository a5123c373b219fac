//! Core trait abstractions for pool operations.
//!
//! [`SwapPool`] executes and quotes swaps, [`LiquidityPool`] manages
//! claim shares, and [`FromConfig`] builds pools from configuration.

mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
