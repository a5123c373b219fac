//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: the asset pair,
//! the swap fee and the [`BootstrapPolicy`] that prices the first deposit.
//! Configurations can be built in code or loaded from JSON.

mod bootstrap;
mod pool_config;

pub use bootstrap::BootstrapPolicy;
pub use pool_config::PoolConfig;
