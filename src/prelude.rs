//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use lp_exchange::prelude::*;
//! ```

pub use crate::domain::{
    AddLiquidityOutcome, Amount, AssetId, AssetPair, BasisPoints, FeeTier, HolderId, PoolSnapshot,
    PoolState, RemoveLiquidityOutcome, Reserves, Shares, SwapDirection, SwapOutcome,
};

pub use crate::traits::{FromConfig, LiquidityPool, SwapPool};

pub use crate::config::{BootstrapPolicy, PoolConfig};

pub use crate::error::{AmmError, Result};

pub use crate::pools::{ConstantProductPool, SharedPool};
