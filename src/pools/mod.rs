//! Pool implementation and its thread-safe handle.
//!
//! | Type | Role |
//! |------|------|
//! | [`ConstantProductPool`] | Reserves, share ledger and the three transitions |
//! | [`ShareLedger`] | Holder balances and the supply they sum to |
//! | [`SharedPool`] | `Arc<RwLock<_>>` wrapper for concurrent callers |

pub mod constant_product;
mod ledger;
mod shared;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use ledger::ShareLedger;
pub use shared::SharedPool;
