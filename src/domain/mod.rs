//! Value types used throughout the exchange core.
//!
//! Quantities are `u128` newtypes ([`Amount`] for assets, [`Shares`] for
//! LP claims) so the two cannot be mixed up; identifiers are validated on
//! construction; outcomes and snapshots are plain owned values handed back
//! to callers.

mod amount;
mod asset_id;
mod asset_pair;
mod basis_points;
mod fee_tier;
mod holder_id;
mod outcome;
mod rounding;
mod shares;
mod snapshot;
mod swap_direction;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub(crate) use basis_points::BPS_DENOMINATOR;
pub use basis_points::BasisPoints;
pub use fee_tier::FeeTier;
pub use holder_id::HolderId;
pub use outcome::{AddLiquidityOutcome, RemoveLiquidityOutcome, SwapOutcome};
pub use rounding::Rounding;
pub use shares::Shares;
pub use snapshot::{PoolSnapshot, PoolState, Reserves};
pub use swap_direction::SwapDirection;
