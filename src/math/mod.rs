//! Overflow-free integer arithmetic for the pricing formulas.
//!
//! - [`mul_div`] evaluates `a × b / c` through a 256-bit intermediate with
//!   explicit [`Rounding`](crate::domain::Rounding).
//! - [`U256`] / [`U512`] are the wide integer types behind it.
//! - [`CheckedArithmetic`] turns newtype overflow into typed errors.
//!
//! No floating point is used anywhere in the crate.

mod checked;
mod wide;

pub use checked::CheckedArithmetic;
pub use wide::{mul_div, narrow_u256, narrow_u512, sqrt_product, U256, U512};
