//! Double-width intermediates for multiply-before-divide.
//!
//! Every ratio in the core has the shape `a × b / c` with `u128` operands.
//! Forming `a × b` in [`U256`] means the product can never overflow, so
//! the only failure left is a *quotient* that does not fit back into
//! `u128`, which is reported as [`AmmError::Overflow`].  The swap formula
//! with a fee multiplies three `u128`-sized factors and uses [`U512`].

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::manual_div_ceil)]

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

pub use uints::{U256, U512};

// Kept apart from the crate's one-parameter `Result` alias, which the
// macro-generated `FromStr` impls would otherwise pick up.
mod uints {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer for `u128 × u128` products.
        pub struct U256(4);
    }

    construct_uint! {
        /// 512-bit unsigned integer for three-factor products.
        pub struct U512(8);
    }
}

/// Narrows a [`U256`] back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if `value ≥ 2¹²⁸`.
pub fn narrow_u256(value: U256, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Narrows a [`U512`] back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] with `context` if `value ≥ 2¹²⁸`.
pub fn narrow_u512(value: U512, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}

/// Divides with an explicit rounding direction.  `denominator` must be
/// non-zero; callers check first.
fn div_rounded_u256(numerator: U256, denominator: U256, rounding: Rounding) -> U256 {
    let (q, r) = numerator.div_mod(denominator);
    if rounding.is_up() && !r.is_zero() {
        q + U256::one()
    } else {
        q
    }
}

/// Computes `a × b / c` with the product held in 256 bits.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::Rounding;
/// use lp_exchange::math::mul_div;
///
/// assert_eq!(mul_div(10, 200, 100, Rounding::Down).ok(), Some(20));
/// assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Down).ok(), Some(u128::MAX));
/// assert_eq!(mul_div(7, 1, 2, Rounding::Up).ok(), Some(4));
/// ```
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c == 0`.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128::MAX`.
pub fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> Result<u128> {
    if c == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    let quotient = div_rounded_u256(product, U256::from(c), rounding);
    narrow_u256(quotient, "mul_div quotient exceeds u128")
}

/// Floor of the square root of `a × b`, computed in 256 bits.
///
/// The result always fits in `u128` because `√(2²⁵⁶) = 2¹²⁸`.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    let n = U256::from(a) * U256::from(b);
    if n.is_zero() {
        return 0;
    }
    // Newton iteration from an over-estimate converges monotonically down.
    let mut x = n;
    let two = U256::from(2u8);
    let mut y = x / two + U256::one();
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x.low_u128()
}
