//! Pure pricing functions for the constant-product curve.
//!
//! Nothing in this module reads or writes pool state: every function takes
//! the reserves it needs as arguments and is fully reproducible from them.
//! The pool calls these to *decide* a transition, then commits the result.
//!
//! # Rounding
//!
//! Every quotient is floored except [`swap_input_for_output`], which
//! rounds the required input up.  Both directions leave the remainder in
//! the pool.
//!
//! # Width
//!
//! Products are formed in 256-bit (two factors) or 512-bit (three
//! factors) integers, so no intermediate can overflow for any `u128`
//! input.  A result that cannot be represented as `u128` is reported as
//! [`AmmError::Overflow`].

use crate::domain::{Amount, FeeTier, Rounding, Shares, BPS_DENOMINATOR};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, narrow_u512, U512};

/// Token amount that must accompany `base_in` to keep the reserve ratio.
///
/// `token_required = ⌊base_in × token_reserve / base_reserve⌋`
///
/// Only meaningful for an active pool; an empty pool takes whatever ratio
/// the first depositor supplies.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::Amount;
/// use lp_exchange::pricing::token_amount_for_base;
///
/// let t = token_amount_for_base(Amount::new(10), Amount::new(100), Amount::new(200));
/// assert_eq!(t.ok(), Some(Amount::new(20)));
/// ```
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `base_reserve` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
pub fn token_amount_for_base(
    base_in: Amount,
    base_reserve: Amount,
    token_reserve: Amount,
) -> Result<Amount> {
    mul_div(
        base_in.get(),
        token_reserve.get(),
        base_reserve.get(),
        Rounding::Down,
    )
    .map(Amount::new)
}

/// Shares minted for a proportional deposit of `base_in`.
///
/// `shares = ⌊total_shares × base_in / base_reserve⌋`
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `base_reserve` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
pub fn shares_for_deposit(
    base_in: Amount,
    base_reserve: Amount,
    total_shares: Shares,
) -> Result<Shares> {
    mul_div(
        total_shares.get(),
        base_in.get(),
        base_reserve.get(),
        Rounding::Down,
    )
    .map(Shares::new)
}

/// Assets released by burning `shares` out of `total_shares`.
///
/// `base_out = ⌊base_reserve × shares / total_shares⌋`, and likewise for
/// the token.  `total_shares` must be the supply **before** the burn.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::{Amount, Shares};
/// use lp_exchange::pricing::withdraw_amounts;
///
/// let out = withdraw_amounts(Shares::new(5), Shares::new(55), Amount::new(110), Amount::new(220));
/// assert_eq!(out.ok(), Some((Amount::new(10), Amount::new(20))));
/// ```
///
/// # Errors
///
/// [`AmmError::InsufficientSupply`] if `total_shares` is zero or smaller
/// than `shares`.
pub fn withdraw_amounts(
    shares: Shares,
    total_shares: Shares,
    base_reserve: Amount,
    token_reserve: Amount,
) -> Result<(Amount, Amount)> {
    if total_shares.is_zero() || shares > total_shares {
        return Err(AmmError::InsufficientSupply);
    }
    // shares <= total_shares, so both quotients are bounded by the reserve.
    let base_out = mul_div(
        base_reserve.get(),
        shares.get(),
        total_shares.get(),
        Rounding::Down,
    )?;
    let token_out = mul_div(
        token_reserve.get(),
        shares.get(),
        total_shares.get(),
        Rounding::Down,
    )?;
    Ok((Amount::new(base_out), Amount::new(token_out)))
}

/// Output of selling `amount_in` into the pool.
///
/// With `net = amount_in × (10 000 − fee_bps)`:
///
/// ```text
/// amount_out = ⌊ net × reserve_out / (reserve_in × 10 000 + net) ⌋
/// ```
///
/// For a zero fee this reduces to
/// `⌊amount_in × reserve_out / (reserve_in + amount_in)⌋`.  The floor
/// guarantees `(reserve_in + amount_in) × (reserve_out − amount_out) ≥
/// reserve_in × reserve_out`.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::{Amount, FeeTier};
/// use lp_exchange::pricing::swap_output;
///
/// let out = swap_output(Amount::new(100), Amount::new(1_000), Amount::new(1_000), FeeTier::ZERO);
/// assert_eq!(out.ok(), Some(Amount::new(90)));
/// ```
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
/// - [`AmmError::InvalidFee`] if the fee is 100 % or more.
pub fn swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    if amount_in.is_zero() {
        return Err(AmmError::InvalidQuantity("swap input must be non-zero"));
    }
    fee.validate()?;

    let net = U512::from(amount_in.get()) * U512::from(fee.basis_points().complement());
    let numerator = net * U512::from(reserve_out.get());
    let denominator = U512::from(reserve_in.get()) * U512::from(BPS_DENOMINATOR) + net;
    // amount_out < reserve_out always, so narrowing cannot fail in practice.
    narrow_u512(numerator / denominator, "swap output exceeds u128").map(Amount::new)
}

/// Smallest input whose [`swap_output`] is at least `amount_out`.
///
/// ```text
/// amount_in = ⌈ amount_out × reserve_in × 10 000
///              / ((reserve_out − amount_out) × (10 000 − fee_bps)) ⌉
/// ```
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if either reserve is zero.
/// - [`AmmError::InvalidQuantity`] if `amount_out` is zero.
/// - [`AmmError::InvalidFee`] if the fee is 100 % or more.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out ≥ reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
pub fn swap_input_for_output(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    if amount_out.is_zero() {
        return Err(AmmError::InvalidQuantity("swap output must be non-zero"));
    }
    fee.validate()?;
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = U512::from(amount_out.get())
        * U512::from(reserve_in.get())
        * U512::from(BPS_DENOMINATOR);
    let denominator = U512::from(reserve_out.get() - amount_out.get())
        * U512::from(fee.basis_points().complement());
    let (q, r) = numerator.div_mod(denominator);
    let amount_in = if r.is_zero() { q } else { q + U512::one() };
    narrow_u512(amount_in, "required swap input exceeds u128").map(Amount::new)
}
