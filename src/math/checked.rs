//! `Result`-returning arithmetic for the quantity newtypes.
//!
//! The newtypes expose `Option`-returning `checked_*` methods; inside a
//! transition every step needs a typed error instead, so each operation is
//! wrapped once here rather than `ok_or`-ed at every call site.

use crate::domain::{Amount, Shares};
use crate::error::{AmmError, Result};

/// Fallible addition and subtraction for quantity types.
///
/// # Contract
///
/// - No panics: every failure is an `Err`.
/// - No saturation: a clamped reserve would silently break the pool's
///   invariants.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] with `context` on overflow.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] with `context` if `other > self`.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(AmmError::Underflow(context))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_sub(other).ok_or(AmmError::Underflow(context))
    }
}
