//! Explicit rounding direction for integer division.

/// Rounding direction for every division performed by the core.
///
/// The convention is to round against the caller: outputs and minted
/// shares round [`Down`](Rounding::Down); required inputs and fees round
/// [`Up`](Rounding::Up).  Either way the pool keeps the dust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
