//! Which reserve a swap sells into.

use core::fmt;

/// The side a trader sells.
///
/// Selects `(reserve_in, reserve_out)` for the pricing formula:
/// `BaseToToken` reads `(base, token)`, `TokenToBase` reads `(token, base)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapDirection {
    /// Sell the base asset, receive the token.
    BaseToToken = 0,
    /// Sell the token, receive the base asset.
    TokenToBase = 1,
}

impl SwapDirection {
    /// Returns `true` if the base asset is the input.
    #[must_use]
    pub const fn input_is_base(&self) -> bool {
        matches!(self, Self::BaseToToken)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(&self) -> Self {
        match self {
            Self::BaseToToken => Self::TokenToBase,
            Self::TokenToBase => Self::BaseToToken,
        }
    }
}

impl From<bool> for SwapDirection {
    /// Maps an `input_is_base` flag onto a direction.
    fn from(input_is_base: bool) -> Self {
        if input_is_base {
            Self::BaseToToken
        } else {
            Self::TokenToBase
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseToToken => write!(f, "base->token"),
            Self::TokenToBase => write!(f, "token->base"),
        }
    }
}
