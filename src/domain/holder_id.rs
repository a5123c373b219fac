//! Identity of a share holder.

use core::fmt;

use crate::error::{AmmError, Result};

/// Longest holder identity accepted, in bytes.
const MAX_HOLDER_ID_LEN: usize = 128;

/// Opaque identity of a liquidity provider or trader, typically an
/// account address supplied by the surrounding ledger layer.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::HolderId;
///
/// let alice = HolderId::new("alice").expect("valid holder");
/// assert_eq!(alice.to_string(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolderId(String);

impl HolderId {
    /// Validates and wraps a holder identity.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidHolder`] if `id` is empty or longer than
    /// 128 bytes.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(AmmError::InvalidHolder("holder id must not be empty"));
        }
        if id.len() > MAX_HOLDER_ID_LEN {
            return Err(AmmError::InvalidHolder("holder id longer than 128 bytes"));
        }
        Ok(Self(id))
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
