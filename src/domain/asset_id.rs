//! Identifier of a pool asset.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AmmError, Result};

/// Longest identifier accepted, in bytes.
const MAX_ASSET_ID_LEN: usize = 64;

/// A chain-agnostic asset identifier such as `"ETH"` or a contract
/// address string.
///
/// The core only needs identifiers to be comparable and printable, so any
/// non-empty run of printable ASCII up to 64 bytes is accepted.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::AssetId;
///
/// let eth = AssetId::new("ETH").expect("valid id");
/// assert_eq!(eth.as_str(), "ETH");
/// assert!(AssetId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId(String);

impl AssetId {
    /// Validates and wraps an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `id` is empty, longer than 64
    /// bytes, or contains whitespace or non-ASCII characters.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(AmmError::InvalidAsset("asset id must not be empty"));
        }
        if id.len() > MAX_ASSET_ID_LEN {
            return Err(AmmError::InvalidAsset("asset id longer than 64 bytes"));
        }
        if !id.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(AmmError::InvalidAsset(
                "asset id must be printable ASCII without whitespace",
            ));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetId {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AssetId> for String {
    fn from(value: AssetId) -> Self {
        value.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
