//! The two assets a pool trades.

use serde::{Deserialize, Serialize};

use super::{AssetId, SwapDirection};
use crate::error::{AmmError, Result};

/// The base asset and the token backing a pool's two reserves.
///
/// Unlike a canonically sorted pair, the roles matter here: the base side
/// fixes the denominator of deposits (`token_required` is quoted per unit
/// of base) and the bootstrap share rule is expressed in base units.
///
/// # Examples
///
/// ```
/// use lp_exchange::domain::{AssetId, AssetPair, SwapDirection};
///
/// let eth = AssetId::new("ETH").expect("valid");
/// let zd = AssetId::new("ZD618").expect("valid");
/// let pair = AssetPair::new(eth.clone(), zd).expect("distinct");
///
/// assert_eq!(pair.base(), &eth);
/// assert_eq!(pair.direction_from(&eth).ok(), Some(SwapDirection::BaseToToken));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetPair {
    base: AssetId,
    token: AssetId,
}

impl AssetPair {
    /// Creates a pair from two distinct identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `base == token`.
    pub fn new(base: AssetId, token: AssetId) -> Result<Self> {
        let pair = Self { base, token };
        pair.validate()?;
        Ok(pair)
    }

    /// Checks that the two sides are distinct.
    ///
    /// Needed again after deserialization, which bypasses [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both sides are equal.
    pub fn validate(&self) -> Result<()> {
        if self.base == self.token {
            return Err(AmmError::InvalidAsset(
                "asset pair requires two distinct identifiers",
            ));
        }
        Ok(())
    }

    /// Returns the base asset.
    #[must_use]
    pub const fn base(&self) -> &AssetId {
        &self.base
    }

    /// Returns the token asset.
    #[must_use]
    pub const fn token(&self) -> &AssetId {
        &self.token
    }

    /// Returns `true` if `asset` is either side of the pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.base == *asset || self.token == *asset
    }

    /// Maps the asset a trader sells onto a swap direction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    pub fn direction_from(&self, asset_in: &AssetId) -> Result<SwapDirection> {
        if *asset_in == self.base {
            Ok(SwapDirection::BaseToToken)
        } else if *asset_in == self.token {
            Ok(SwapDirection::TokenToBase)
        } else {
            Err(AmmError::InvalidAsset("asset is not part of the pool pair"))
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn id(s: &str) -> AssetId {
        let Ok(a) = AssetId::new(s) else {
            panic!("valid asset id");
        };
        a
    }

    fn pair() -> AssetPair {
        let Ok(p) = AssetPair::new(id("ETH"), id("ZD618")) else {
            panic!("expected Ok");
        };
        p
    }

    #[test]
    fn roles_are_kept() {
        let p = pair();
        assert_eq!(p.base(), &id("ETH"));
        assert_eq!(p.token(), &id("ZD618"));
    }

    #[test]
    fn rejects_identical_sides() {
        let Err(e) = AssetPair::new(id("ETH"), id("ETH")) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            AmmError::InvalidAsset("asset pair requires two distinct identifiers")
        );
    }

    #[test]
    fn contains_both_sides_only() {
        let p = pair();
        assert!(p.contains(&id("ETH")));
        assert!(p.contains(&id("ZD618")));
        assert!(!p.contains(&id("DAI")));
    }

    #[test]
    fn direction_from_each_side() {
        let p = pair();
        assert_eq!(p.direction_from(&id("ETH")), Ok(SwapDirection::BaseToToken));
        assert_eq!(p.direction_from(&id("ZD618")), Ok(SwapDirection::TokenToBase));
        assert!(p.direction_from(&id("DAI")).is_err());
    }

    #[test]
    fn deserialized_pair_is_revalidated() {
        let Ok(p) = serde_json::from_str::<AssetPair>(r#"{"base":"ETH","token":"ETH"}"#) else {
            panic!("structurally valid json");
        };
        assert!(p.validate().is_err());
    }
}
