//! Claim-share ledger: per-holder balances plus the outstanding supply.

use std::collections::BTreeMap;

use crate::domain::{HolderId, Shares};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Holder balances and the total supply they must add up to.
///
/// Holders whose balance drops to zero are removed, so
/// [`holders`](Self::holders) only reports live positions.
///
/// `mint` and `burn` validate fully before writing; on `Err` the ledger
/// is untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLedger {
    balances: BTreeMap<HolderId, Shares>,
    total: Shares,
}

impl ShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding share supply.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Balance of `holder`; zero if unknown.
    #[must_use]
    pub fn balance_of(&self, holder: &HolderId) -> Shares {
        self.balances.get(holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Live holders and their balances, ordered by id.
    pub fn holders(&self) -> impl Iterator<Item = (&HolderId, Shares)> {
        self.balances.iter().map(|(id, s)| (id, *s))
    }

    /// Number of holders with a non-zero balance.
    #[must_use]
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }

    /// Checks whether minting `shares` would succeed and returns the
    /// supply after the mint.
    ///
    /// No balance exceeds the supply, so the answer holds for every holder.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `shares` is zero.
    /// - [`AmmError::Overflow`] if the supply would exceed `u128`.
    pub fn check_mint(&self, shares: Shares) -> Result<Shares> {
        if shares.is_zero() {
            return Err(AmmError::InvalidQuantity("cannot mint zero shares"));
        }
        self.total.safe_add(&shares, "share supply overflow")
    }

    /// Credits `shares` to `holder` and grows the supply.
    ///
    /// # Errors
    ///
    /// See [`check_mint`](Self::check_mint).
    pub fn mint(&mut self, holder: &HolderId, shares: Shares) -> Result<()> {
        let total = self.check_mint(shares)?;
        // balance <= total, so this cannot fail once the supply fits.
        let balance = self
            .balance_of(holder)
            .safe_add(&shares, "share balance overflow")?;
        self.balances.insert(holder.clone(), balance);
        self.total = total;
        Ok(())
    }

    /// Checks whether burning `shares` from `holder` would succeed.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `shares` is zero.
    /// - [`AmmError::InsufficientBalance`] if `holder` owns fewer shares.
    pub fn check_burn(&self, holder: &HolderId, shares: Shares) -> Result<()> {
        self.next_burn(holder, shares).map(|_| ())
    }

    /// Debits `shares` from `holder` and shrinks the supply.
    ///
    /// # Errors
    ///
    /// See [`check_burn`](Self::check_burn).
    pub fn burn(&mut self, holder: &HolderId, shares: Shares) -> Result<()> {
        let (balance, total) = self.next_burn(holder, shares)?;
        if balance.is_zero() {
            self.balances.remove(holder);
        } else {
            self.balances.insert(holder.clone(), balance);
        }
        self.total = total;
        Ok(())
    }

    /// Recomputes the sum of all balances and compares it with the supply.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if the balances sum past `u128`.
    /// - [`AmmError::InvariantViolation`] if the sum and supply differ.
    pub fn verify(&self) -> Result<()> {
        let sum = self
            .balances
            .values()
            .try_fold(Shares::ZERO, |acc, s| acc.safe_add(s, "share balance sum"))?;
        if sum != self.total {
            return Err(AmmError::InvariantViolation(format!(
                "share balances sum to {sum} but supply is {}",
                self.total
            )));
        }
        Ok(())
    }

    fn next_burn(&self, holder: &HolderId, shares: Shares) -> Result<(Shares, Shares)> {
        if shares.is_zero() {
            return Err(AmmError::InvalidQuantity("cannot burn zero shares"));
        }
        let available = self.balance_of(holder);
        if shares > available {
            return Err(AmmError::InsufficientBalance {
                requested: shares.get(),
                available: available.get(),
            });
        }
        let balance = available.safe_sub(&shares, "share balance underflow")?;
        let total = self.total.safe_sub(&shares, "share supply underflow")?;
        Ok((balance, total))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn holder(name: &str) -> HolderId {
        let Ok(id) = HolderId::new(name) else {
            panic!("valid holder id");
        };
        id
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let (alice, bob) = (holder("alice"), holder("bob"));
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(&alice, Shares::new(100)).is_ok());
        assert!(ledger.mint(&bob, Shares::new(50)).is_ok());
        assert!(ledger.mint(&alice, Shares::new(5)).is_ok());
        assert_eq!(ledger.total(), Shares::new(155));
        assert_eq!(ledger.balance_of(&alice), Shares::new(105));
        assert!(ledger.verify().is_ok());

        assert!(ledger.burn(&alice, Shares::new(105)).is_ok());
        assert_eq!(ledger.total(), Shares::new(50));
        assert_eq!(ledger.holder_count(), 1);
        assert!(ledger.verify().is_ok());
    }

    #[test]
    fn burn_more_than_balance() {
        let alice = holder("alice");
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(&alice, Shares::new(10)).is_ok());
        let before = ledger.clone();
        assert_eq!(
            ledger.burn(&alice, Shares::new(11)),
            Err(AmmError::InsufficientBalance {
                requested: 11,
                available: 10
            })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn burn_from_unknown_holder() {
        let mut ledger = ShareLedger::new();
        assert_eq!(
            ledger.burn(&holder("ghost"), Shares::new(1)),
            Err(AmmError::InsufficientBalance {
                requested: 1,
                available: 0
            })
        );
    }

    #[test]
    fn zero_amounts_rejected() {
        let alice = holder("alice");
        let mut ledger = ShareLedger::new();
        assert!(matches!(
            ledger.mint(&alice, Shares::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert!(matches!(
            ledger.check_burn(&alice, Shares::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
        assert_eq!(ledger.holder_count(), 0);
    }

    #[test]
    fn supply_overflow_leaves_ledger_untouched() {
        let (alice, bob) = (holder("alice"), holder("bob"));
        let mut ledger = ShareLedger::new();
        assert!(ledger.mint(&alice, Shares::new(u128::MAX)).is_ok());
        assert!(matches!(
            ledger.mint(&bob, Shares::new(1)),
            Err(AmmError::Overflow(_))
        ));
        assert_eq!(ledger.balance_of(&bob), Shares::ZERO);
        assert_eq!(ledger.total(), Shares::new(u128::MAX));
    }

    #[test]
    fn check_mint_reports_next_supply() {
        let alice = holder("alice");
        let mut ledger = ShareLedger::new();
        assert_eq!(ledger.check_mint(Shares::new(7)), Ok(Shares::new(7)));
        assert!(ledger.mint(&alice, Shares::new(u128::MAX - 1)).is_ok());
        assert_eq!(ledger.check_mint(Shares::new(1)), Ok(Shares::new(u128::MAX)));
        assert!(matches!(
            ledger.check_mint(Shares::new(2)),
            Err(AmmError::Overflow(_))
        ));
        assert!(matches!(
            ledger.check_mint(Shares::ZERO),
            Err(AmmError::InvalidQuantity(_))
        ));
        // Checking never writes.
        assert_eq!(ledger.total(), Shares::new(u128::MAX - 1));
        assert_eq!(ledger.holder_count(), 1);
    }

    #[test]
    fn holders_are_ordered() {
        let mut ledger = ShareLedger::new();
        for name in ["carol", "alice", "bob"] {
            assert!(ledger.mint(&holder(name), Shares::new(1)).is_ok());
        }
        let names: Vec<&str> = ledger.holders().map(|(id, _)| id.as_str()).collect();
        assert_eq!(names, ["alice", "bob", "carol"]);
    }
}
