//! Balance settlement rule.
//!
//! Applies a requested debt against an account balance. The arithmetic is
//! kept as a pure function so adapters can run it inside a database
//! transaction and the rule itself stays trivially testable.

use serde::{Deserialize, Serialize};

use super::account::Account;
use super::history::AccountHistory;

/// Outcome of applying a debt against a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Balance after settlement, never negative.
    pub new_balance: i64,
    /// Portion of the requested debt left unpaid, never negative.
    pub remaining_debt: i64,
    /// Absolute difference between balance and debt. This is the amount a
    /// SPEND history row records. Note that when the debt is fully covered
    /// this equals the leftover balance, not the amount actually paid; the
    /// ledger has always kept this figure and it is preserved as-is.
    pub difference: i64,
}

/// Settlement together with the persisted state it produced.
///
/// `history` is `Some` iff the settlement wrote a SPEND row, which happens
/// exactly when [`Settlement::difference`] is non-zero.
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    /// The account with its updated balance.
    pub account: Account,
    /// Portion of the requested debt left unpaid.
    pub remaining_debt: i64,
    /// The SPEND record written for this settlement, if any.
    pub history: Option<AccountHistory>,
}

/// Settles a debt against a balance.
///
/// Both inputs are expected to be non-negative; callers validate before
/// invoking. If the balance covers the debt, the balance drops to the
/// difference and nothing remains owed. Otherwise the balance drops to zero
/// and the shortfall remains owed.
pub fn settle(balance: i64, debt: i64) -> Settlement {
    if debt <= balance {
        let difference = balance - debt;
        Settlement {
            new_balance: difference,
            remaining_debt: 0,
            difference,
        }
    } else {
        let difference = debt - balance;
        Settlement {
            new_balance: 0,
            remaining_debt: difference,
            difference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_below_balance() {
        let s = settle(100, 30);
        assert_eq!(s.new_balance, 70);
        assert_eq!(s.remaining_debt, 0);
        assert_eq!(s.difference, 70);
    }

    #[test]
    fn test_debt_above_balance() {
        let s = settle(30, 100);
        assert_eq!(s.new_balance, 0);
        assert_eq!(s.remaining_debt, 70);
        assert_eq!(s.difference, 70);
    }

    #[test]
    fn test_debt_equals_balance() {
        let s = settle(50, 50);
        assert_eq!(s.new_balance, 0);
        assert_eq!(s.remaining_debt, 0);
        // Zero difference means no history row is written.
        assert_eq!(s.difference, 0);
    }

    #[test]
    fn test_zero_debt_leaves_balance_untouched() {
        let s = settle(250, 0);
        assert_eq!(s.new_balance, 250);
        assert_eq!(s.remaining_debt, 0);
        assert_eq!(s.difference, 250);
    }

    #[test]
    fn test_zero_balance_zero_debt() {
        let s = settle(0, 0);
        assert_eq!(s.new_balance, 0);
        assert_eq!(s.remaining_debt, 0);
        assert_eq!(s.difference, 0);
    }

    #[test]
    fn test_remaining_debt_is_shortfall() {
        for (balance, debt) in [(0, 5), (10, 10), (10, 25), (200, 13)] {
            let s = settle(balance, debt);
            assert_eq!(s.remaining_debt, (debt - balance).max(0));
            assert!(s.new_balance >= 0);
        }
    }
}
