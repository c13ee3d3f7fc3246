//! Value types produced by inventory operations
//!
//! - [`WithdrawalPlan`]: the notes chosen for one withdrawal
//! - [`InventorySnapshot`]: holdings ordered largest denomination first, plus total value
//! - [`ReplenishReport`]: per-entry outcome of a replenish batch

use super::denomination::{Denomination, NoteCount};
use super::error::DispenseError;

/// Notes proposed to satisfy one withdrawal request
///
/// Entries are ordered by denomination descending and every count is positive.
/// A plan is either committed against the inventory as a whole or dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WithdrawalPlan {
    entries: Vec<(Denomination, NoteCount)>,
}

impl WithdrawalPlan {
    /// Build a plan from entries already in descending denomination order
    ///
    /// Zero counts are dropped.
    pub(crate) fn from_entries(entries: Vec<(Denomination, NoteCount)>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .collect();
        WithdrawalPlan { entries }
    }

    /// Entries as (denomination, count), largest denomination first
    pub fn entries(&self) -> &[(Denomination, NoteCount)] {
        &self.entries
    }

    /// Notes of `denomination` in this plan (0 if absent)
    pub fn count_of(&self, denomination: Denomination) -> NoteCount {
        self.entries
            .iter()
            .find(|&&(d, _)| d == denomination)
            .map_or(0, |&(_, count)| count)
    }

    /// Total number of notes dispensed
    pub fn note_count(&self) -> NoteCount {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Sum of denomination × count over the plan
    pub fn total_value(&self) -> u128 {
        self.entries
            .iter()
            .map(|&(denomination, count)| u128::from(denomination) * u128::from(count))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Point-in-time view of the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventorySnapshot {
    /// (denomination, count) for every accepted denomination, largest first
    pub holdings: Vec<(Denomination, NoteCount)>,

    /// Sum of denomination × count across all holdings
    pub total_value: u128,
}

impl InventorySnapshot {
    /// Build a snapshot from holdings in descending order
    pub fn from_holdings(holdings: Vec<(Denomination, NoteCount)>) -> Self {
        let total_value = holdings
            .iter()
            .map(|&(denomination, count)| u128::from(denomination) * u128::from(count))
            .fold(0u128, |acc, value| acc.saturating_add(value));

        InventorySnapshot {
            holdings,
            total_value,
        }
    }

    /// Count held for `denomination`, or `None` if it is not accepted
    pub fn count_of(&self, denomination: Denomination) -> Option<NoteCount> {
        self.holdings
            .iter()
            .find(|&&(d, _)| d == denomination)
            .map(|&(_, count)| count)
    }

    /// Total number of notes held
    pub fn note_count(&self) -> u128 {
        self.holdings
            .iter()
            .map(|&(_, count)| u128::from(count))
            .sum()
    }
}

/// A replenish entry that contributed nothing to the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedDeposit {
    pub denomination: Denomination,
    pub count: NoteCount,
    /// Why the entry was rejected (unsupported denomination or overflow)
    pub error: DispenseError,
}

/// Outcome of one replenish batch
///
/// Entries are reported in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplenishReport {
    pub accepted: Vec<(Denomination, NoteCount)>,
    pub rejected: Vec<RejectedDeposit>,
}

impl ReplenishReport {
    /// True when no entry was rejected
    pub fn is_fully_accepted(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Value added to the inventory by the accepted entries
    pub fn accepted_value(&self) -> u128 {
        self.accepted
            .iter()
            .map(|&(denomination, count)| u128::from(denomination) * u128::from(count))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_drops_zero_counts() {
        let plan = WithdrawalPlan::from_entries(vec![(2000, 1), (500, 0), (200, 1)]);
        assert_eq!(plan.entries(), &[(2000, 1), (200, 1)]);
        assert_eq!(plan.count_of(500), 0);
    }

    #[test]
    fn test_plan_totals() {
        let plan = WithdrawalPlan::from_entries(vec![(2000, 1), (500, 1), (200, 1)]);
        assert_eq!(plan.total_value(), 2700);
        assert_eq!(plan.note_count(), 3);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_snapshot_total_value() {
        let snapshot =
            InventorySnapshot::from_holdings(vec![(2000, 10), (500, 10), (200, 10), (100, 20)]);
        assert_eq!(snapshot.total_value, 29_000);
        assert_eq!(snapshot.note_count(), 50);
        assert_eq!(snapshot.count_of(200), Some(10));
        assert_eq!(snapshot.count_of(50), None);
    }

    #[test]
    fn test_snapshot_total_does_not_overflow_u64() {
        let snapshot = InventorySnapshot::from_holdings(vec![(u32::MAX, u64::MAX), (1, u64::MAX)]);
        let expected = u128::from(u32::MAX) * u128::from(u64::MAX) + u128::from(u64::MAX);
        assert_eq!(snapshot.total_value, expected);
    }

    #[test]
    fn test_report_accepted_value() {
        let report = ReplenishReport {
            accepted: vec![(2000, 5)],
            rejected: vec![RejectedDeposit {
                denomination: 50,
                count: 3,
                error: DispenseError::unsupported_denomination(50),
            }],
        };
        assert_eq!(report.accepted_value(), 10_000);
        assert!(!report.is_fully_accepted());
    }
}
