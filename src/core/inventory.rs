//! Denomination inventory module
//!
//! This module provides the `DenominationInventory` struct which holds the note
//! count for every accepted denomination and services withdrawals with a greedy
//! decomposition.
//!
//! The DenominationInventory is responsible for:
//! - Fixing the accepted denomination set (sorted largest first) at construction
//! - Accepting replenishment, entry by entry
//! - Planning and committing withdrawals as a single unit
//! - Reporting holdings and total value
//!
//! # Greedy decomposition
//!
//! Withdrawals walk the denominations from largest to smallest and take
//! `min(remaining / denomination, available)` notes of each. The walk is never
//! retried with another order and never falls back to an exhaustive search, so
//! it can fail even when a decomposition exists. Limited stock is enough to
//! trigger this (one 500 and three 200s cannot pay 600), as are non-canonical
//! denomination sets:
//!
//! ```
//! use cash_dispenser::config::InventoryConfig;
//! use cash_dispenser::core::DenominationInventory;
//! use cash_dispenser::types::DispenseError;
//!
//! let config = InventoryConfig::new(vec![400, 300]).with_initial_stock(vec![(400, 1), (300, 2)]);
//! let mut inventory = DenominationInventory::new(config).unwrap();
//!
//! // 300 + 300 would work, but greedy takes the 400 first and is left with 200.
//! assert!(matches!(
//!     inventory.withdraw(600),
//!     Err(DispenseError::InsufficientFunds { remaining: 200, .. })
//! ));
//! ```

use crate::config::InventoryConfig;
use crate::types::{
    Amount, Denomination, DispenseError, FeasibilityCheck, InventorySnapshot, NoteCount,
    RejectedDeposit, ReplenishReport, WithdrawalPlan, DEFAULT_DENOMINATIONS,
};

/// Notes held for one denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Holding {
    denomination: Denomination,
    count: NoteCount,
}

/// Holds note counts for a fixed set of denominations
///
/// Holdings are stored largest denomination first. That order is fixed at
/// construction and drives both `snapshot` output and the greedy pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationInventory {
    /// One entry per accepted denomination, sorted descending
    holdings: Vec<Holding>,
    /// Accepted denominations, descending (kept for the pre-check)
    denominations: Vec<Denomination>,
    feasibility: FeasibilityCheck,
}

impl DenominationInventory {
    /// Create an inventory from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Accepted denominations, initial stock and pre-check policy
    ///
    /// # Returns
    ///
    /// * `Ok(DenominationInventory)` - Every accepted denomination present, stocked per config
    /// * `Err(DispenseError)` - If the configuration is invalid
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if validation fails and `ArithmeticOverflow` if
    /// repeated initial stock entries overflow a count.
    pub fn new(config: InventoryConfig) -> Result<Self, DispenseError> {
        config.validate()?;

        let mut inventory = Self::empty(config.denominations, config.feasibility);

        for (denomination, count) in config.initial_stock {
            inventory.add_notes(denomination, count)?;
        }

        Ok(inventory)
    }

    /// Add notes to the inventory, entry by entry
    ///
    /// Each entry is handled independently: an accepted denomination has its
    /// count increased, anything else is rejected and reported. A rejected entry
    /// never blocks the others.
    ///
    /// # Arguments
    ///
    /// * `deposits` - (denomination, count) pairs in any order
    ///
    /// # Returns
    ///
    /// A report listing accepted and rejected entries in input order. Entries
    /// are rejected with `UnsupportedDenomination` or, if the count would
    /// overflow, `ArithmeticOverflow`.
    pub fn replenish<I>(&mut self, deposits: I) -> ReplenishReport
    where
        I: IntoIterator<Item = (Denomination, NoteCount)>,
    {
        let mut report = ReplenishReport::default();

        for (denomination, count) in deposits {
            match self.add_notes(denomination, count) {
                Ok(()) => report.accepted.push((denomination, count)),
                Err(error) => report.rejected.push(RejectedDeposit {
                    denomination,
                    count,
                    error,
                }),
            }
        }

        report
    }

    /// Dispense `amount` using the greedy decomposition
    ///
    /// The plan is computed first and committed only if it covers the whole
    /// amount. On any error the inventory is left exactly as it was.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to dispense
    ///
    /// # Returns
    ///
    /// * `Ok(WithdrawalPlan)` - The notes removed from the inventory
    /// * `Err(DispenseError)` - If the withdrawal cannot be serviced
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `InvalidAmount` if `amount <= 0`
    /// - `NoFeasibleDenomination` if the pre-check rejects the amount
    /// - `InsufficientFunds` if the greedy pass leaves a remainder
    pub fn withdraw(&mut self, amount: Amount) -> Result<WithdrawalPlan, DispenseError> {
        let plan = self.plan_withdrawal(amount)?;
        self.commit(&plan)?;
        Ok(plan)
    }

    /// Compute the greedy plan for `amount` without touching the inventory
    ///
    /// Same checks and errors as [`withdraw`](Self::withdraw).
    pub fn plan_withdrawal(&self, amount: Amount) -> Result<WithdrawalPlan, DispenseError> {
        if amount <= 0 {
            return Err(DispenseError::invalid_amount(amount));
        }
        let requested =
            u64::try_from(amount).map_err(|_| DispenseError::invalid_amount(amount))?;

        if !self.feasibility.permits(requested, &self.denominations) {
            return Err(DispenseError::no_feasible_denomination(requested));
        }

        let mut remaining = requested;
        let mut entries = Vec::new();

        for holding in &self.holdings {
            if remaining == 0 {
                break;
            }

            let value = u64::from(holding.denomination);
            let notes = (remaining / value).min(holding.count);
            if notes > 0 {
                entries.push((holding.denomination, notes));
                // notes * value <= remaining, so neither step can overflow
                remaining -= notes * value;
            }
        }

        if remaining > 0 {
            return Err(DispenseError::insufficient_funds(requested, remaining));
        }

        Ok(WithdrawalPlan::from_entries(entries))
    }

    /// Current holdings, largest denomination first, with total value
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::from_holdings(
            self.holdings
                .iter()
                .map(|holding| (holding.denomination, holding.count))
                .collect(),
        )
    }

    /// Notes held for `denomination`, or `None` if it is not accepted
    pub fn count_of(&self, denomination: Denomination) -> Option<NoteCount> {
        self.holding(denomination).map(|holding| holding.count)
    }

    /// Whether `denomination` is in the accepted set
    pub fn accepts(&self, denomination: Denomination) -> bool {
        self.holding(denomination).is_some()
    }

    /// Accepted denominations, largest first
    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    /// Sum of denomination × count
    pub fn total_value(&self) -> u128 {
        self.snapshot().total_value
    }

    pub fn feasibility(&self) -> FeasibilityCheck {
        self.feasibility
    }

    /// Zero stock for every denomination, sorted largest first
    fn empty(mut denominations: Vec<Denomination>, feasibility: FeasibilityCheck) -> Self {
        denominations.sort_unstable_by(|a, b| b.cmp(a));

        DenominationInventory {
            holdings: denominations
                .iter()
                .map(|&denomination| Holding {
                    denomination,
                    count: 0,
                })
                .collect(),
            denominations,
            feasibility,
        }
    }

    fn holding(&self, denomination: Denomination) -> Option<&Holding> {
        self.holdings
            .iter()
            .find(|holding| holding.denomination == denomination)
    }

    fn add_notes(
        &mut self,
        denomination: Denomination,
        count: NoteCount,
    ) -> Result<(), DispenseError> {
        let holding = self
            .holdings
            .iter_mut()
            .find(|holding| holding.denomination == denomination)
            .ok_or_else(|| DispenseError::unsupported_denomination(denomination))?;

        holding.count = holding
            .count
            .checked_add(count)
            .ok_or_else(|| DispenseError::arithmetic_overflow("replenish", denomination))?;

        Ok(())
    }

    /// Subtract a plan from the holdings
    ///
    /// All new counts are computed before any is written, so a failure leaves
    /// the holdings untouched.
    fn commit(&mut self, plan: &WithdrawalPlan) -> Result<(), DispenseError> {
        let mut updates = Vec::with_capacity(plan.entries().len());

        for &(denomination, notes) in plan.entries() {
            let index = self
                .holdings
                .iter()
                .position(|holding| holding.denomination == denomination)
                .ok_or_else(|| DispenseError::unsupported_denomination(denomination))?;

            let new_count = self.holdings[index]
                .count
                .checked_sub(notes)
                .ok_or_else(|| DispenseError::arithmetic_underflow("withdraw", denomination))?;

            updates.push((index, new_count));
        }

        for (index, new_count) in updates {
            self.holdings[index].count = new_count;
        }

        Ok(())
    }
}

impl Default for DenominationInventory {
    /// Default denominations {2000, 500, 200, 100}, no stock
    fn default() -> Self {
        Self::empty(DEFAULT_DENOMINATIONS.to_vec(), FeasibilityCheck::default())
    }
}
