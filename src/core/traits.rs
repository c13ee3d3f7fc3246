//! Core trait for cash inventories
//!
//! This module defines the seam the operation engine works against, so the
//! engine can drive any inventory that offers the three core operations.

use crate::types::{
    Amount, Denomination, DispenseError, InventorySnapshot, NoteCount, ReplenishReport,
    WithdrawalPlan,
};

/// Trait for a note inventory that can be replenished and drawn down
///
/// Implementations must leave their state untouched when `withdraw` fails and
/// must report holdings largest denomination first.
pub trait CashInventory {
    /// Add notes, entry by entry; unsupported entries are reported, not fatal
    fn replenish(&mut self, deposits: Vec<(Denomination, NoteCount)>) -> ReplenishReport;

    /// Dispense `amount`, committing the plan only on success
    fn withdraw(&mut self, amount: Amount) -> Result<WithdrawalPlan, DispenseError>;

    /// Current holdings and total value
    fn snapshot(&self) -> InventorySnapshot;
}

impl CashInventory for super::DenominationInventory {
    fn replenish(&mut self, deposits: Vec<(Denomination, NoteCount)>) -> ReplenishReport {
        super::DenominationInventory::replenish(self, deposits)
    }

    fn withdraw(&mut self, amount: Amount) -> Result<WithdrawalPlan, DispenseError> {
        super::DenominationInventory::withdraw(self, amount)
    }

    fn snapshot(&self) -> InventorySnapshot {
        super::DenominationInventory::snapshot(self)
    }
}
