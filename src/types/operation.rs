//! Operation journal types for the cash dispenser
//!
//! A journal is a sequence of operations replayed against one inventory.
//! Each record carries only the fields its operation type needs.

use super::denomination::{Amount, Denomination, NoteCount};
use super::plan::{InventorySnapshot, ReplenishReport, WithdrawalPlan};

/// Operation types supported by the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Add notes of one denomination
    ///
    /// Requires `denomination` and `count`. Unsupported denominations are
    /// reported, not fatal.
    Replenish,

    /// Dispense an amount using the greedy decomposition
    ///
    /// Requires `amount`.
    Withdraw,

    /// Read the current holdings
    Snapshot,
}

impl OperationType {
    /// Lowercase name as it appears in the journal
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Replenish => "replenish",
            OperationType::Withdraw => "withdraw",
            OperationType::Snapshot => "snapshot",
        }
    }
}

/// One journal row after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    pub op_type: OperationType,
    pub denomination: Option<Denomination>,
    pub count: Option<NoteCount>,
    pub amount: Option<Amount>,
}

impl OperationRecord {
    /// Replenish `count` notes of `denomination`
    pub fn replenish(denomination: Denomination, count: NoteCount) -> Self {
        OperationRecord {
            op_type: OperationType::Replenish,
            denomination: Some(denomination),
            count: Some(count),
            amount: None,
        }
    }

    /// Withdraw `amount`
    pub fn withdraw(amount: Amount) -> Self {
        OperationRecord {
            op_type: OperationType::Withdraw,
            denomination: None,
            count: None,
            amount: Some(amount),
        }
    }

    pub fn snapshot() -> Self {
        OperationRecord {
            op_type: OperationType::Snapshot,
            denomination: None,
            count: None,
            amount: None,
        }
    }
}

/// Successful result of applying an [`OperationRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Replenished(ReplenishReport),
    Dispensed(WithdrawalPlan),
    Snapshot(InventorySnapshot),
}
