//! Operation processing engine
//!
//! This module provides the DispenseEngine that applies journal operations to an
//! inventory, and the `apply_operation` routine shared with the concurrent
//! `SharedInventory`.
//!
//! The engine enforces journal rules such as:
//! - Replenish rows carry a denomination and a count
//! - Withdraw rows carry an amount
//! - Snapshot rows carry nothing and never mutate state

use crate::core::inventory::DenominationInventory;
use crate::core::traits::CashInventory;
use crate::types::{
    DispenseError, InventorySnapshot, OperationOutcome, OperationRecord, OperationType,
};

/// Apply a single operation record to an inventory
///
/// # Arguments
///
/// * `inventory` - The inventory to operate on
/// * `record` - The operation to apply
///
/// # Returns
///
/// * `Ok(OperationOutcome)` - What the operation produced
/// * `Err(DispenseError)` - If the record is incomplete or the withdrawal fails
///
/// # Errors
///
/// Returns an error if:
/// - A replenish record lacks a denomination or count (`MissingField`)
/// - A withdraw record lacks an amount (`MissingField`)
/// - The withdrawal itself fails (`InvalidAmount`, `NoFeasibleDenomination`, `InsufficientFunds`)
///
/// A replenish of an unsupported denomination is not an error here; it shows
/// up in the returned report.
pub fn apply_operation<I: CashInventory>(
    inventory: &mut I,
    record: OperationRecord,
) -> Result<OperationOutcome, DispenseError> {
    match record.op_type {
        OperationType::Replenish => {
            let op = OperationType::Replenish.as_str();
            let denomination = record
                .denomination
                .ok_or_else(|| DispenseError::missing_field(op, "denomination"))?;
            let count = record
                .count
                .ok_or_else(|| DispenseError::missing_field(op, "count"))?;

            Ok(OperationOutcome::Replenished(
                inventory.replenish(vec![(denomination, count)]),
            ))
        }
        OperationType::Withdraw => {
            let amount = record.amount.ok_or_else(|| {
                DispenseError::missing_field(OperationType::Withdraw.as_str(), "amount")
            })?;

            inventory.withdraw(amount).map(OperationOutcome::Dispensed)
        }
        OperationType::Snapshot => Ok(OperationOutcome::Snapshot(inventory.snapshot())),
    }
}

/// Operation processing engine
///
/// Owns one inventory and applies journal records to it in order.
pub struct DispenseEngine<I: CashInventory = DenominationInventory> {
    inventory: I,
}

impl<I: CashInventory> DispenseEngine<I> {
    /// Create an engine around an existing inventory
    pub fn new(inventory: I) -> Self {
        DispenseEngine { inventory }
    }

    /// Process a single operation record
    ///
    /// See [`apply_operation`] for the rules and errors.
    pub fn process(&mut self, record: OperationRecord) -> Result<OperationOutcome, DispenseError> {
        apply_operation(&mut self.inventory, record)
    }

    /// Current holdings for output
    pub fn snapshot(&self) -> InventorySnapshot {
        self.inventory.snapshot()
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }
}

impl Default for DispenseEngine<DenominationInventory> {
    fn default() -> Self {
        Self::new(DenominationInventory::default())
    }
}
