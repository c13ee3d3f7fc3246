//! Thread-safe inventory handle for concurrent callers
//!
//! This module provides the `SharedInventory` struct, a clonable handle to one
//! `DenominationInventory` behind a tokio `RwLock`.
//!
//! # Design
//!
//! A withdrawal reads every holding to build its plan and then writes the
//! holdings it uses. Per-denomination locking cannot make that check-then-commit
//! sequence atomic, so the whole inventory sits behind one lock:
//!
//! - `replenish`, `withdraw` and `process` take the write lock for the full
//!   check and commit
//! - `snapshot` takes the read lock, so snapshots run alongside each other but
//!   never observe a half-applied plan
//!
//! The guard is dropped before any method returns. Callers log or print results
//! after the lock is released.

use crate::core::engine::apply_operation;
use crate::core::inventory::DenominationInventory;
use crate::types::{
    Amount, Denomination, DispenseError, InventorySnapshot, NoteCount, OperationOutcome,
    OperationRecord, OperationType, ReplenishReport, WithdrawalPlan,
};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Clonable, thread-safe handle to a single inventory
///
/// All clones refer to the same holdings.
#[derive(Debug, Clone)]
pub struct SharedInventory {
    inner: Arc<RwLock<DenominationInventory>>,
}

impl SharedInventory {
    /// Wrap an inventory for shared access
    pub fn new(inventory: DenominationInventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    /// Add notes, entry by entry, under the write lock
    pub async fn replenish<I>(&self, deposits: I) -> ReplenishReport
    where
        I: IntoIterator<Item = (Denomination, NoteCount)>,
    {
        let mut inventory = self.inner.write().await;
        inventory.replenish(deposits)
    }

    /// Plan and commit a withdrawal as one step under the write lock
    ///
    /// No other replenish or withdrawal can run between the plan and the
    /// commit. On error the holdings are unchanged.
    pub async fn withdraw(&self, amount: Amount) -> Result<WithdrawalPlan, DispenseError> {
        let mut inventory = self.inner.write().await;
        inventory.withdraw(amount)
    }

    /// Holdings and total value under the read lock
    pub async fn snapshot(&self) -> InventorySnapshot {
        self.inner.read().await.snapshot()
    }

    /// Apply a journal record
    ///
    /// Snapshot records only take the read lock.
    pub async fn process(
        &self,
        record: OperationRecord,
    ) -> Result<OperationOutcome, DispenseError> {
        if record.op_type == OperationType::Snapshot {
            return Ok(OperationOutcome::Snapshot(self.snapshot().await));
        }

        let mut inventory = self.inner.write().await;
        apply_operation(&mut *inventory, record)
    }
}
