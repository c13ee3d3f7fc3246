//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates journal replay by coordinating
//! between the SyncReader (for CSV input) and DispenseEngine (for inventory logic).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Operation handling to `DispenseEngine`
//! - CSV output to `csv_format::write_inventory_csv`
//!
//! The engine owns the inventory outright, so exclusive access during a
//! withdrawal is enforced by `&mut` rather than a lock.

use crate::config::InventoryConfig;
use crate::core::{DenominationInventory, DispenseEngine};
use crate::io::csv_format::write_inventory_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{log_outcome, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use cash_dispenser::config::InventoryConfig;
/// use cash_dispenser::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(InventoryConfig::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("journal.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyncProcessingStrategy {
    inventory: InventoryConfig,
}

impl SyncProcessingStrategy {
    /// Create a strategy that replays journals against `inventory`
    pub fn new(inventory: InventoryConfig) -> Self {
        Self { inventory }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Replay the journal one record at a time
    ///
    /// 1. Builds a DenominationInventory from the configuration
    /// 2. Streams records from the journal with SyncReader
    /// 3. Applies each record through the DispenseEngine, logging the outcome
    /// 4. Writes the final holdings with csv_format::write_inventory_csv
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let inventory =
            DenominationInventory::new(self.inventory.clone()).map_err(|e| e.to_string())?;
        let mut engine = DispenseEngine::new(inventory);

        let reader = SyncReader::new(input_path).map_err(|e| e.to_string())?;

        for result in reader {
            match result {
                Ok(record) => log_outcome(&engine.process(record)),
                Err(error) => warn!(%error, "skipping journal record"),
            }
        }

        write_inventory_csv(&engine.snapshot(), output)?;

        Ok(())
    }
}
