//! Processing strategy module for journal replay
//!
//! This module defines the Strategy pattern for complete replay pipelines,
//! encompassing journal parsing, inventory updates and holdings output. This
//! allows different implementations (synchronous, asynchronous batch) to be
//! selected at runtime.

use crate::cli::StrategyType;
use crate::config::InventoryConfig;
use crate::types::{DispenseError, OperationOutcome};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete replay pipelines
///
/// Each strategy reads operations from a journal file, applies them in order
/// to a freshly built inventory, and writes the final holdings to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Replay the journal at `input_path` and write holdings to `output`
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the journal was replayed (individual operation failures included)
    /// * `Err(String)` if a fatal error occurred
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The inventory configuration is invalid
    /// - The input file cannot be opened
    /// - Output cannot be written
    ///
    /// Failed withdrawals, rejected replenish entries and malformed rows are
    /// logged and do not stop the replay.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `batch` - Optional configuration for async batch processing (ignored for sync)
/// * `inventory` - Configuration of the inventory the journal is replayed against
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    batch: Option<BatchConfig>,
    inventory: InventoryConfig,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(inventory)),
        StrategyType::Async => {
            let batch = batch.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(batch, inventory))
        }
    }
}

/// Log the result of one applied operation
///
/// Called after the inventory has been released.
pub(crate) fn log_outcome(result: &Result<OperationOutcome, DispenseError>) {
    match result {
        Ok(OperationOutcome::Replenished(report)) => {
            for &(denomination, count) in &report.accepted {
                debug!(denomination, count, "replenished");
            }
            for rejected in &report.rejected {
                warn!(
                    denomination = rejected.denomination,
                    count = rejected.count,
                    error = %rejected.error,
                    "replenish entry rejected"
                );
            }
        }
        Ok(OperationOutcome::Dispensed(plan)) => {
            debug!(
                amount = %plan.total_value(),
                notes = plan.note_count(),
                plan = ?plan.entries(),
                "dispensed"
            );
        }
        Ok(OperationOutcome::Snapshot(snapshot)) => {
            info!(
                holdings = ?snapshot.holdings,
                total_value = %snapshot.total_value,
                "inventory snapshot"
            );
        }
        Err(error) if error.is_withdrawal_failure() => info!(%error, "withdrawal declined"),
        Err(error) => warn!(%error, "operation failed"),
    }
}
