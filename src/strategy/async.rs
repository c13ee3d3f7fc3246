//! Asynchronous batch processing strategy
//!
//! This module provides an asynchronous implementation of the ProcessingStrategy
//! trait. The journal is read in batches with csv-async on a tokio runtime and
//! applied to a `SharedInventory`.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, worker_threads)
//!     ├── AsyncReader (batch CSV reading)
//!     └── SharedInventory (Arc<RwLock<DenominationInventory>>)
//! ```
//!
//! # Ordering
//!
//! Every operation touches the same inventory and greedy plans depend on the
//! holdings left by earlier operations, so records are applied strictly in
//! journal order. Batching only amortises reads; the output is identical to
//! the synchronous strategy for the same journal.

use crate::config::InventoryConfig;
use crate::core::{DenominationInventory, SharedInventory};
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_inventory_csv;
use crate::io::open_error;
use crate::strategy::{log_outcome, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Configuration for batch processing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of journal records read per batch
    pub batch_size: usize,
    /// Worker threads for the tokio runtime
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            worker_threads: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(batch_size: usize, worker_threads: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                fallback = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let worker_threads = if worker_threads == 0 {
            warn!(
                worker_threads,
                fallback = default.worker_threads,
                "invalid worker_threads, using default"
            );
            default.worker_threads
        } else {
            worker_threads
        };

        Self {
            batch_size,
            worker_threads,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    batch: BatchConfig,
    inventory: InventoryConfig,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy
    ///
    /// # Arguments
    ///
    /// * `batch` - Batch size and runtime worker threads
    /// * `inventory` - Configuration of the inventory the journal is replayed against
    pub fn new(batch: BatchConfig, inventory: InventoryConfig) -> Self {
        Self { batch, inventory }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Replay the journal in batches
    ///
    /// 1. Builds a tokio multi-threaded runtime with the configured workers
    /// 2. Wraps a fresh DenominationInventory in a SharedInventory
    /// 3. Reads records in batches through AsyncReader
    /// 4. Applies each record in order, logging after the lock is released
    /// 5. Writes the final holdings with csv_format::write_inventory_csv
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let inventory =
            DenominationInventory::new(self.inventory.clone()).map_err(|e| e.to_string())?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.batch.worker_threads)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let shared = SharedInventory::new(inventory);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| open_error(input_path, e).to_string())?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            loop {
                let batch = reader.read_batch(self.batch.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for record in batch {
                    let result = shared.process(record).await;
                    log_outcome(&result);
                }
            }

            let snapshot = shared.snapshot().await;
            write_inventory_csv(&snapshot, output)?;

            Ok(())
        })
    }
}
