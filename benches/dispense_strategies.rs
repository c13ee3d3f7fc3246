//! Benchmark suite for comparing processing strategies
//!
//! This benchmark compares the performance of synchronous and asynchronous
//! journal replay using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Journals
//!
//! Journals are generated into temporary files before measurement, at three
//! sizes (100, 10,000 and 1,000,000 operations). Each journal mixes:
//! - Replenish rows, including an unsupported denomination
//! - Withdrawals that succeed and ones that fail the greedy pass
//! - Periodic snapshots

use cash_dispenser::cli::StrategyType;
use cash_dispenser::config::InventoryConfig;
use cash_dispenser::strategy::{create_strategy, BatchConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn main() {
    divan::main();
}

const SIZES: &[usize] = &[100, 10_000, 1_000_000];

/// Write a deterministic journal of `operations` rows
fn generate_journal(operations: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    let mut content = String::from("type,denomination,count,amount\n");

    for i in 0..operations {
        let row = match i % 10 {
            0 => "replenish,2000,5,\n".to_string(),
            1 => "replenish,500,8,\n".to_string(),
            2 => "replenish,100,12,\n".to_string(),
            3 => "replenish,50,3,\n".to_string(),
            4 => "snapshot,,,\n".to_string(),
            n => format!("withdraw,,,{}\n", 100 * ((i % 37) + n)),
        };
        content.push_str(&row);
    }

    file.write_all(content.as_bytes())
        .expect("Failed to write journal");
    file.flush().expect("Failed to flush journal");
    file
}

/// Benchmark synchronous replay across journal sizes
#[divan::bench(args = SIZES, sample_count = 10)]
fn sync_strategy(bencher: divan::Bencher, operations: usize) {
    let journal = generate_journal(operations);
    let strategy = create_strategy(StrategyType::Sync, None, InventoryConfig::default());

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .process(journal.path(), &mut output)
            .expect("Processing failed");
    });
}

/// Benchmark asynchronous batched replay across journal sizes
#[divan::bench(args = SIZES, sample_count = 10)]
fn async_strategy(bencher: divan::Bencher, operations: usize) {
    let journal = generate_journal(operations);
    let strategy = create_strategy(
        StrategyType::Async,
        Some(BatchConfig::default()),
        InventoryConfig::default(),
    );

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .process(journal.path(), &mut output)
            .expect("Processing failed");
    });
}
