//! Cash Dispenser CLI
//!
//! Command-line interface for replaying operation journals against a cash
//! dispenser inventory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- journal.csv > holdings.csv
//! cargo run -- --strategy sync journal.csv > holdings.csv
//! cargo run -- --stock 2000:10,500:10,200:11,100:20 journal.csv > holdings.csv
//! cargo run -- --denominations 50,20,10 --feasibility divisible journal.csv
//! RUST_LOG=debug cargo run -- --log-format json journal.csv
//! ```
//!
//! The program reads operations from the journal, applies them in order, and
//! writes the final holdings to stdout. Per-operation outcomes are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid configuration, file not found, output not writable, etc.)

use cash_dispenser::cli;
use cash_dispenser::strategy;
use cash_dispenser::telemetry;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    telemetry::init(args.log_format);

    let strategy = {
        let batch = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy.clone(), batch, args.to_inventory_config())
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        error!(error = %e, "journal replay failed");
        process::exit(1);
    }
}
