use crate::config::{parse_stock_entry, InventoryConfig};
use crate::strategy::BatchConfig;
use crate::telemetry::LogFormat;
use crate::types::{Denomination, FeasibilityCheck, NoteCount, DEFAULT_DENOMINATIONS};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Replay a cash dispenser operation journal and report the final holdings
#[derive(Parser, Debug)]
#[command(name = "cash-dispenser")]
#[command(about = "Replay a cash dispenser operation journal and report the final holdings", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing the operation journal
    #[arg(value_name = "INPUT", help = "Path to the journal CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use for replaying the journal
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for synchronous or 'async' for batched asynchronous"
    )]
    pub strategy: StrategyType,

    /// Number of journal records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of journal records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Worker threads for the async runtime (async mode only)
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Worker threads for the async runtime (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Accepted denominations
    #[arg(
        long = "denominations",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated accepted denominations (default: 2000,500,200,100)"
    )]
    pub denominations: Option<Vec<Denomination>>,

    /// Initial stock as DENOM:COUNT pairs
    #[arg(
        long = "stock",
        value_name = "DENOM:COUNT",
        value_delimiter = ',',
        value_parser = parse_stock_entry,
        help = "Comma-separated initial stock, e.g. 2000:10,500:10"
    )]
    pub stock: Vec<(Denomination, NoteCount)>,

    /// Feasibility pre-check applied before the greedy pass
    #[arg(
        long = "feasibility",
        value_name = "POLICY",
        default_value = "minimum",
        help = "Pre-check: 'minimum' (amount >= smallest denomination) or 'divisible' (multiple of any denomination)"
    )]
    pub feasibility: FeasibilityCheck,

    /// Log output format (logs go to stderr)
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        default_value = "text",
        help = "Log format on stderr: 'text' or 'json'"
    )]
    pub log_format: LogFormat,
}

/// Available processing strategies
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Uses the provided values where given and defaults elsewhere. Zero values
    /// fall back to defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.worker_threads.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.worker_threads.unwrap_or(default.worker_threads),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// Create an InventoryConfig from CLI arguments
    ///
    /// The result is not validated here; the inventory validates it on construction.
    pub fn to_inventory_config(&self) -> InventoryConfig {
        let denominations = self
            .denominations
            .clone()
            .unwrap_or_else(|| DEFAULT_DENOMINATIONS.to_vec());

        InventoryConfig::new(denominations)
            .with_initial_stock(self.stock.clone())
            .with_feasibility(self.feasibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_strategy(&["program", "journal.csv"], StrategyType::Async)]
    #[case::explicit_sync(&["program", "--strategy", "sync", "journal.csv"], StrategyType::Sync)]
    #[case::explicit_async(&["program", "--strategy", "async", "journal.csv"], StrategyType::Async)]
    fn test_strategy_parsing(#[case] args: &[&str], #[case] expected: StrategyType) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match (&parsed.strategy, &expected) {
            (StrategyType::Sync, StrategyType::Sync) => (),
            (StrategyType::Async, StrategyType::Async) => (),
            _ => panic!("Expected {:?}, got {:?}", expected, parsed.strategy),
        }
    }

    #[rstest]
    #[case::all_defaults(&["program", "journal.csv"], 1000, num_cpus::get())]
    #[case::custom_batch_size(&["program", "--batch-size", "2000", "journal.csv"], 2000, num_cpus::get())]
    #[case::custom_workers(&["program", "--worker-threads", "8", "journal.csv"], 1000, 8)]
    #[case::zero_batch_size(&["program", "--batch-size", "0", "journal.csv"], 1000, num_cpus::get())]
    fn test_batch_config_conversion(
        #[case] args: &[&str],
        #[case] expected_batch_size: usize,
        #[case] expected_workers: usize,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_batch_config();

        assert_eq!(config.batch_size, expected_batch_size);
        assert_eq!(config.worker_threads, expected_workers);
    }

    #[test]
    fn test_default_inventory_config() {
        let parsed = CliArgs::try_parse_from(["program", "journal.csv"]).unwrap();

        assert_eq!(parsed.to_inventory_config(), InventoryConfig::default());
        assert_eq!(parsed.log_format, LogFormat::Text);
    }

    #[test]
    fn test_custom_inventory_config() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--denominations",
            "50,20,10",
            "--stock",
            "50:2,10:5",
            "--feasibility",
            "divisible",
            "journal.csv",
        ])
        .unwrap();

        let config = parsed.to_inventory_config();
        assert_eq!(config.denominations, vec![50, 20, 10]);
        assert_eq!(config.initial_stock, vec![(50, 2), (10, 5)]);
        assert_eq!(config.feasibility, FeasibilityCheck::DivisibleByAny);
    }

    #[test]
    fn test_repeated_stock_flags_accumulate() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--stock",
            "2000:1",
            "--stock",
            "100:4",
            "journal.csv",
        ])
        .unwrap();

        assert_eq!(parsed.stock, vec![(2000, 1), (100, 4)]);
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::invalid_strategy(&["program", "--strategy", "invalid", "journal.csv"])]
    #[case::invalid_stock(&["program", "--stock", "2000", "journal.csv"])]
    #[case::invalid_denomination(&["program", "--denominations", "abc", "journal.csv"])]
    #[case::invalid_feasibility(&["program", "--feasibility", "optimal", "journal.csv"])]
    #[case::invalid_log_format(&["program", "--log-format", "xml", "journal.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
