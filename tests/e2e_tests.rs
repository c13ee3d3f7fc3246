//! End-to-end integration tests
//!
//! These tests validate the complete journal replay pipeline using predefined
//! CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Replays all operations against a freshly configured inventory
//! 3. Generates the holdings CSV
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Happy path replenish and withdraw flows
//! - Greedy remainders that fail with insufficient funds
//! - Unsupported denominations in replenish rows
//! - Invalid and infeasible withdrawal amounts
//! - Malformed journal rows
//!
//! Each test is run twice: once with the synchronous strategy and once with the async strategy.

#[cfg(test)]
mod tests {
    use cash_dispenser::cli::StrategyType;
    use cash_dispenser::config::InventoryConfig;
    use cash_dispenser::strategy::create_strategy;
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;

    const EMPTY: &[(u32, u64)] = &[];
    const STOCKED: &[(u32, u64)] = &[(2000, 10), (500, 10), (200, 10), (100, 20)];

    /// Run a test fixture by replaying input.csv and comparing with expected.csv
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "happy_path")
    /// * `initial_stock` - Stock loaded into the default denominations before replay
    /// * `strategy_type` - Processing strategy to use (Sync or Async)
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Input or expected files cannot be read
    /// - Output doesn't match expected
    fn run_test_fixture(
        fixture_name: &str,
        initial_stock: &[(u32, u64)],
        strategy_type: StrategyType,
    ) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let config = InventoryConfig::default().with_initial_stock(initial_stock.to_vec());
        let strategy = create_strategy(strategy_type.clone(), None, config);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(Path::new(&input_path), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to replay journal: {}", e));

        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    /// End-to-end test for all fixtures with both processing strategies
    #[rstest]
    #[case("happy_path", EMPTY)]
    #[case("insufficient_funds", EMPTY)]
    #[case("drain_inventory", EMPTY)]
    #[case("unsupported_denomination", EMPTY)]
    #[case("invalid_amounts", EMPTY)]
    #[case("malformed_data", EMPTY)]
    #[case("stocked_dispenser", STOCKED)]
    fn test_fixtures(
        #[case] fixture: &str,
        #[case] initial_stock: &[(u32, u64)],
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, initial_stock, strategy);
    }

    #[rstest]
    fn test_invalid_config_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let config = InventoryConfig::new(vec![500, 0]);
        let strategy = create_strategy(strategy, None, config);
        let mut output = Vec::new();

        let result = strategy.process(
            Path::new("tests/fixtures/happy_path/input.csv"),
            &mut output,
        );

        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[rstest]
    fn test_missing_input_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let strategy = create_strategy(strategy, None, InventoryConfig::default());
        let mut output = Vec::new();

        let result = strategy.process(
            Path::new("tests/fixtures/does_not_exist.csv"),
            &mut output,
        );

        let error = result.expect_err("missing input should fail");
        assert!(
            error.contains("does_not_exist.csv"),
            "unexpected error: {}",
            error
        );
    }
}
