//! Cash Dispenser Library
//! # Overview
//!
//! This library models a cash-dispensing unit: a fixed set of banknote
//! denominations, replenishment, and withdrawals decomposed greedily into notes.
//! A journal replay pipeline (sync and async strategies) drives it from CSV.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (denominations, plans, snapshots, errors)
//! - [`config`] - Construction-time inventory configuration
//! - [`core`] - Business logic components:
//!   - [`core::inventory`] - Denomination holdings and greedy withdrawal
//!   - [`core::engine`] - Journal operation processing
//!   - [`core::shared`] - Lock-guarded inventory for concurrent callers
//! - [`io`] - Journal parsing and holdings output
//! - [`strategy`] - Sync and async replay pipelines
//! - [`cli`] - CLI arguments parsing
//! - [`telemetry`] - Tracing subscriber setup
//!
//! # Withdrawals
//!
//! A withdrawal is checked in a fixed order and either fully committed or not
//! applied at all:
//!
//! 1. **InvalidAmount**: the amount is zero or negative
//! 2. **NoFeasibleDenomination**: the feasibility pre-check rejects the amount
//! 3. **InsufficientFunds**: the largest-first greedy pass leaves a remainder
//!
//! ```
//! use cash_dispenser::config::InventoryConfig;
//! use cash_dispenser::core::DenominationInventory;
//!
//! let config = InventoryConfig::default()
//!     .with_initial_stock(vec![(2000, 10), (500, 10), (200, 10), (100, 20)]);
//! let mut inventory = DenominationInventory::new(config).unwrap();
//!
//! let plan = inventory.withdraw(2700).unwrap();
//! assert_eq!(plan.entries(), &[(2000, 1), (500, 1), (200, 1)]);
//! assert_eq!(inventory.snapshot().total_value, 29_000 - 2700);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod strategy;
pub mod telemetry;
pub mod types;

pub use config::InventoryConfig;
pub use core::{CashInventory, DenominationInventory, DispenseEngine, SharedInventory};
pub use io::write_inventory_csv;
pub use types::{
    Amount, Denomination, DispenseError, FeasibilityCheck, InventorySnapshot, NoteCount,
    OperationOutcome, OperationRecord, OperationType, ReplenishReport, WithdrawalPlan,
};
