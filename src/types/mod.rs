//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `denomination`: Scalar aliases, default denominations, feasibility policy
//! - `plan`: Withdrawal plans, snapshots, replenish reports
//! - `operation`: Journal operation types and records
//! - `error`: Error types for the cash dispenser

pub mod denomination;
pub mod error;
pub mod operation;
pub mod plan;

pub use denomination::{Amount, Denomination, FeasibilityCheck, NoteCount, DEFAULT_DENOMINATIONS};
pub use error::DispenseError;
pub use operation::{OperationOutcome, OperationRecord, OperationType};
pub use plan::{InventorySnapshot, RejectedDeposit, ReplenishReport, WithdrawalPlan};
