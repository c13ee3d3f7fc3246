//! Error types for the cash dispenser
//!
//! This module defines all error types that can occur while configuring an
//! inventory, replaying an operation journal, or servicing a withdrawal.
//!
//! # Error Categories
//!
//! - **Withdrawal Errors**: Invalid amount, failed pre-check, insufficient notes
//! - **Replenish Errors**: Unsupported denomination, count overflow (per entry, non-fatal)
//! - **Configuration Errors**: Empty or malformed denomination set, bad initial stock
//! - **Journal Errors**: File not found, malformed CSV, unknown operation type

use super::denomination::{Amount, Denomination};
use thiserror::Error;

/// Main error type for the cash dispenser
///
/// Every variant is recoverable. Withdrawal errors leave the inventory
/// untouched; replenish errors reject a single entry of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispenseError {
    /// Requested amount is zero or negative
    #[error("Invalid withdrawal amount {amount}: amount must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Amount,
    },

    /// Amount failed the feasibility pre-check
    ///
    /// Raised before the greedy pass runs.
    #[error("Amount {amount} cannot be expressed with the accepted denominations")]
    NoFeasibleDenomination {
        /// The rejected amount
        amount: u64,
    },

    /// Greedy pass left a remainder
    ///
    /// The inventory cannot produce this exact amount even though individual
    /// notes may exist. No notes are deducted.
    #[error("Insufficient notes to dispense {requested}: {remaining} could not be covered")]
    InsufficientFunds {
        /// Requested amount
        requested: u64,
        /// Remainder left after the greedy pass
        remaining: u64,
    },

    /// Replenish entry for a denomination the machine does not accept
    #[error("Unsupported denomination: {denomination}")]
    UnsupportedDenomination {
        /// The rejected denomination
        denomination: Denomination,
    },

    /// A note count would exceed its representable range
    #[error("Arithmetic overflow in {operation} for denomination {denomination}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Denomination whose count would overflow
        denomination: Denomination,
    },

    /// A note count would go negative
    #[error("Arithmetic underflow in {operation} for denomination {denomination}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Denomination whose count would underflow
        denomination: Denomination,
    },

    /// Inventory configuration was rejected at construction
    #[error("Invalid inventory configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// Journal file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The malformed row is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown operation type in the journal
    #[error("Invalid operation type '{op_type}'")]
    InvalidOperationType {
        /// The unrecognised type string
        op_type: String,
    },

    /// A field required by the operation type is absent
    #[error("{op_type} operation is missing required field '{field}'")]
    MissingField {
        /// Operation type that requires the field
        op_type: String,
        /// Name of the missing field
        field: String,
    },
}

// Conversion from io::Error to DispenseError
impl From<std::io::Error> for DispenseError {
    fn from(error: std::io::Error) -> Self {
        DispenseError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to DispenseError
impl From<csv::Error> for DispenseError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DispenseError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DispenseError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Amount) -> Self {
        DispenseError::InvalidAmount { amount }
    }

    /// Create a NoFeasibleDenomination error
    pub fn no_feasible_denomination(amount: u64) -> Self {
        DispenseError::NoFeasibleDenomination { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(requested: u64, remaining: u64) -> Self {
        DispenseError::InsufficientFunds {
            requested,
            remaining,
        }
    }

    /// Create an UnsupportedDenomination error
    pub fn unsupported_denomination(denomination: Denomination) -> Self {
        DispenseError::UnsupportedDenomination { denomination }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, denomination: Denomination) -> Self {
        DispenseError::ArithmeticOverflow {
            operation: operation.to_string(),
            denomination,
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, denomination: Denomination) -> Self {
        DispenseError::ArithmeticUnderflow {
            operation: operation.to_string(),
            denomination,
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DispenseError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an InvalidOperationType error
    pub fn invalid_operation_type(op_type: &str) -> Self {
        DispenseError::InvalidOperationType {
            op_type: op_type.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(op_type: &str, field: &str) -> Self {
        DispenseError::MissingField {
            op_type: op_type.to_string(),
            field: field.to_string(),
        }
    }

    /// Whether this error came out of the withdrawal path
    pub fn is_withdrawal_failure(&self) -> bool {
        matches!(
            self,
            DispenseError::InvalidAmount { .. }
                | DispenseError::NoFeasibleDenomination { .. }
                | DispenseError::InsufficientFunds { .. }
        )
    }
}
