//! Denomination-related types for the cash dispenser
//!
//! This module defines the scalar types used throughout the inventory and the
//! pre-check policy that gates withdrawal requests before the greedy pass.

use clap::ValueEnum;

/// Face value of a banknote
///
/// Unit-agnostic positive integer (0 is rejected at construction).
pub type Denomination = u32;

/// Number of notes held or dispensed for a single denomination
pub type NoteCount = u64;

/// Requested withdrawal amount
///
/// Signed so that non-positive requests can be represented and rejected.
pub type Amount = i64;

/// Denominations accepted by a machine built with the default configuration
///
/// Listed largest first, which is also the order the greedy pass walks them.
pub const DEFAULT_DENOMINATIONS: [Denomination; 4] = [2000, 500, 200, 100];

/// Feasibility pre-check applied to a withdrawal before the greedy pass
///
/// Neither policy guarantees that a decomposition exists. They only reject
/// requests early; the greedy pass remains the single source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FeasibilityCheck {
    /// The amount must be at least the smallest accepted denomination
    #[default]
    #[value(name = "minimum")]
    MinimumDenomination,

    /// The amount must be an exact multiple of at least one accepted
    /// denomination, regardless of stock
    ///
    /// This is the check the historical machine performed. It can both reject
    /// amounts greedy would serve (350 with {200, 150}) and admit amounts it
    /// cannot (2100 with only 2000s in stock).
    #[value(name = "divisible")]
    DivisibleByAny,
}

impl FeasibilityCheck {
    /// Whether `amount` passes this pre-check against the accepted set
    ///
    /// `denominations` is the full accepted set; note counts are not consulted.
    pub fn permits(self, amount: u64, denominations: &[Denomination]) -> bool {
        match self {
            FeasibilityCheck::MinimumDenomination => denominations
                .iter()
                .min()
                .is_some_and(|&smallest| amount >= u64::from(smallest)),
            FeasibilityCheck::DivisibleByAny => denominations
                .iter()
                .any(|&denomination| amount % u64::from(denomination) == 0),
        }
    }
}
