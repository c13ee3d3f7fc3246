//! Construction-time inventory configuration
//!
//! An [`InventoryConfig`] names the accepted denomination set, the optional
//! initial stock, and the feasibility pre-check. It is validated once, when
//! the inventory is built; the accepted set never changes afterwards.

use crate::types::{
    Denomination, DispenseError, FeasibilityCheck, NoteCount, DEFAULT_DENOMINATIONS,
};

/// Configuration for a [`DenominationInventory`](crate::core::DenominationInventory)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Accepted denominations, in any order
    pub denominations: Vec<Denomination>,
    /// Initial (denomination, count) pairs; repeated denominations accumulate
    pub initial_stock: Vec<(Denomination, NoteCount)>,
    /// Pre-check applied before the greedy pass
    pub feasibility: FeasibilityCheck,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            denominations: DEFAULT_DENOMINATIONS.to_vec(),
            initial_stock: Vec::new(),
            feasibility: FeasibilityCheck::default(),
        }
    }
}

impl InventoryConfig {
    /// Create a config accepting `denominations` with no initial stock
    pub fn new(denominations: Vec<Denomination>) -> Self {
        Self {
            denominations,
            ..Self::default()
        }
    }

    /// Set the initial stock
    pub fn with_initial_stock(mut self, stock: Vec<(Denomination, NoteCount)>) -> Self {
        self.initial_stock = stock;
        self
    }

    /// Set the feasibility pre-check
    pub fn with_feasibility(mut self, feasibility: FeasibilityCheck) -> Self {
        self.feasibility = feasibility;
        self
    }

    /// Check the configuration without building an inventory
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - The denomination set is empty
    /// - A denomination is zero
    /// - A denomination is listed twice
    /// - Initial stock names a denomination outside the accepted set
    pub fn validate(&self) -> Result<(), DispenseError> {
        if self.denominations.is_empty() {
            return Err(DispenseError::invalid_config(
                "at least one denomination is required",
            ));
        }

        if self.denominations.contains(&0) {
            return Err(DispenseError::invalid_config(
                "denominations must be positive",
            ));
        }

        let mut sorted = self.denominations.clone();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DispenseError::invalid_config(format!(
                "denomination {} is listed more than once",
                pair[0]
            )));
        }

        if let Some(&(denomination, _)) = self
            .initial_stock
            .iter()
            .find(|(denomination, _)| !self.denominations.contains(denomination))
        {
            return Err(DispenseError::invalid_config(format!(
                "initial stock names unsupported denomination {}",
                denomination
            )));
        }

        Ok(())
    }
}

/// Parse a `DENOM:COUNT` pair such as `2000:10`
pub fn parse_stock_entry(input: &str) -> Result<(Denomination, NoteCount), String> {
    let (denomination, count) = input
        .split_once(':')
        .ok_or_else(|| format!("expected DENOM:COUNT, got '{}'", input))?;

    let denomination = denomination
        .trim()
        .parse::<Denomination>()
        .map_err(|e| format!("invalid denomination '{}': {}", denomination.trim(), e))?;
    let count = count
        .trim()
        .parse::<NoteCount>()
        .map_err(|e| format!("invalid count '{}': {}", count.trim(), e))?;

    Ok((denomination, count))
}
