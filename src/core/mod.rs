//! Core business logic module
//!
//! This module contains the cash inventory components:
//! - `inventory` - Denomination holdings and greedy withdrawal decomposition
//! - `traits` - Trait abstraction over inventories
//! - `engine` - Journal operation processing
//! - `shared` - Lock-guarded inventory handle for concurrent callers

pub mod engine;
pub mod inventory;
pub mod shared;
pub mod traits;

pub use engine::{apply_operation, DispenseEngine};
pub use inventory::DenominationInventory;
pub use shared::SharedInventory;
pub use traits::CashInventory;
