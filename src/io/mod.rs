//! I/O module
//!
//! Handles journal parsing and holdings output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous journal reader with iterator interface
//! - `async_reader` - Asynchronous journal reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{convert_csv_record, write_inventory_csv, CsvRecord};
pub use sync_reader::SyncReader;

use crate::types::DispenseError;
use std::path::Path;

/// Map a failure to open `path` onto the crate error type
pub(crate) fn open_error(path: &Path, error: std::io::Error) -> DispenseError {
    if error.kind() == std::io::ErrorKind::NotFound {
        DispenseError::FileNotFound {
            path: path.display().to_string(),
        }
    } else {
        DispenseError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), error),
        }
    }
}
