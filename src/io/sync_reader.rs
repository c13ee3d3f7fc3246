//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over operation records from a journal file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! SyncReader implements the Iterator trait, yielding Result<OperationRecord, String>
//! for each CSV row:
//!
//! ```no_run
//! use cash_dispenser::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("journal.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Applying operation: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual row errors are yielded as Err variants, prefixed with the line number

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::io::open_error;
use crate::types::{DispenseError, OperationRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous journal reader
///
/// Reads one row at a time; memory use does not grow with the journal.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Open a journal file for streaming iteration
    ///
    /// The CSV reader trims whitespace, allows flexible field counts (trailing
    /// empty columns may be omitted) and uses an 8KB buffer.
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if nothing exists at `path`
    /// * `IoError` for any other open failure
    pub fn new(path: &Path) -> Result<Self, DispenseError> {
        let file = File::open(path).map_err(|e| open_error(path, e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<OperationRecord, String>;

    /// Get the next operation record from the journal
    ///
    /// # Returns
    ///
    /// * `Some(Ok(OperationRecord))` - Successfully parsed record
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<CsvRecord>();

        let item = deserializer.next()?;
        self.line_num += 1;
        // +1 for the header row
        let line = self.line_num + 1;

        Some(match item {
            Ok(csv_record) => {
                convert_csv_record(csv_record).map_err(|e| format!("Line {}: {}", line, e))
            }
            Err(e) => match DispenseError::from(e) {
                // csv already reports where the record starts
                error @ DispenseError::ParseError { line: Some(_), .. } => Err(error.to_string()),
                error => Err(format!("Line {}: {}", line, error)),
            },
        })
    }
}
