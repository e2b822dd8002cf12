//! Builder pattern API for ergonomic table export.
//!
//! This module provides a fluent builder interface for configuring and
//! executing repeat table exports from library code.
//!
//! # Example
//!
//! ```rust,no_run
//! use trunit::builder::UnitTable;
//!
//! let rows = UnitTable::new()
//!     .model("phylo_gap01")
//!     .rows("annotated/")?;
//!
//! for row in rows {
//!     println!("{}:{} {}", row.seq, row.begin, row.canonical_unit);
//! }
//! # Ok::<(), trunit::error::TrunitError>(())
//! ```

use std::{fmt::Debug, io::Write, path::Path};

use crate::{
    cli::OutputFormat,
    error::TrunitError,
    run::{collect_rows, export_table},
    table::{UnitRow, DEFAULT_MODEL},
};

/// A builder for configuring repeat table exports.
///
/// Use [`UnitTable::new()`] to create a new builder, configure it with the
/// fluent API, then call [`rows()`](UnitTable::rows) to get the assembled
/// rows or [`write_to()`](UnitTable::write_to) to serialize them.
#[derive(Debug, Clone)]
pub struct UnitTable {
    model: String,
    format: OutputFormat,
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTable {
    /// Creates a new `UnitTable` builder with default settings.
    ///
    /// Default settings:
    /// - `model`: `phylo_gap01`
    /// - `format`: TSV
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            format: OutputFormat::Tsv,
        }
    }

    /// Sets the statistical model whose scores fill the score columns.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the output format used by [`write_to()`](UnitTable::write_to).
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Assembles the rows for every repeat stored in `dir`.
    ///
    /// Rows are sorted by `(seq, begin)` and always carry both derived unit
    /// strings.
    ///
    /// # Errors
    ///
    /// Returns `TrunitError` on a malformed list or a missing model entry.
    pub fn rows<P>(&self, dir: P) -> Result<Vec<UnitRow>, TrunitError>
    where
        P: AsRef<Path> + Debug,
    {
        collect_rows(dir, &self.model)
    }

    /// Assembles the rows for `dir` and writes them in the configured format.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns `TrunitError` on assembly or write failure.
    pub fn write_to<P, W>(&self, dir: P, writer: W) -> Result<usize, TrunitError>
    where
        P: AsRef<Path> + Debug,
        W: Write,
    {
        export_table(dir, writer, self.format, &self.model)
    }
}
