//! Tabular assembly and export of annotated repeats.
//!
//! Downstream analysis consumes one flat table with a row per repeat, the
//! derived unit strings, and the score columns of a single statistical
//! model. This module builds those rows and serializes them as delimited
//! text or JSON.

use serde::Serialize;
use std::io::Write;

use crate::{cli::OutputFormat, error::TrunitError, repeat::RepeatRecord};

/// Model identifier used for the score columns when none is requested.
pub const DEFAULT_MODEL: &str = "phylo_gap01";

/// One exported row: a repeat with its derived units and model scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitRow {
    /// Id of the sequence the repeat was detected in.
    pub seq: String,
    /// 1-based start of the repeat region.
    pub begin: u64,
    /// Effective unit length of the alignment.
    pub l_effective: u64,
    /// Number of effective unit copies in the region.
    pub n_effective: f64,
    /// Total length of the repeat region.
    pub repeat_region_length: u64,
    /// Model score.
    pub score: f64,
    /// Model p-value.
    pub pvalue: f64,
    /// Model divergence estimate.
    pub divergence: f64,
    /// Consensus unit of the alignment.
    pub consensus_unit: String,
    /// Canonical form of the consensus unit.
    pub canonical_unit: String,
    /// The alignment itself, units joined with `", "`.
    pub msa: String,
}

impl UnitRow {
    /// Builds the row for one annotated record.
    ///
    /// # Errors
    ///
    /// Returns [`TrunitError::MissingModel`] if the record carries no scores
    /// under `model`.
    pub fn from_record(seq: &str, record: &RepeatRecord, model: &str) -> Result<Self, TrunitError> {
        let scores = record
            .model_scores(model)
            .ok_or_else(|| TrunitError::MissingModel {
                model: model.to_string(),
                seq: seq.to_string(),
                begin: record.begin,
            })?;

        Ok(Self {
            seq: seq.to_string(),
            begin: record.begin,
            l_effective: record.l_effective,
            n_effective: record.n_effective(),
            repeat_region_length: record.repeat_region_length,
            score: scores.score,
            pvalue: scores.pvalue,
            divergence: scores.divergence,
            consensus_unit: record.consensus_unit.clone().unwrap_or_default(),
            canonical_unit: record.canonical_unit.clone().unwrap_or_default(),
            msa: record.msa.join(", "),
        })
    }
}

/// Writes rows in the requested format.
///
/// Delimited formats get a header row from the field names; JSON output is
/// a pretty-printed array.
///
/// # Errors
///
/// Returns `TrunitError` on serialization or write failure.
pub fn write_table<W: Write>(
    rows: &[UnitRow],
    format: OutputFormat,
    writer: W,
) -> Result<(), TrunitError> {
    match format {
        OutputFormat::Tsv => write_delimited(rows, b'\t', writer),
        OutputFormat::Csv => write_delimited(rows, b',', writer),
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_delimited<W: Write>(
    rows: &[UnitRow],
    delimiter: u8,
    writer: W,
) -> Result<(), TrunitError> {
    let mut table = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);
    for row in rows {
        table.serialize(row)?;
    }
    table.flush()?;
    Ok(())
}
