//! FASTA record-id sanitization.
//!
//! Sequence ids that contain `/` break tools that derive file names from
//! record ids, including this crate's own per-sequence repeat list storage.
//! This pass rewrites a FASTA file with `/` replaced by `-` in both the id
//! and the description line.

use std::{fmt::Debug, fs::File, io::BufWriter, path::Path};

use bio::io::fasta;

use crate::{error::TrunitError, reader::read_fasta};

fn sanitize(text: &str) -> String {
    text.replace('/', "-")
}

/// Rewrites `input` to `output` with sanitized record ids and descriptions.
///
/// Sequences are copied unchanged. Returns the number of records written.
///
/// # Errors
///
/// Returns [`TrunitError`] if the input cannot be read or the output cannot
/// be written.
pub fn reformat_fasta<P, Q>(input: P, output: Q) -> Result<usize, TrunitError>
where
    P: AsRef<Path> + Debug,
    Q: AsRef<Path> + Debug,
{
    let records = read_fasta(input)?;

    let file = File::create(output.as_ref()).map_err(|source| TrunitError::WriteError { source })?;
    let mut writer = fasta::Writer::new(BufWriter::new(file));

    for record in &records {
        let id = sanitize(record.id());
        let desc = record.desc().map(sanitize);
        writer
            .write(&id, desc.as_deref(), record.seq())
            .map_err(|source| TrunitError::WriteError { source })?;
    }
    writer
        .flush()
        .map_err(|source| TrunitError::WriteError { source })?;

    Ok(records.len())
}
