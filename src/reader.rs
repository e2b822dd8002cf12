//! FASTA input.

use std::{fmt::Debug, fs::File, path::Path};

use bio::io::fasta;

use crate::error::TrunitError;

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false)
}

fn open(path: &Path) -> Result<File, TrunitError> {
    File::open(path).map_err(|source| TrunitError::SequenceRead {
        source,
        path: path.to_path_buf(),
    })
}

fn collect<R: std::io::Read>(reader: fasta::Reader<std::io::BufReader<R>>) -> Result<Vec<fasta::Record>, TrunitError> {
    let records: Result<Vec<_>, _> = reader.records().collect();
    records.map_err(|source| TrunitError::SequenceParse {
        details: source.to_string(),
    })
}

/// Reads every record from a FASTA file.
#[cfg(not(feature = "gzip"))]
pub(crate) fn read_fasta<P: AsRef<Path> + Debug>(path: P) -> Result<Vec<fasta::Record>, TrunitError> {
    let file = open(path.as_ref())?;
    collect(fasta::Reader::new(file))
}

/// Reads every record from a FASTA file, transparently decompressing `.gz`.
#[cfg(feature = "gzip")]
pub(crate) fn read_fasta<P: AsRef<Path> + Debug>(path: P) -> Result<Vec<fasta::Record>, TrunitError> {
    use flate2::read::GzDecoder;

    let file = open(path.as_ref())?;
    if is_gzip_path(&path) {
        collect(fasta::Reader::new(GzDecoder::new(file)))
    } else {
        collect(fasta::Reader::new(file))
    }
}
