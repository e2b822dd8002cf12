//! Error types for trunit.
//!
//! This module provides exhaustive, strongly-typed errors for all operations
//! in the library, enabling precise error handling and informative messages.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in trunit operations.
#[derive(Debug, Error)]
pub enum TrunitError {
    /// A repeat alignment was malformed.
    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    /// A unit contained a base with no complement entry.
    #[error(transparent)]
    Complement(#[from] ComplementError),

    /// Worker count was neither positive nor -1.
    #[error(transparent)]
    Processes(#[from] ProcessesError),

    /// Failed to read a sequence file.
    #[error("failed to read sequence file '{path}': {source}")]
    SequenceRead {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to parse a sequence record.
    #[error("failed to parse sequence record: {details}")]
    SequenceParse { details: String },

    /// Failed to read or parse a repeat list file.
    #[error("failed to read repeat list '{path}': {details}")]
    RepeatListRead { details: String, path: PathBuf },

    /// Failed to write a repeat list file.
    #[error("failed to write repeat list '{path}': {source}")]
    RepeatListWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// A record has no score entry for the requested statistical model.
    #[error("no scores for model '{model}' on repeat at {seq}:{begin}")]
    MissingModel {
        model: String,
        seq: String,
        begin: u64,
    },

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write delimited table output.
    #[error("failed to write table: {source}")]
    TableError {
        #[source]
        source: csv::Error,
    },

    /// Failed to build the worker thread pool.
    #[error("failed to build worker pool: {source}")]
    ThreadPool {
        #[source]
        source: rayon::ThreadPoolBuildError,
    },
}

/// Error for a malformed multiple sequence alignment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AlignmentError {
    /// A unit's length differs from the alignment width.
    #[error("unit {index} has length {found}, expected alignment width {expected}")]
    UnequalLength {
        /// Alignment width taken from the first unit.
        expected: usize,
        /// Length of the offending unit.
        found: usize,
        /// Index of the offending unit, in alignment order.
        index: usize,
    },

    /// A unit contained a symbol outside the alignment alphabet.
    #[error("invalid symbol '{symbol}' in unit {unit} at column {column}")]
    InvalidSymbol {
        /// The invalid symbol.
        symbol: char,
        /// Index of the offending unit, in alignment order.
        unit: usize,
        /// Column of the invalid symbol within the unit.
        column: usize,
    },
}

/// Error for a base with no entry in the complement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplementError {
    /// The byte value with no complement.
    pub base: u8,
    /// Position of the byte in the unit.
    pub position: usize,
}

impl std::fmt::Display for ComplementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.base.is_ascii_graphic() || self.base == b' ' {
            write!(
                f,
                "no complement for base '{}' (0x{:02x}) at position {}",
                self.base as char, self.base, self.position
            )
        } else {
            write!(
                f,
                "no complement for base 0x{:02x} at position {}",
                self.base, self.position
            )
        }
    }
}

impl std::error::Error for ComplementError {}

/// Error for an invalid worker count.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("worker count {requested} is invalid: must be positive or -1")]
pub struct ProcessesError {
    /// The invalid worker count that was provided.
    pub requested: i64,
}

impl From<std::io::Error> for TrunitError {
    fn from(source: std::io::Error) -> Self {
        TrunitError::WriteError { source }
    }
}

impl From<serde_json::Error> for TrunitError {
    fn from(source: serde_json::Error) -> Self {
        TrunitError::JsonError { source }
    }
}

impl From<csv::Error> for TrunitError {
    fn from(source: csv::Error) -> Self {
        TrunitError::TableError { source }
    }
}

impl From<rayon::ThreadPoolBuildError> for TrunitError {
    fn from(source: rayon::ThreadPoolBuildError) -> Self {
        TrunitError::ThreadPool { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unequal_length_display() {
        let err = AlignmentError::UnequalLength {
            expected: 4,
            found: 3,
            index: 2,
        };
        assert_eq!(
            err.to_string(),
            "unit 2 has length 3, expected alignment width 4"
        );
    }

    #[test]
    fn invalid_symbol_display() {
        let err = AlignmentError::InvalidSymbol {
            symbol: 'X',
            unit: 0,
            column: 5,
        };
        assert_eq!(err.to_string(), "invalid symbol 'X' in unit 0 at column 5");
    }

    #[test]
    fn complement_error_display() {
        let err = ComplementError {
            base: b'-',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "no complement for base '-' (0x2d) at position 3"
        );
    }

    #[test]
    fn processes_error_display() {
        let err = ProcessesError { requested: -4 };
        assert_eq!(
            err.to_string(),
            "worker count -4 is invalid: must be positive or -1"
        );
    }

    #[test]
    fn trunit_error_from_alignment_error() {
        let err: TrunitError = AlignmentError::UnequalLength {
            expected: 4,
            found: 3,
            index: 0,
        }
        .into();
        assert!(matches!(
            err,
            TrunitError::Alignment(AlignmentError::UnequalLength { expected: 4, .. })
        ));
    }

    #[test]
    fn trunit_error_from_complement_error() {
        let err: TrunitError = ComplementError {
            base: b'-',
            position: 0,
        }
        .into();
        assert!(matches!(
            err,
            TrunitError::Complement(ComplementError { base: b'-', .. })
        ));
    }
}
