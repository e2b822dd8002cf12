//! trunit derives a single canonical representative unit for every tandem
//! repeat a detector finds in a DNA sequence.
//!
//! Detectors report each repeat as a multiple sequence alignment of the unit
//! copies in the region. trunit collapses that alignment into a consensus
//! unit by per-column majority vote, then reduces the consensus to the
//! lexicographically smallest string reachable by cyclic rotation and
//! reverse-complementation, so the same repeat detected in a different
//! phase or on the opposite strand yields the same unit string.
//!
//! # Core functions
//!
//! ```rust
//! use trunit::{build_consensus, canonicalize};
//!
//! let consensus = build_consensus(["ACGT", "ACGA", "ACG-"])?;
//! assert_eq!(consensus, "ACGT");
//! assert_eq!(canonicalize(&consensus)?, "ACGT");
//! # Ok::<(), trunit::error::TrunitError>(())
//! ```
//!
//! # Pipeline
//!
//! Around the core sit the drivers of the `trunit` binary: a resumable,
//! parallel annotation pass over a directory of per-sequence repeat lists
//! ([`run::annotate_dir`]), delimited-table export of every annotated
//! repeat ([`run::export_table`], [`builder::UnitTable`]), and FASTA
//! record-id sanitization ([`reformat::reformat_fasta`]).

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod msa;
pub mod progress;
mod reader;
pub mod reformat;
pub mod repeat;
pub mod run;
pub mod store;
pub mod table;
pub mod unit;

pub use error::TrunitError;
pub use msa::build_consensus;
pub use unit::canonicalize;
