//! Tandem repeat records as produced by upstream detectors.
//!
//! Detection itself happens outside this crate; what arrives here is the
//! detector's description of each repeat region together with the alignment
//! of its unit copies. This module holds the serde model for those records
//! and the glue that attaches the two derived unit strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{error::TrunitError, msa::build_consensus, unit::canonicalize};

/// Statistical scores attached to a repeat under one model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScores {
    /// Model score of the repeat.
    pub score: f64,
    /// P-value of the repeat under the model.
    pub pvalue: f64,
    /// Estimated divergence between the units.
    pub divergence: f64,
}

/// One tandem repeat detected in a sequence region.
///
/// The positional fields and `msa` come from the detector and are never
/// mutated here; `consensus_unit` and `canonical_unit` are derived by
/// [`annotate`](RepeatRecord::annotate) and are the only fields this crate
/// writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatRecord {
    /// 1-based start of the repeat region in its sequence.
    pub begin: u64,
    /// Effective unit length of the alignment.
    pub l_effective: u64,
    /// Total length of the repeat region.
    pub repeat_region_length: u64,
    /// Aligned unit copies, in detector order.
    pub msa: Vec<String>,
    /// Scores keyed by statistical model identifier, e.g. `phylo_gap01`.
    #[serde(default)]
    pub scores: BTreeMap<String, ModelScores>,
    /// Consensus unit derived from the alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus_unit: Option<String>,
    /// Canonical form of the consensus unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_unit: Option<String>,
}

impl RepeatRecord {
    /// Number of effective unit copies in the region.
    pub fn n_effective(&self) -> f64 {
        if self.l_effective == 0 {
            return 0.0;
        }
        self.repeat_region_length as f64 / self.l_effective as f64
    }

    /// Derives and stores the consensus and canonical units.
    ///
    /// The consensus is computed first and the canonical form from it, and
    /// both fields are stored together: a record never leaves this method
    /// with only one of them populated.
    ///
    /// # Errors
    ///
    /// Returns [`TrunitError`] if the alignment is malformed; the record is
    /// left unmodified in that case.
    pub fn annotate(&mut self) -> Result<(), TrunitError> {
        let consensus = build_consensus(self.msa.iter().map(String::as_str))?;
        let canonical = canonicalize(&consensus)?;
        self.consensus_unit = Some(consensus);
        self.canonical_unit = Some(canonical);
        Ok(())
    }

    /// True once both derived fields are present.
    pub const fn is_annotated(&self) -> bool {
        self.consensus_unit.is_some() && self.canonical_unit.is_some()
    }

    /// Scores for the given statistical model, if the detector provided any.
    pub fn model_scores(&self, model: &str) -> Option<&ModelScores> {
        self.scores.get(model)
    }
}

/// The repeats detected in one input sequence.
///
/// Upstream detection sorts repeats by region start before handing them
/// over; the order is preserved through serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepeatList {
    /// Repeat records in region-start order.
    pub repeats: Vec<RepeatRecord>,
}

impl RepeatList {
    /// Annotates every record in the list.
    ///
    /// # Errors
    ///
    /// Returns the first [`TrunitError`] encountered; records before the
    /// failing one keep their derived fields, the rest are untouched.
    pub fn annotate(&mut self) -> Result<(), TrunitError> {
        for repeat in &mut self.repeats {
            repeat.annotate()?;
        }
        Ok(())
    }

    /// Number of repeats in the list.
    pub fn len(&self) -> usize {
        self.repeats.len()
    }

    /// True if the list holds no repeats.
    pub fn is_empty(&self) -> bool {
        self.repeats.is_empty()
    }
}
