//! Multiple sequence alignments of tandem repeat units and consensus calling.
//!
//! A repeat detector reports each tandem repeat as an alignment of the unit
//! copies it found in the region. This module validates that alignment and
//! collapses it column by column into a single consensus unit.

use crate::error::AlignmentError;

/// Gap symbol in alignment columns.
pub const GAP: u8 = b'-';

/// Symbols admitted in alignment units: the four nucleotides, `N`, and the gap.
const fn is_alignment_symbol(byte: u8) -> bool {
    matches!(byte, b'A' | b'C' | b'G' | b'T' | b'N' | GAP)
}

/// A validated multiple sequence alignment of tandem repeat units.
///
/// Every unit has the same length (the alignment width) and contains only
/// alignment symbols. Unit order is preserved from the upstream detector;
/// it carries no meaning beyond deciding consensus ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Msa<'a> {
    units: Vec<&'a str>,
    width: usize,
}

impl<'a> Msa<'a> {
    /// Validates a collection of aligned units.
    ///
    /// The alignment width is taken from the first unit; an empty collection
    /// is a valid, zero-width alignment.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError::UnequalLength`] if any unit's length differs
    /// from the width, or [`AlignmentError::InvalidSymbol`] for any symbol
    /// outside `{A, C, G, T, N, -}`. Validation fails fast; no partial
    /// alignment is ever constructed.
    pub fn new<I>(units: I) -> Result<Self, AlignmentError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let units: Vec<&str> = units.into_iter().collect();
        let width = units.first().map_or(0, |unit| unit.len());

        for (index, unit) in units.iter().enumerate() {
            if unit.len() != width {
                return Err(AlignmentError::UnequalLength {
                    expected: width,
                    found: unit.len(),
                    index,
                });
            }
            for (column, &symbol) in unit.as_bytes().iter().enumerate() {
                if !is_alignment_symbol(symbol) {
                    return Err(AlignmentError::InvalidSymbol {
                        symbol: char::from(symbol),
                        unit: index,
                        column,
                    });
                }
            }
        }

        Ok(Self { units, width })
    }

    /// Number of units in the alignment.
    pub fn n_units(&self) -> usize {
        self.units.len()
    }

    /// Alignment width in columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Collapses the alignment into its consensus unit.
    ///
    /// Columns where gaps hold half or more of the entries are dropped and
    /// contribute nothing to the output. In every other column the gaps are
    /// discarded and the most frequent remaining base is selected; ties go
    /// to the base seen first in unit order (top to bottom), which makes the
    /// result deterministic for a given alignment.
    ///
    /// The consensus is therefore at most `width` characters long, never
    /// contains a gap, and is empty when every column was dropped.
    pub fn consensus(&self) -> String {
        let mut consensus = String::with_capacity(self.width);

        for column in 0..self.width {
            let bases: Vec<u8> = self
                .units
                .iter()
                .map(|unit| unit.as_bytes()[column])
                .collect();

            // Exactly half gaps already counts as a gap-majority column.
            let gaps = bases.iter().filter(|&&base| base == GAP).count();
            if 2 * gaps >= bases.len() {
                continue;
            }

            // Tally in first-seen order so ties resolve to the earliest base.
            let mut tally: Vec<(u8, usize)> = Vec::new();
            for &base in bases.iter().filter(|&&base| base != GAP) {
                match tally.iter_mut().find(|(seen, _)| *seen == base) {
                    Some((_, count)) => *count += 1,
                    None => tally.push((base, 1)),
                }
            }

            let top = tally.iter().map(|&(_, count)| count).max().unwrap_or(0);
            if let Some(&(base, _)) = tally.iter().find(|&&(_, count)| count == top) {
                consensus.push(char::from(base));
            }
        }

        consensus
    }
}

/// Builds the consensus unit for an alignment in one call.
///
/// Validates the units as [`Msa::new`] does, then collapses them with
/// [`Msa::consensus`].
///
/// # Errors
///
/// Returns [`AlignmentError`] if the units do not form a valid alignment.
///
/// # Example
///
/// ```rust
/// use trunit::msa::build_consensus;
///
/// let consensus = build_consensus(["ACGT", "ACGT", "ACGT"])?;
/// assert_eq!(consensus, "ACGT");
/// # Ok::<(), trunit::error::AlignmentError>(())
/// ```
pub fn build_consensus<'a, I>(units: I) -> Result<String, AlignmentError>
where
    I: IntoIterator<Item = &'a str>,
{
    Ok(Msa::new(units)?.consensus())
}
