//! Canonical repeat units.
//!
//! A tandem repeat unit is only defined up to cyclic rotation and strand:
//! the same repeat read one unit later, or on the opposite strand, produces
//! a rotated or reverse-complemented unit string. This module reduces a unit
//! to the lexicographically smallest member of that orbit so equivalent
//! repeats compare equal.

use crate::error::ComplementError;

/// Complement of a single base.
///
/// The table is total over `{A, C, G, T, N}`, with `N` pairing with itself,
/// and undefined for everything else (including the gap symbol).
pub const fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'N' => Some(b'N'),
        _ => None,
    }
}

/// Reverse complement of a unit.
///
/// # Errors
///
/// Returns [`ComplementError`] carrying the offending base and its position
/// in `unit` if any base has no complement entry.
pub fn reverse_complement(unit: &str) -> Result<String, ComplementError> {
    let mut out = String::with_capacity(unit.len());
    for (position, &base) in unit.as_bytes().iter().enumerate().rev() {
        match complement(base) {
            Some(paired) => out.push(char::from(paired)),
            None => return Err(ComplementError { base, position }),
        }
    }
    Ok(out)
}

/// The cyclic shift of `unit` starting at `offset`.
///
/// `offset` must be at most `unit.len()`; `rotation(u, 0)` is `u` itself.
pub fn rotation(unit: &str, offset: usize) -> String {
    let (head, tail) = unit.split_at(offset);
    format!("{tail}{head}")
}

/// Reduces a unit to its canonical form.
///
/// Enumerates all `2n` candidates reachable by rotating the unit or its
/// reverse complement and returns the lexicographically smallest, so every
/// member of a rotation/reverse-complement orbit maps to the same string.
/// The empty unit is its own canonical form.
///
/// # Errors
///
/// Returns [`ComplementError`] if any base has no complement entry; the
/// orbit is never partially enumerated.
///
/// # Example
///
/// ```rust
/// use trunit::unit::canonicalize;
///
/// assert_eq!(canonicalize("TTTA")?, "AAAT");
/// # Ok::<(), trunit::error::ComplementError>(())
/// ```
pub fn canonicalize(unit: &str) -> Result<String, ComplementError> {
    if unit.is_empty() {
        return Ok(String::new());
    }

    let rev_comp = reverse_complement(unit)?;

    let mut candidates = Vec::with_capacity(2 * unit.len());
    for offset in 0..unit.len() {
        candidates.push(rotation(unit, offset));
        candidates.push(rotation(&rev_comp, offset));
    }

    Ok(candidates.into_iter().min().unwrap_or_default())
}
