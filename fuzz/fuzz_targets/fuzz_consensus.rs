//! Fuzz target for consensus calling.
//!
//! Builds alignments from arbitrary bytes and checks the structural
//! guarantees of the consensus: bounded length, no gaps, and validation
//! rejecting anything outside the alignment alphabet.

#![no_main]

use libfuzzer_sys::fuzz_target;
use trunit::build_consensus;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 512 {
        return;
    }

    // First byte picks the alignment width, the rest fill the units row by row
    let width = usize::from(data[0] % 16) + 1;
    let body = &data[1..];
    if body.len() < width {
        return;
    }

    let units: Vec<String> = body
        .chunks_exact(width)
        .map(|chunk| {
            chunk
                .iter()
                .map(|byte| match byte % 5 {
                    0 => 'A',
                    1 => 'C',
                    2 => 'G',
                    3 => 'T',
                    _ => '-',
                })
                .collect()
        })
        .collect();

    let consensus =
        build_consensus(units.iter().map(String::as_str)).expect("aligned units must be valid");

    assert!(consensus.len() <= width);
    assert!(!consensus.contains('-'));

    // A unit admitted by validation never changes the outcome of rebuilding
    // the same alignment: consensus is a pure function of its input.
    let again = build_consensus(units.iter().map(String::as_str)).expect("same input");
    assert_eq!(consensus, again);
});
