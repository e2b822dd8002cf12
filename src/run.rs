//! Pipeline drivers: annotation, table export, and FASTA reformatting.
//!
//! The core unit derivation is pure and per-record; everything here is the
//! orchestration around it. Annotation fans out over the repeat lists of a
//! directory on a bounded worker pool, resumes past runs by skipping
//! sequences whose output already exists, and isolates failures to the list
//! that caused them.

use std::{
    fmt::Debug,
    fs,
    hash::BuildHasherDefault,
    io::Write,
    path::Path,
};

use dashmap::DashSet;
use rayon::prelude::*;
use rustc_hash::FxHasher;

use crate::{
    cli::OutputFormat,
    config::Processes,
    error::TrunitError,
    progress::{Progress, ProgressTracker},
    store::{completed_ids, load_repeat_list, load_repeat_lists, repeat_list_paths, save_repeat_list, sequence_id},
    table::{write_table, UnitRow},
};

pub use crate::reformat::reformat_fasta;

#[cfg(feature = "tracing")]
use tracing::{info, warn};

/// A concurrent id set with `FxHasher`.
type CompletedSet = DashSet<String, BuildHasherDefault<FxHasher>>;

/// Outcome counts of an annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    /// Lists annotated and written by this run.
    pub annotated: usize,
    /// Lists skipped because a previous run already wrote them.
    pub skipped: usize,
    /// Lists that failed; their sequences are left for a later run.
    pub failed: usize,
}

/// Annotates every repeat list in `input`, writing results into `output`.
///
/// Equivalent to [`annotate_dir_with_progress`] with a no-op callback.
///
/// # Errors
///
/// Returns `TrunitError` if either directory cannot be used or the worker
/// pool cannot be built. Failures inside a single list are contained: the
/// list is counted in [`AnnotateSummary::failed`] and the run continues.
pub fn annotate_dir<P, Q>(
    input: P,
    output: Q,
    processes: Processes,
) -> Result<AnnotateSummary, TrunitError>
where
    P: AsRef<Path> + Debug,
    Q: AsRef<Path> + Debug,
{
    annotate_dir_with_progress(input, output, processes, |_| {})
}

/// Annotates every repeat list in `input`, reporting progress via callback.
///
/// Sequences that already have a list in `output` are skipped, so an
/// interrupted run picks up where it left off. The completed-id set is
/// seeded from the output directory once, up front, and updated by the
/// workers as they finish; nothing else is shared between jobs.
///
/// # Errors
///
/// See [`annotate_dir`].
pub fn annotate_dir_with_progress<P, Q, F>(
    input: P,
    output: Q,
    processes: Processes,
    callback: F,
) -> Result<AnnotateSummary, TrunitError>
where
    P: AsRef<Path> + Debug,
    Q: AsRef<Path> + Debug,
    F: Fn(Progress) + Sync,
{
    let output = output.as_ref();
    fs::create_dir_all(output).map_err(|source| TrunitError::WriteError { source })?;

    let completed: CompletedSet = DashSet::with_hasher(BuildHasherDefault::default());
    for id in completed_ids(output)? {
        completed.insert(id);
    }

    let paths = repeat_list_paths(input)?;
    let total = paths.len();
    let pending: Vec<_> = paths
        .into_iter()
        .filter(|path| !completed.contains(&sequence_id(path)))
        .collect();
    let skipped = total - pending.len();

    #[cfg(feature = "tracing")]
    info!(
        pending = pending.len(),
        skipped = skipped,
        "Starting annotation run"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(processes.resolve(pending.len()))
        .build()?;

    let tracker = ProgressTracker::new();
    let outcomes: Vec<bool> = pool.install(|| {
        pending
            .par_iter()
            .map(|path| match annotate_one(path, output) {
                Ok(n_repeats) => {
                    completed.insert(sequence_id(path));
                    tracker.record_list(n_repeats);
                    callback(tracker.snapshot());
                    true
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    warn!(path = ?path, error = %err, "Skipping repeat list");
                    eprintln!("skipping '{}': {err}", path.display());
                    false
                }
            })
            .collect()
    });

    let annotated = outcomes.iter().filter(|&&ok| ok).count();
    let summary = AnnotateSummary {
        annotated,
        skipped,
        failed: outcomes.len() - annotated,
    };

    #[cfg(feature = "tracing")]
    info!(
        annotated = summary.annotated,
        skipped = summary.skipped,
        failed = summary.failed,
        "Annotation run complete"
    );

    Ok(summary)
}

fn annotate_one(path: &Path, output: &Path) -> Result<u64, TrunitError> {
    let mut list = load_repeat_list(path)?;
    list.annotate()?;
    save_repeat_list(output, &sequence_id(path), &list)?;
    Ok(list.len() as u64)
}

/// Assembles every repeat stored in `dir` into export rows.
///
/// Records the annotate pass has not touched yet are derived on the fly, so
/// each row always carries both unit strings. Lists are processed in
/// parallel on the global pool; rows come back sorted by `(seq, begin)` for
/// deterministic output.
///
/// # Errors
///
/// Returns `TrunitError` on a malformed list or a record without scores for
/// `model`.
pub fn collect_rows<P>(dir: P, model: &str) -> Result<Vec<UnitRow>, TrunitError>
where
    P: AsRef<Path> + Debug,
{
    let lists = load_repeat_lists(dir)?;

    let per_list: Result<Vec<Vec<UnitRow>>, TrunitError> = lists
        .into_par_iter()
        .map(|(seq, mut list)| {
            for repeat in &mut list.repeats {
                if !repeat.is_annotated() {
                    repeat.annotate()?;
                }
            }
            list.repeats
                .iter()
                .map(|repeat| UnitRow::from_record(&seq, repeat, model))
                .collect()
        })
        .collect();

    let mut rows: Vec<UnitRow> = per_list?.into_iter().flatten().collect();
    rows.sort_by(|a, b| a.seq.cmp(&b.seq).then(a.begin.cmp(&b.begin)));
    Ok(rows)
}

/// Exports every repeat stored in `dir` as one table.
///
/// Returns the number of rows written.
///
/// # Errors
///
/// See [`collect_rows`] and [`write_table`].
pub fn export_table<P, W>(
    dir: P,
    writer: W,
    format: OutputFormat,
    model: &str,
) -> Result<usize, TrunitError>
where
    P: AsRef<Path> + Debug,
    W: Write,
{
    let rows = collect_rows(dir, model)?;
    write_table(&rows, format, writer)?;

    #[cfg(feature = "tracing")]
    info!(rows = rows.len(), format = %format, "Table export complete");

    Ok(rows.len())
}
