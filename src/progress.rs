//! Progress tracking for annotation runs.
//!
//! This module provides thread-safe progress reporting via callbacks,
//! allowing callers to monitor long-running annotation passes over many
//! repeat lists.
//!
//! # Example
//!
//! ```rust,no_run
//! use trunit::config::Processes;
//! use trunit::run::annotate_dir_with_progress;
//!
//! let summary = annotate_dir_with_progress("repeats", "annotated", Processes::Auto, |progress| {
//!     println!(
//!         "Processed {} lists ({} repeats)",
//!         progress.lists_processed,
//!         progress.repeats_processed
//!     );
//! })?;
//! # Ok::<(), trunit::error::TrunitError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Progress snapshot during an annotation run.
#[derive(Debug, Clone, Default)]
pub struct Progress {
    /// Number of repeat lists processed so far.
    pub lists_processed: u64,
    /// Total number of repeat records processed so far.
    pub repeats_processed: u64,
}

/// Thread-safe progress tracker using atomic counters.
///
/// This struct maintains atomic counters that can be safely updated from
/// multiple workers during a parallel annotation run.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    lists: AtomicU64,
    repeats: AtomicU64,
}

impl ProgressTracker {
    /// Create a new progress tracker with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lists: AtomicU64::new(0),
            repeats: AtomicU64::new(0),
        }
    }

    /// Record that a repeat list has been processed.
    ///
    /// This method is thread-safe and can be called from multiple threads.
    ///
    /// # Arguments
    ///
    /// * `repeats` - The number of repeat records in the processed list.
    pub fn record_list(&self, repeats: u64) {
        self.lists.fetch_add(1, Ordering::Relaxed);
        self.repeats.fetch_add(repeats, Ordering::Relaxed);
    }

    /// Get a snapshot of the current progress.
    ///
    /// The returned values represent the state at a point in time and may
    /// change immediately after this call returns.
    pub fn snapshot(&self) -> Progress {
        Progress {
            lists_processed: self.lists.load(Ordering::Relaxed),
            repeats_processed: self.repeats.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lists.store(0, Ordering::Relaxed);
        self.repeats.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_at_zero() {
        let tracker = ProgressTracker::new();
        let progress = tracker.snapshot();
        assert_eq!(progress.lists_processed, 0);
        assert_eq!(progress.repeats_processed, 0);
    }

    #[test]
    fn tracker_records_list() {
        let tracker = ProgressTracker::new();
        tracker.record_list(12);
        tracker.record_list(3);

        let progress = tracker.snapshot();
        assert_eq!(progress.lists_processed, 2);
        assert_eq!(progress.repeats_processed, 15);
    }

    #[test]
    fn tracker_reset() {
        let tracker = ProgressTracker::new();
        tracker.record_list(12);
        tracker.reset();

        let progress = tracker.snapshot();
        assert_eq!(progress.lists_processed, 0);
        assert_eq!(progress.repeats_processed, 0);
    }
}
