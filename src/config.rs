//! Worker pool configuration.

use crate::error::ProcessesError;

/// Requested worker count for the annotation pool.
///
/// Mirrors the `--processes` flag: a positive count, or `-1` for every
/// available CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processes {
    /// Use every available CPU, bounded by the number of pending jobs.
    Auto,
    /// Use at most this many workers.
    Fixed(usize),
}

impl Processes {
    /// Parses the raw `--processes` value.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessesError`] unless the value is positive or `-1`.
    pub fn from_flag(requested: i64) -> Result<Self, ProcessesError> {
        match requested {
            -1 => Ok(Self::Auto),
            n if n >= 1 => Ok(Self::Fixed(usize::try_from(n).unwrap_or(usize::MAX))),
            n => Err(ProcessesError { requested: n }),
        }
    }

    /// Resolves to a concrete worker count for `n_jobs` pending jobs.
    ///
    /// The count never exceeds the number of jobs or the CPUs the system
    /// reports, and is at least 1 so an empty run still builds a valid pool.
    pub fn resolve(self, n_jobs: usize) -> usize {
        let cpus = std::thread::available_parallelism().map_or(1, usize::from);
        let cap = match self {
            Self::Auto => cpus,
            Self::Fixed(n) => n.min(cpus),
        };
        cap.min(n_jobs).max(1)
    }
}

impl std::fmt::Display for Processes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Fixed(n) => write!(f, "{n}"),
        }
    }
}
