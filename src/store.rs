//! On-disk repeat list storage.
//!
//! Each input sequence's repeats are stored as one JSON document named
//! `<sequence_id>.json`. The same layout doubles as the resume bookkeeping
//! for annotation runs: a sequence whose file already exists in the output
//! directory was finished by a previous run and can be skipped.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{error::TrunitError, repeat::RepeatList};

/// File extension of stored repeat lists.
pub const REPEAT_LIST_EXT: &str = "json";

/// Paths of the repeat lists stored in `dir`, in file-name order.
///
/// Only `*.json` files are considered; anything else in the directory is
/// ignored.
pub fn repeat_list_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, TrunitError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|source| TrunitError::RepeatListRead {
        details: source.to_string(),
        path: dir.to_path_buf(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| TrunitError::RepeatListRead {
            details: source.to_string(),
            path: dir.to_path_buf(),
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == REPEAT_LIST_EXT) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Sequence id a stored list belongs to, taken from its file stem.
pub fn sequence_id(path: &Path) -> String {
    path.file_stem()
        .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned())
}

/// Loads one repeat list from disk.
///
/// # Errors
///
/// Returns [`TrunitError::RepeatListRead`] carrying the path if the file
/// cannot be opened or does not parse as a repeat list.
pub fn load_repeat_list(path: &Path) -> Result<RepeatList, TrunitError> {
    let file = File::open(path).map_err(|source| TrunitError::RepeatListRead {
        details: source.to_string(),
        path: path.to_path_buf(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| TrunitError::RepeatListRead {
        details: source.to_string(),
        path: path.to_path_buf(),
    })
}

/// Loads every repeat list in `dir` with its sequence id, in file-name order.
pub fn load_repeat_lists<P: AsRef<Path>>(dir: P) -> Result<Vec<(String, RepeatList)>, TrunitError> {
    repeat_list_paths(dir)?
        .iter()
        .map(|path| Ok((sequence_id(path), load_repeat_list(path)?)))
        .collect()
}

/// Writes the repeat list for `sequence_id` into `dir` as pretty JSON.
///
/// Returns the path written.
pub fn save_repeat_list(
    dir: &Path,
    sequence_id: &str,
    list: &RepeatList,
) -> Result<PathBuf, TrunitError> {
    let path = dir.join(format!("{sequence_id}.{REPEAT_LIST_EXT}"));
    let file = File::create(&path).map_err(|source| TrunitError::RepeatListWrite {
        source,
        path: path.clone(),
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, list)?;
    writeln!(writer).map_err(|source| TrunitError::RepeatListWrite {
        source,
        path: path.clone(),
    })?;
    writer
        .flush()
        .map_err(|source| TrunitError::RepeatListWrite {
            source,
            path: path.clone(),
        })?;

    Ok(path)
}

/// Sequence ids that already have a stored list in `dir`.
///
/// The scan is by file suffix alone, matching whatever bookkeeping earlier
/// runs left behind; the orchestrator seeds its completed set from the
/// returned value rather than consulting the directory again mid-run.
pub fn completed_ids<P: AsRef<Path>>(dir: P) -> Result<HashSet<String>, TrunitError> {
    Ok(repeat_list_paths(dir)?
        .iter()
        .map(|path| sequence_id(path))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repeat::RepeatRecord;
    use tempfile::tempdir;

    fn sample_list() -> RepeatList {
        RepeatList {
            repeats: vec![RepeatRecord {
                begin: 42,
                l_effective: 4,
                repeat_region_length: 12,
                msa: vec!["TTTA".to_string(), "TTTA".to_string()],
                scores: std::collections::BTreeMap::new(),
                consensus_unit: None,
                canonical_unit: None,
            }],
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let list = sample_list();

        let path = save_repeat_list(dir.path(), "chr1", &list).unwrap();
        assert_eq!(sequence_id(&path), "chr1");

        let back = load_repeat_list(&path).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn paths_are_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        let list = sample_list();
        save_repeat_list(dir.path(), "b_seq", &list).unwrap();
        save_repeat_list(dir.path(), "a_seq", &list).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let paths = repeat_list_paths(dir.path()).unwrap();
        let ids: Vec<String> = paths.iter().map(|p| sequence_id(p)).collect();
        assert_eq!(ids, ["a_seq", "b_seq"]);
    }

    #[test]
    fn completed_ids_reflect_stored_lists() {
        let dir = tempdir().unwrap();
        let list = sample_list();
        save_repeat_list(dir.path(), "chr1", &list).unwrap();
        save_repeat_list(dir.path(), "chr2", &list).unwrap();

        let completed = completed_ids(dir.path()).unwrap();
        assert!(completed.contains("chr1"));
        assert!(completed.contains("chr2"));
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn load_of_invalid_json_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_repeat_list(&path).unwrap_err();
        assert!(matches!(err, TrunitError::RepeatListRead { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn load_repeat_lists_pairs_ids_with_lists() {
        let dir = tempdir().unwrap();
        let list = sample_list();
        save_repeat_list(dir.path(), "chr1", &list).unwrap();

        let loaded = load_repeat_lists(dir.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, "chr1");
        assert_eq!(loaded[0].1, list);
    }
}
