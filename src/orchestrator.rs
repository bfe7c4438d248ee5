use std::path::{Path, PathBuf};

use log::{debug, warn};
use rayon::prelude::*;

use crate::engine::diff_sequences;
use crate::error::{DiffError, Result};
use crate::loader::{load_lines, LineSequence};
use crate::report::DiffReport;

/// Keeps the paths that exist, in their original order.
pub fn existing_paths<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut existing = Vec::with_capacity(paths.len());
    for p in paths {
        let path: &Path = p.as_ref();
        if path.exists() {
            existing.push(path.to_path_buf());
        } else {
            warn!("Skipping {}: no such file", path.display());
        }
    }
    existing
}

/// Loads every path in parallel. The first failure fails the whole batch.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<LineSequence>> {
    paths.par_iter().map(|p| load_lines(p)).collect()
}

/// Diffs every existing file after the first against the first one.
///
/// Reports come back in input order. Nothing is returned unless every load
/// succeeds.
pub fn run_linediff<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<DiffReport>> {
    let existing = existing_paths(paths);
    if existing.len() < 2 {
        return Err(DiffError::InsufficientInput {
            found: existing.len(),
        });
    }

    let sequences = load_all(&existing)?;
    let baseline = &sequences[0];
    debug!(
        "Baseline {} against {} candidates",
        baseline.path.display(),
        sequences.len() - 1
    );

    Ok(sequences[1..]
        .par_iter()
        .map(|candidate| diff_sequences(baseline, candidate))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_paths_is_insufficient() {
        let paths: [&str; 0] = [];
        let err = run_linediff(&paths).unwrap_err();
        assert!(matches!(err, DiffError::InsufficientInput { found: 0 }));
    }

    #[test]
    fn missing_paths_are_dropped() {
        let kept = existing_paths(&["/no/such/file/one", "/no/such/file/two"]);
        assert!(kept.is_empty());
    }
}
