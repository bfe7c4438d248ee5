use std::fmt;
use std::path::{Path, PathBuf};

use colored::{ColoredString, Colorize};

use crate::engine::{Row, RowKind};

/// Rendered rows for one (baseline, candidate) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub baseline: PathBuf,
    pub candidate: PathBuf,
    pub rows: Vec<Row>,
}

impl DiffReport {
    pub fn new(baseline: &Path, candidate: &Path, rows: Vec<Row>) -> Self {
        DiffReport {
            baseline: baseline.to_path_buf(),
            candidate: candidate.to_path_buf(),
            rows,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        self.rows.iter().all(|r| r.kind() == RowKind::Unchanged)
    }

    /// Same layout as `Display`, with removed/added/replaced rows painted.
    pub fn colored(&self) -> ColoredReport<'_> {
        ColoredReport(self)
    }

    fn write_report(&self, f: &mut fmt::Formatter<'_>, paint: bool) -> fmt::Result {
        writeln!(
            f,
            "Diff between\n{} and\n{}",
            self.baseline.display(),
            self.candidate.display()
        )?;
        for (n, row) in self.rows.iter().enumerate() {
            if paint {
                writeln!(f, "{} {}", n + 1, paint_row(row))?;
            } else {
                writeln!(f, "{} {}", n + 1, row)?;
            }
        }
        Ok(())
    }
}

fn paint_row(row: &Row) -> ColoredString {
    let text = row.to_string();
    match row.kind() {
        RowKind::Unchanged => text.normal(),
        RowKind::Removed => text.red(),
        RowKind::Added => text.green(),
        RowKind::Replaced => text.yellow(),
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_report(f, false)
    }
}

pub struct ColoredReport<'a>(&'a DiffReport);

impl fmt::Display for ColoredReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_report(f, true)
    }
}
