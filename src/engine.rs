use std::collections::{BTreeMap, HashSet};
use std::fmt;

use log::debug;

use crate::loader::LineSequence;
use crate::report::DiffReport;

/// What happened at one 1-based position.
///
/// Positions are shared by both files: the baseline line at `i` and the
/// candidate line at `i` land on the same key even when they are unrelated.
/// A baseline position is either kept or removed, so "same" and "removed"
/// never meet at one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass<'a> {
    Same(&'a str),
    Removed(&'a str),
    Added(&'a str),
    RemovedAndAdded { removed: &'a str, added: &'a str },
    SameAndAdded { same: &'a str, added: &'a str },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    positions: BTreeMap<usize, PositionClass<'a>>,
}

impl<'a> Classification<'a> {
    pub fn get(&self, position: usize) -> Option<&PositionClass<'a>> {
        self.positions.get(&position)
    }

    /// Classified positions in ascending order; gaps are absent.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PositionClass<'a>)> {
        self.positions.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Presence-based classification: a line counts as present if it occurs
/// anywhere in the other file, regardless of where.
pub fn classify<'a>(baseline: &'a [String], candidate: &'a [String]) -> Classification<'a> {
    let in_baseline: HashSet<&str> = baseline.iter().map(String::as_str).collect();
    let in_candidate: HashSet<&str> = candidate.iter().map(String::as_str).collect();

    let mut positions = BTreeMap::new();
    let last = baseline.len().max(candidate.len());

    for position in 1..=last {
        let kept = baseline
            .get(position - 1)
            .map(|line| (line.as_str(), in_candidate.contains(line.as_str())));
        let added = candidate
            .get(position - 1)
            .map(String::as_str)
            .filter(|line| !in_baseline.contains(line));

        let class = match (kept, added) {
            (Some((same, true)), None) => PositionClass::Same(same),
            (Some((removed, false)), None) => PositionClass::Removed(removed),
            (Some((same, true)), Some(added)) => PositionClass::SameAndAdded { same, added },
            (Some((removed, false)), Some(added)) => {
                PositionClass::RemovedAndAdded { removed, added }
            }
            (None, Some(added)) => PositionClass::Added(added),
            (None, None) => continue,
        };
        positions.insert(position, class);
    }

    Classification { positions }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Unchanged,
    Removed,
    Added,
    Replaced,
}

impl RowKind {
    pub fn marker(self) -> &'static str {
        match self {
            RowKind::Unchanged => "   ",
            RowKind::Removed => " - ",
            RowKind::Added => " + ",
            RowKind::Replaced => " * ",
        }
    }
}

/// One rendered report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Unchanged(String),
    Removed(String),
    Added(String),
    Replaced { removed: String, added: String },
}

impl Row {
    pub fn kind(&self) -> RowKind {
        match self {
            Row::Unchanged(_) => RowKind::Unchanged,
            Row::Removed(_) => RowKind::Removed,
            Row::Added(_) => RowKind::Added,
            Row::Replaced { .. } => RowKind::Replaced,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().marker())?;
        match self {
            Row::Unchanged(line) | Row::Removed(line) | Row::Added(line) => f.write_str(line),
            Row::Replaced { removed, added } => write!(f, "{removed}|{added}"),
        }
    }
}

pub fn render_rows(classification: &Classification<'_>) -> Vec<Row> {
    let mut rows = Vec::with_capacity(classification.len());
    for (_, class) in classification.iter() {
        match *class {
            PositionClass::Same(line) => rows.push(Row::Unchanged(line.to_owned())),
            PositionClass::Removed(line) => rows.push(Row::Removed(line.to_owned())),
            PositionClass::Added(line) => rows.push(Row::Added(line.to_owned())),
            PositionClass::RemovedAndAdded { removed, added } => rows.push(Row::Replaced {
                removed: removed.to_owned(),
                added: added.to_owned(),
            }),
            PositionClass::SameAndAdded { same, added } => {
                rows.push(Row::Unchanged(same.to_owned()));
                rows.push(Row::Added(added.to_owned()));
            }
        }
    }
    rows
}

pub fn diff_sequences(baseline: &LineSequence, candidate: &LineSequence) -> DiffReport {
    let classification = classify(&baseline.lines, &candidate.lines);
    let rows = render_rows(&classification);
    debug!(
        "Compared {} against {}: {} rows",
        candidate.path.display(),
        baseline.path.display(),
        rows.len()
    );
    DiffReport::new(&baseline.path, &candidate.path, rows)
}
