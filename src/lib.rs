//
// lib.rs
// linediff
//
// Library entry that re-exports modules so the binary and the integration tests can reach CLI parsing, line loading, the diff engine, and report rendering.
//
// Thales Matheus Mendonça Santos - November 2025
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod engine;
pub mod error;
pub mod loader;
pub mod orchestrator;
pub mod report;

pub use cli::{Args, ColorChoice};
pub use engine::{
    classify, diff_sequences, render_rows, Classification, PositionClass, Row, RowKind,
};
pub use error::{DiffError, Result};
pub use loader::{load_lines, LineSequence};
pub use orchestrator::{existing_paths, load_all, run_linediff};
pub use report::{ColoredReport, DiffReport};
