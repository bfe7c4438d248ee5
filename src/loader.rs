use std::fs;
use std::path::{Path, PathBuf};

use encoding_rs::WINDOWS_1252;
use log::debug;

use crate::error::{DiffError, Result};

/// The lines of one file, in file order, with terminators stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl LineSequence {
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        LineSequence {
            path: path.into(),
            lines,
        }
    }
}

/// Reads `path` into a [`LineSequence`]. Empty lines are kept as empty strings.
pub fn load_lines(path: &Path) -> Result<LineSequence> {
    let bytes = fs::read(path).map_err(|e| DiffError::io(path, e))?;
    let text = decode_best_effort(bytes);
    let lines = split_lines(&text);
    debug!("Loaded {} lines from {}", lines.len(), path.display());
    Ok(LineSequence::new(path, lines))
}

/// UTF-8 first, Windows-1252 when the bytes are not valid UTF-8.
pub fn decode_best_effort(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let (res, _, _) = WINDOWS_1252.decode(err.as_bytes());
            res.into_owned()
        }
    }
}

/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.lines().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_strips_crlf() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn split_on_lone_cr() {
        assert_eq!(split_lines("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn decode_falls_back_to_windows_1252() {
        assert_eq!(decode_best_effort(b"caf\xe9".to_vec()), "café");
        assert_eq!(decode_best_effort("café".as_bytes().to_vec()), "café");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, DiffError::Io { .. }));
    }
}
