//! Parser for movie corpus files.
//!
//! The corpus is stored as JSON Lines: one `MovieRecord` object per line.
//! Blank lines are skipped; any other malformed line aborts the load with
//! the file name and 1-based line number.

use crate::error::{DataLoadError, Result};
use crate::types::MovieRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole file, mapping a missing file to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

/// Parse a JSON Lines corpus file
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let content = read_file(path)?;
    let file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_movies_str(&content, &file)
}

/// Parse JSON Lines content; `file` is only used for error context
pub fn parse_movies_str(content: &str, file: &str) -> Result<Vec<MovieRecord>> {
    let mut movies = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() {
            continue;
        }

        let movie: MovieRecord =
            serde_json::from_str(line_trimmed).map_err(|e| DataLoadError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: e.to_string(),
            })?;

        movies.push(movie);
    }

    Ok(movies)
}
