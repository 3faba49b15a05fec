//! Loading and parsing event scripts.

use std::io::Read;
use std::path::Path;

use form_session::FormEvent;

use crate::error::{ReplayError, Result};

/// An event together with the script line it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    /// One-based line number.
    pub line: usize,
    /// The parsed event.
    pub event: FormEvent,
}

/// Reads a script from `path`, or from stdin when `path` is `-`.
pub fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    std::fs::read_to_string(path).map_err(|source| ReplayError::ReadScript {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a JSON-lines script, skipping blank lines and `#` comments.
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    source
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str(text)
                .map(|event| ScriptLine { line, event })
                .map_err(|source| ReplayError::InvalidEvent { line, source })
        })
        .collect()
}
