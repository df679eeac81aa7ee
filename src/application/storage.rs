//! Blocking load/save of pattern files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::Life;
use crate::error::PatternError;

/// Write the live set to `path`, replacing any existing file.
/// The board is not modified, even on failure.
pub fn save_pattern(life: &Life, path: &Path) -> Result<(), PatternError> {
    fs::write(path, life.serialize()).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Clear the board and load the pattern stored at `path`.
///
/// On any error the board is left cleared.
pub fn load_pattern(life: &mut Life, path: &Path) -> Result<(), PatternError> {
    life.clear();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PatternError::NotFound { path: path.to_path_buf() },
        _ => PatternError::Io { path: path.to_path_buf(), source },
    })?;
    life.deserialize(&text)
}
