use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};

/// Documentation extensions searched recursively. Matching is case-sensitive.
pub const DOC_EXTENSIONS: &[&str] = &["md", "yaml", "yml"];

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Find every regular file under `root` with a documentation extension.
///
/// Directories whose names happen to match (e.g. `notes.md/`) are dropped.
/// Entries that cannot be read while walking are logged and skipped.
pub fn discover(root: &Path) -> Result<BTreeSet<PathBuf>> {
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut files = BTreeSet::new();

    for ext in DOC_EXTENSIONS {
        let pattern = format!("{}/**/*.{}", escaped_root.trim_end_matches('/'), ext);
        let entries = glob::glob_with(&pattern, MATCH_OPTIONS).map_err(|e| {
            Error::validation_invalid_argument(
                "path",
                format!("Invalid search pattern '{}': {}", pattern, e),
                Some(root.display().to_string()),
            )
        })?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    files.insert(path);
                }
                Ok(_) => {}
                Err(e) => {
                    log_error!("Error reading {}: {}", e.path().display(), e.error());
                }
            }
        }
    }

    Ok(files)
}
