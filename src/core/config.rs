//! Run configuration, validated once before any file is touched.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Fails when `root` does not exist or is not a directory.
    pub fn new(root: impl Into<PathBuf>, dry_run: bool, verbose: bool) -> Result<Self> {
        let root = root.into();
        validate_root(&root)?;
        Ok(Self {
            root,
            dry_run,
            verbose,
        })
    }
}

fn validate_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Path does not exist: {}", root.display()),
            Some(root.display().to_string()),
        )
        .with_hint("Pass --path <dir> pointing at the documentation directory"));
    }
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "path",
            format!("Path is not a directory: {}", root.display()),
            Some(root.display().to_string()),
        ));
    }
    Ok(())
}
