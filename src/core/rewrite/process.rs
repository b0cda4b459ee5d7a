use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::mapping::{MappingEntry, MappingTable};
use crate::output::RunReport;
use crate::utils::io;

use super::discover::discover;
use super::engine;

/// One file's content before and after rewriting. Lives for one file only.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub original_content: String,
    pub updated_content: String,
    pub changed: bool,
}

impl FileRecord {
    /// Read `path` as UTF-8 and run it through the engine.
    pub fn load(path: &Path, table: &MappingTable) -> Result<Self> {
        let original_content = io::read_text(path)?;
        let updated_content = engine::apply(&original_content, table);
        let changed = updated_content != original_content;
        Ok(Self {
            path: path.to_path_buf(),
            original_content,
            updated_content,
            changed,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Unchanged,
    WouldChange,
    Changed,
    Failed,
}

/// Result of processing one file. Every file ends in exactly one of these.
#[derive(Debug, Clone)]
pub enum ProcessOutcome {
    Unchanged,
    /// Dry run only. `matched` lists table keys present in the original text.
    WouldChange { matched: Vec<MappingEntry> },
    Changed,
    Failed(Error),
}

impl ProcessOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ProcessOutcome::Unchanged => OutcomeKind::Unchanged,
            ProcessOutcome::WouldChange { .. } => OutcomeKind::WouldChange,
            ProcessOutcome::Changed => OutcomeKind::Changed,
            ProcessOutcome::Failed(_) => OutcomeKind::Failed,
        }
    }
}

fn try_process(path: &Path, table: &MappingTable, config: &RunConfig) -> Result<ProcessOutcome> {
    if config.verbose {
        log_info!("Processing {}", path.display());
    }

    let record = FileRecord::load(path, table)?;
    finish(record, table, config)
}

/// Decide the outcome for a loaded record, writing it back unless dry-run.
fn finish(record: FileRecord, table: &MappingTable, config: &RunConfig) -> Result<ProcessOutcome> {
    let path = record.path.as_path();
    if !record.changed {
        return Ok(ProcessOutcome::Unchanged);
    }

    if config.verbose {
        log_info!("Changes found in {}", path.display());
    }

    if config.dry_run {
        log_info!("Would update {} (dry run)", path.display());
        let matched: Vec<MappingEntry> = table
            .present_in(&record.original_content)
            .into_iter()
            .cloned()
            .collect();
        if config.verbose {
            for entry in &matched {
                log_info!("  Would replace: {} → {}", entry.old, entry.new);
            }
        }
        return Ok(ProcessOutcome::WouldChange { matched });
    }

    io::write_file(path, &record.updated_content, &format!("write {}", path.display()))?;
    log_info!("Updated {}", path.display());
    Ok(ProcessOutcome::Changed)
}

/// Read, rewrite and (unless dry-run) write back a single file.
///
/// Never returns an error: read, decode and write failures become
/// [`ProcessOutcome::Failed`] and are logged.
pub fn process(path: &Path, table: &MappingTable, config: &RunConfig) -> ProcessOutcome {
    match try_process(path, table, config) {
        Ok(outcome) => outcome,
        Err(err) => {
            log_error!("Error processing {}: {}", path.display(), err);
            ProcessOutcome::Failed(err)
        }
    }
}

/// Discover documentation files under the configured root and process each
/// one exactly once, sequentially. Only discovery itself can fail the run.
pub fn run(config: &RunConfig, table: &MappingTable) -> Result<RunReport> {
    let files = discover(&config.root)?;
    let mut report = RunReport::new(&config.root, config.dry_run);

    for path in &files {
        let outcome = process(path, table, config);
        report.record(path, &outcome);
    }

    Ok(report)
}
