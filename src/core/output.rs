//! Public output types for a rewrite run.
//!
//! Serialized by the CLI into its JSON response envelope.

use std::path::Path;

use serde::Serialize;

use crate::rewrite::{OutcomeKind, ProcessOutcome};

/// Per-file entry in the run report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResult {
    pub path: String,
    pub outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched: Vec<String>,
}

/// Outcome counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total: usize,
    pub unchanged: usize,
    pub would_change: usize,
    pub changed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub root: String,
    pub dry_run: bool,
    pub results: Vec<FileResult>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.display().to_string(),
            dry_run,
            results: Vec::new(),
            summary: RunSummary::default(),
        }
    }

    pub fn record(&mut self, path: &Path, outcome: &ProcessOutcome) {
        self.summary.total += 1;
        let mut error = None;
        let mut matched = Vec::new();

        match outcome {
            ProcessOutcome::Unchanged => self.summary.unchanged += 1,
            ProcessOutcome::WouldChange { matched: entries } => {
                self.summary.would_change += 1;
                matched = entries.iter().map(|e| e.old.clone()).collect();
            }
            ProcessOutcome::Changed => self.summary.changed += 1,
            ProcessOutcome::Failed(err) => {
                self.summary.failed += 1;
                error = Some(err.to_string());
            }
        }

        self.results.push(FileResult {
            path: path.display().to_string(),
            outcome: outcome.kind(),
            error,
            matched,
        });
    }

    /// True when at least one file could not be processed.
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}
