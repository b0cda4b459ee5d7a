//! Route rewriting: replace stale API URLs across a documentation tree.
//!
//! Discovers Markdown/YAML files, runs each through the substitution engine
//! with the mapping table, and writes the result back (or only reports it in
//! a dry run). Per-file failures never abort the batch.

mod discover;
mod engine;
mod process;

pub use discover::{discover, DOC_EXTENSIONS};
pub use engine::{apply, WrapForm, WRAP_FORMS};
pub use process::{process, run, FileRecord, OutcomeKind, ProcessOutcome};
