use std::path::PathBuf;

use clap::Args;

use docroute::rewrite;
use docroute::{MappingTable, RunConfig, RunReport};

use crate::commands::CmdResult;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Show what would be changed without making changes
    #[arg(long)]
    pub dry_run: bool,
    /// Show detailed information about changes
    #[arg(long)]
    pub verbose: bool,
    /// Path to documentation directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
    /// JSON file with [{"old": ..., "new": ...}] entries replacing the built-in table
    #[arg(long, value_name = "FILE")]
    pub mappings: Option<PathBuf>,
}

pub fn run(args: RewriteArgs) -> CmdResult<RunReport> {
    let config = RunConfig::new(args.path, args.dry_run, args.verbose)?;
    let table = match args.mappings.as_deref() {
        Some(path) => MappingTable::from_json_file(path)?,
        None => MappingTable::builtin(),
    };

    if config.verbose {
        docroute::log_info!(
            "Rewriting {} with {} mappings{}",
            config.root.display(),
            table.len(),
            if config.dry_run { " (dry run)" } else { "" }
        );
    }

    let report = rewrite::run(&config, &table)?;

    if report.has_failures() {
        docroute::log_error!(
            "{} of {} files could not be processed",
            report.summary.failed,
            report.summary.total
        );
    }

    // Per-file failures are reported, not escalated.
    Ok((report, 0))
}
