// Public modules
pub mod config;
pub mod error;
pub mod mapping;
pub mod output;
pub mod rewrite;

// Re-export common types for convenience
pub use config::RunConfig;
pub use error::{Error, ErrorCode, Result};
pub use mapping::{MappingEntry, MappingTable};
pub use output::{FileResult, RunReport, RunSummary};
