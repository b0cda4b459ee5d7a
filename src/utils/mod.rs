//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `log` - Timestamped leveled log lines

pub mod io;
pub mod log;
