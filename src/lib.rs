/// Log an INFO line to stderr with a timestamp.
///
/// Usage:
/// ```ignore
/// log_info!("Updated {}", path.display());
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::utils::log::emit($crate::utils::log::Level::Info, format_args!($($arg)*))
    };
}

/// Log an ERROR line to stderr with a timestamp.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::utils::log::emit($crate::utils::log::Level::Error, format_args!($($arg)*))
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `docroute::mapping` instead of `docroute::core::mapping`
pub use self::core::*;
pub use self::utils::*;
