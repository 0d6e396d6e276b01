//! tsbak library
//!
//! Timestamped file backups with retention pruning: each regular file is
//! copied into a sibling backup directory under a name carrying the run's
//! timestamp, and the oldest copies beyond the retention limit are removed.

pub mod backup;
pub mod compare;
pub mod config;
pub mod discover;
pub mod naming;
pub mod prune;
pub mod utils;
pub mod walk;

// Re-export commonly used types
pub use backup::RunContext;
pub use config::Config;
pub use utils::errors::BackupError;
pub type Result<T> = std::result::Result<T, BackupError>;
