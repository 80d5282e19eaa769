// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod rewrite;
pub mod splice;

// Re-export commonly used types
pub use crate::commands::RunContext;
pub use crate::config::{load_config, CodemendConfig};
pub use crate::errors::{Error, Result};
pub use crate::rewrite::{apply_all, rewrite_file, FileOutcome, RunSummary, Substitution};
pub use crate::splice::{splice, Anchor, SpliceMode};
