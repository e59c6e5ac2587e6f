//! CLI commands module
//!
//! Contains all CLI command implementations.

pub mod browse;
pub mod recipe;

use crate::output::OutputFormat;
use cookbook_core::Database;

/// Shared context for all commands
pub struct Context {
    pub db: Database,
    pub format: OutputFormat,
    pub quiet: bool,
}
