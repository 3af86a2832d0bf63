//! Command implementations.

pub mod config;
pub mod scan;

use std::path::PathBuf;

use crate::config::Config;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration loaded from file
    pub config: Config,

    /// Explicit config file path, if one was given
    pub config_path: Option<PathBuf>,

    /// Disable colors
    pub no_color: bool,
}
