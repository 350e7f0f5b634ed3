//! Global CLI options shared across all commands

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::config;

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > default. The tool has
/// no config file of its own.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json, yaml)
    pub format: OutputFormat,

    /// Repository root containing `.jfrog/`
    pub dir: PathBuf,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            dir: PathBuf::from(&cli.dir),
        }
    }

    /// Repository root as a path.
    pub fn dir_ref(&self) -> &Path {
        &self.dir
    }

    /// Conventional config path under the repository root.
    pub fn config_path(&self) -> PathBuf {
        config::config_path(&self.dir)
    }
}
