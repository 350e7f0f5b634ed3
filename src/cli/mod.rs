//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completion;
pub mod schema;
pub mod show;
pub mod status;
pub mod validate;

pub use args::{GlobalOptions, OutputFormat};

/// Inspect and validate JFrog Apps Config files (.jfrog/jfrog-apps-config.yml)
#[derive(Parser, Debug)]
#[command(name = "jfrog-apps-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json, yaml)
    #[arg(
        long,
        global = true,
        env = "JFROG_APPS_CONFIG_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Repository root containing the .jfrog directory
    #[arg(
        long,
        global = true,
        env = "JFROG_APPS_CONFIG_DIR",
        default_value = ".",
        hide_env = true
    )]
    pub dir: String,

    /// Enable debug logging
    #[arg(long, global = true, env = "JFROG_APPS_CONFIG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and display the repository's config
    Show,

    /// Validate a config file against the JSON schema
    Validate {
        /// File to validate (defaults to <dir>/.jfrog/jfrog-apps-config.yml)
        file: Option<String>,
    },

    /// Show where the config is looked up and whether it exists
    Status,

    /// Print the JSON schema of the config file
    Schema,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   jfrog-apps-config completion bash > /etc/bash_completion.d/jfrog-apps-config
  zsh:    jfrog-apps-config completion zsh > \"${fpath[1]}/_jfrog-apps-config\"
  fish:   jfrog-apps-config completion fish > ~/.config/fish/completions/jfrog-apps-config.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_with_file() {
        let cli = Cli::parse_from(["jfrog-apps-config", "validate", "custom.yml"]);
        match cli.command {
            Commands::Validate { file } => assert_eq!(file.as_deref(), Some("custom.yml")),
            other => panic!("Expected validate, got {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "jfrog-apps-config",
            "show",
            "--dir",
            "/repo",
            "--format",
            "json",
        ]);
        assert_eq!(cli.dir, "/repo");
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
