//! Show command implementation

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config;
use crate::error::Result;
use crate::output::{self, json};

/// Load the repository's config and print it in the requested format
pub fn run(opts: &GlobalOptions) -> Result<()> {
    log::debug!("Looking up config at {}", opts.config_path().display());

    let Some(config) = config::load_config_if_exists_in(opts.dir_ref())? else {
        log::debug!("No config file, default scanning applies");
        return print_absent(opts);
    };

    output::print(&config, opts.format)
}

fn print_absent(opts: &GlobalOptions) -> Result<()> {
    match opts.format {
        OutputFormat::Json => {
            println!("{}", json::format_json(&None::<config::JFrogAppsConfig>)?);
        }
        OutputFormat::Yaml => {
            println!("null");
        }
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{} No JFrog Apps Config found", "○".dimmed());
            println!(
                "  → {} not present, all scanners use their defaults",
                opts.config_path().display()
            );
        }
    }
    Ok(())
}
