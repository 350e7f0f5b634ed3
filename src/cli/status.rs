//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config;
use crate::error::Result;

/// Show where the config is looked up and a short summary of it
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "JFrog Apps Config Status".bold());

    let path = opts.config_path();
    println!("Config file: {}", path.display().to_string().cyan());

    match config::load_config_if_exists_in(opts.dir_ref())? {
        Some(config) => {
            println!("{} Config file found", "✓".green());

            match config.version.as_deref() {
                Some(version) if version == config::CONFIG_VERSION => {
                    println!("{} Version: {}", "✓".green(), version);
                }
                Some(version) => {
                    println!(
                        "{} Version: {} (expected {})",
                        "⚠".yellow(),
                        version,
                        config::CONFIG_VERSION
                    );
                }
                None => println!("{} Version not set", "○".dimmed()),
            }

            println!("{} Modules: {}", "○".dimmed(), config.modules().len());
        }
        None => {
            println!("{} Config file not found", "○".dimmed());
            println!("  → All scanners use their defaults");
        }
    }

    println!();
    Ok(())
}
