//! Validate command implementation

use std::path::PathBuf;

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::error::{Error, Result};
use crate::schema::SchemaValidator;

/// Validate `file` (or the conventional config path) against the schema.
///
/// A missing conventional file is not an error: there is nothing to
/// validate. An explicitly named file must exist.
pub fn run(file: Option<&str>, opts: &GlobalOptions) -> Result<()> {
    let path = match file {
        Some(file) => PathBuf::from(file),
        None => {
            let path = opts.config_path();
            if !path.exists() {
                println!(
                    "{} {} not found, nothing to validate",
                    "○".dimmed(),
                    path.display()
                );
                return Ok(());
            }
            path
        }
    };

    let validator = SchemaValidator::new()?;
    let violations = validator.validate_file(&path)?;

    if violations.is_empty() {
        println!("{} {} is valid", "✓".green(), path.display());
        return Ok(());
    }

    println!("{} {} is invalid:", "✗".red(), path.display());
    for violation in &violations {
        println!("  - {}", violation);
    }

    Err(Error::Other(format!(
        "{} schema violation(s) found",
        violations.len()
    )))
}
