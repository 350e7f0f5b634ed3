//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::config::JFrogAppsConfig;
use crate::error::Result;
use crate::models::ScannerRowDisplay;

pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

impl Formattable for JFrogAppsConfig {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::format_config(self)),
            OutputFormat::Table => Ok(table::format_table(&ScannerRowDisplay::rows(self))),
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Yaml => Ok(self.to_yaml()?),
        }
    }
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    println!("{}", output.trim_end());
    Ok(())
}
