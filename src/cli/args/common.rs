//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (global default)
    #[default]
    Pretty,
    /// Table format - one row per module and scanner
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
    /// YAML format - the document as re-serialized from the model
    Yaml,
}
