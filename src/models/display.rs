//! Display models for table output
//!
//! Display models flatten the nested config document into CLI-friendly
//! rows with appropriate column names.

use tabled::Tabled;

use crate::config::{JFrogAppsConfig, Module, ScannerKind};

/// Placeholder for empty cells
const NONE: &str = "-";

/// How a scanner applies to a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerStatus {
    /// Listed in the module's `exclude_scanners`
    Excluded,
    /// Has its own settings under `scanners`
    Configured,
    /// Runs with the consumer's defaults
    Default,
}

impl ScannerStatus {
    pub fn of(module: &Module, kind: ScannerKind) -> Self {
        if module.excludes_scanner(kind) {
            ScannerStatus::Excluded
        } else if module.scanner(kind).is_some() {
            ScannerStatus::Configured
        } else {
            ScannerStatus::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerStatus::Excluded => "excluded",
            ScannerStatus::Configured => "configured",
            ScannerStatus::Default => "default",
        }
    }
}

impl std::fmt::Display for ScannerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row per module and scanner kind
#[derive(Debug, Clone, Tabled)]
pub struct ScannerRowDisplay {
    #[tabled(rename = "MODULE")]
    pub module: String,

    #[tabled(rename = "SOURCE ROOT")]
    pub source_root: String,

    #[tabled(rename = "SCANNER")]
    pub scanner: String,

    #[tabled(rename = "STATUS")]
    pub status: ScannerStatus,

    #[tabled(rename = "WORKING DIRS")]
    pub working_dirs: String,

    #[tabled(rename = "EXCLUDE PATTERNS")]
    pub exclude_patterns: String,
}

impl ScannerRowDisplay {
    /// Rows for every module of `config`, in declaration order
    pub fn rows(config: &JFrogAppsConfig) -> Vec<Self> {
        config
            .modules()
            .iter()
            .enumerate()
            .flat_map(|(index, module)| Self::module_rows(index, module))
            .collect()
    }

    fn module_rows(index: usize, module: &Module) -> Vec<Self> {
        let name = module_label(index, module);
        let source_root = module.source_root.clone().unwrap_or_else(|| NONE.to_string());

        ScannerKind::ALL
            .iter()
            .map(|&kind| {
                let scanner = module.scanner(kind);
                Self {
                    module: name.clone(),
                    source_root: source_root.clone(),
                    scanner: kind.to_string(),
                    status: ScannerStatus::of(module, kind),
                    working_dirs: join_list(scanner.and_then(|s| s.working_dirs.as_deref())),
                    exclude_patterns: join_list(
                        scanner.and_then(|s| s.exclude_patterns.as_deref()),
                    ),
                }
            })
            .collect()
    }
}

/// Module name, or its position when unnamed
pub fn module_label(index: usize, module: &Module) -> String {
    module
        .name
        .clone()
        .unwrap_or_else(|| format!("#{}", index + 1))
}

/// Comma-separated list, or a dash when absent or empty
pub fn join_list(items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join(", "),
        _ => NONE.to_string(),
    }
}
