//! Typed model of the JFrog Apps Config document
//!
//! Every field is optional. `None` means the key was absent from the
//! document and is never written back out; `Some(vec![])` is an explicitly
//! empty list and round-trips as `[]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Root of `.jfrog/jfrog-apps-config.yml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JFrogAppsConfig {
    /// Document version tag, currently "1.0"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Modules in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
}

/// A logical subdivision of the repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Path relative to the repository root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,

    /// Scanner categories skipped entirely for this module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_scanners: Option<Vec<String>>,

    /// Per-scanner overrides; `None` leaves every scanner on its defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scanners: Option<Scanners>,
}

/// Per-scanner settings of a module
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scanners {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Scanner>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iac: Option<Scanner>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sast: Option<SastScanner>,
}

/// Settings shared by every scanner type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scanner {
    /// Directories to scan, relative to the module source root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dirs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
}

/// SAST settings.
///
/// The base [`Scanner`] fields sit next to `language` in the document.
/// (De)serialization goes through `SastDocument`, so the base fields are
/// read exactly as they are under `secrets` and `iac`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SastDocument", into = "SastDocument")]
pub struct SastScanner {
    pub scanner: Scanner,

    pub language: Option<String>,

    /// SAST rule identifiers to suppress
    pub excluded_rules: Option<Vec<String>>,
}

/// Document shape of the `sast` block
#[derive(Serialize, Deserialize)]
struct SastDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    working_dirs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_patterns: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    excluded_rules: Option<Vec<String>>,
}

impl From<SastDocument> for SastScanner {
    fn from(doc: SastDocument) -> Self {
        Self {
            scanner: Scanner {
                working_dirs: doc.working_dirs,
                exclude_patterns: doc.exclude_patterns,
            },
            language: doc.language,
            excluded_rules: doc.excluded_rules,
        }
    }
}

impl From<SastScanner> for SastDocument {
    fn from(sast: SastScanner) -> Self {
        Self {
            working_dirs: sast.scanner.working_dirs,
            exclude_patterns: sast.scanner.exclude_patterns,
            language: sast.language,
            excluded_rules: sast.excluded_rules,
        }
    }
}

/// Scanner categories as named in `exclude_scanners` and under `scanners`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerKind {
    Secrets,
    Iac,
    Sast,
}

impl ScannerKind {
    /// All kinds in document order
    pub const ALL: [ScannerKind; 3] = [ScannerKind::Secrets, ScannerKind::Iac, ScannerKind::Sast];

    /// Key used for this kind in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            ScannerKind::Secrets => "secrets",
            ScannerKind::Iac => "iac",
            ScannerKind::Sast => "sast",
        }
    }
}

impl fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScannerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secrets" => Ok(ScannerKind::Secrets),
            "iac" => Ok(ScannerKind::Iac),
            "sast" => Ok(ScannerKind::Sast),
            other => Err(format!("unknown scanner: {}", other)),
        }
    }
}

impl JFrogAppsConfig {
    /// Modules as a slice, empty when the key is absent
    pub fn modules(&self) -> &[Module] {
        self.modules.as_deref().unwrap_or_default()
    }

    /// Serialize back to YAML. Absent fields are omitted.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Module {
    /// Whether `kind` is listed in `exclude_scanners`
    pub fn excludes_scanner(&self, kind: ScannerKind) -> bool {
        self.exclude_scanners
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == kind.as_str()))
    }

    /// Configured settings for `kind`, if any
    pub fn scanner(&self, kind: ScannerKind) -> Option<&Scanner> {
        self.scanners.as_ref().and_then(|s| s.get(kind))
    }
}

impl Scanners {
    /// Base settings for `kind`. For SAST this is the embedded [`Scanner`].
    pub fn get(&self, kind: ScannerKind) -> Option<&Scanner> {
        match kind {
            ScannerKind::Secrets => self.secrets.as_ref(),
            ScannerKind::Iac => self.iac.as_ref(),
            ScannerKind::Sast => self.sast.as_ref().map(|s| &s.scanner),
        }
    }
}

impl AsRef<Scanner> for SastScanner {
    fn as_ref(&self) -> &Scanner {
        &self.scanner
    }
}
