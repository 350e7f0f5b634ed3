//! Human-oriented rendering of a config

use std::fmt::Write;

use colored::Colorize;

use crate::config::{JFrogAppsConfig, Module, ScannerKind};
use crate::models::ScannerStatus;
use crate::models::display::{join_list, module_label};

/// Render a config as an indented, colored summary
pub fn format_config(config: &JFrogAppsConfig) -> String {
    let mut out = String::new();

    let version = config.version.as_deref().unwrap_or("unspecified");
    let _ = writeln!(out, "{} (version {})", "JFrog Apps Config".bold(), version);

    if config.modules().is_empty() {
        let _ = writeln!(out, "\n{} No modules defined", "○".dimmed());
        return out;
    }

    for (index, module) in config.modules().iter().enumerate() {
        out.push('\n');
        write_module(&mut out, index, module);
    }

    out
}

fn write_module(out: &mut String, index: usize, module: &Module) {
    let _ = writeln!(out, "Module: {}", module_label(index, module).bold());
    if let Some(root) = &module.source_root {
        let _ = writeln!(out, "  Source root: {}", root.cyan());
    }
    if let Some(patterns) = &module.exclude_patterns {
        let _ = writeln!(out, "  Exclude patterns: {}", join_list(Some(patterns.as_slice())));
    }

    for kind in ScannerKind::ALL {
        match ScannerStatus::of(module, kind) {
            ScannerStatus::Excluded => {
                let _ = writeln!(out, "  {} {} (excluded)", "✗".red(), kind);
            }
            ScannerStatus::Default => {
                let _ = writeln!(out, "  {} {} (defaults)", "○".dimmed(), kind);
            }
            ScannerStatus::Configured => {
                let _ = writeln!(out, "  {} {}", "✓".green(), kind);
                write_scanner_settings(out, module, kind);
            }
        }
    }
}

fn write_scanner_settings(out: &mut String, module: &Module, kind: ScannerKind) {
    if let Some(scanner) = module.scanner(kind) {
        if let Some(dirs) = &scanner.working_dirs {
            let _ = writeln!(out, "      Working dirs: {}", join_list(Some(dirs.as_slice())));
        }
        if let Some(patterns) = &scanner.exclude_patterns {
            let _ = writeln!(out, "      Exclude patterns: {}", join_list(Some(patterns.as_slice())));
        }
    }

    if kind != ScannerKind::Sast {
        return;
    }
    let Some(sast) = module.scanners.as_ref().and_then(|s| s.sast.as_ref()) else {
        return;
    };
    if let Some(language) = &sast.language {
        let _ = writeln!(out, "      Language: {}", language);
    }
    if let Some(rules) = &sast.excluded_rules {
        let _ = writeln!(out, "      Excluded rules: {}", join_list(Some(rules.as_slice())));
    }
}
