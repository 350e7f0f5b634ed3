//! Loading of `.jfrog/jfrog-apps-config.yml`

use std::io;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub mod model;

pub use model::{JFrogAppsConfig, Module, SastScanner, Scanner, ScannerKind, Scanners};

/// Current document version
pub const CONFIG_VERSION: &str = "1.0";

/// Directory holding the config, relative to the repository root
pub const DOT_JFROG_DIR: &str = ".jfrog";

/// Config file name inside [`DOT_JFROG_DIR`]
pub const CONFIG_FILE_NAME: &str = "jfrog-apps-config.yml";

/// Conventional config path under `base_dir`
pub fn config_path(base_dir: impl AsRef<Path>) -> PathBuf {
    base_dir.as_ref().join(DOT_JFROG_DIR).join(CONFIG_FILE_NAME)
}

/// Load the config relative to the current working directory.
///
/// See [`load_config_if_exists_in`].
pub fn load_config_if_exists() -> Result<Option<JFrogAppsConfig>, ConfigError> {
    load_config_if_exists_in(".")
}

/// Load `<base_dir>/.jfrog/jfrog-apps-config.yml` if it exists.
///
/// A missing file yields `Ok(None)`. Any other read failure and any parse
/// failure are returned as-is. An empty document loads as an empty config.
pub fn load_config_if_exists_in(
    base_dir: impl AsRef<Path>,
) -> Result<Option<JFrogAppsConfig>, ConfigError> {
    let contents = match std::fs::read(config_path(base_dir)) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let config: Option<JFrogAppsConfig> = serde_yaml::from_slice(&contents)?;
    Ok(Some(config.unwrap_or_default()))
}
