//! JFrog Apps Config
//!
//! Model, loader and schema validation for `.jfrog/jfrog-apps-config.yml`,
//! the file that splits a repository into modules for secrets, IaC and SAST
//! scanning.
//!
//! ```no_run
//! use jfrog_apps_config::load_config_if_exists_in;
//!
//! match load_config_if_exists_in("path/to/repo")? {
//!     Some(config) => println!("{} module(s)", config.modules().len()),
//!     None => println!("no config, default scanning applies"),
//! }
//! # Ok::<(), jfrog_apps_config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod schema;

pub use config::{
    JFrogAppsConfig, Module, SastScanner, Scanner, ScannerKind, Scanners, config_path,
    load_config_if_exists, load_config_if_exists_in,
};
pub use error::{ConfigError, SchemaError};
pub use schema::{SchemaValidator, SchemaViolation};
