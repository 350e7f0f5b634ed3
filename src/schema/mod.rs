//! JSON Schema validation of JFrog Apps Config documents
//!
//! The schema ships with the crate in `schema/jfrog-apps-config.schema.json`
//! and is compiled into the binary. Documents are parsed as generic YAML,
//! translated to JSON with [`yaml_to_json`], then checked against it.
//!
//! The loader never calls into this module; validation is a separate step
//! that reports every violation instead of stopping at the first one.

use std::fmt;
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::error::SchemaError;

mod convert;

pub use convert::yaml_to_json;

/// The companion JSON Schema document
pub const SCHEMA: &str = include_str!("../../schema/jfrog-apps-config.schema.json");

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value, empty for the document root
    pub path: String,

    /// Human readable description of the violation
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Compiled schema, reusable across documents
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile the embedded [`SCHEMA`]
    pub fn new() -> Result<Self, SchemaError> {
        Self::from_schema_str(SCHEMA)
    }

    /// Compile a schema given as JSON text
    pub fn from_schema_str(schema: &str) -> Result<Self, SchemaError> {
        let schema: JsonValue =
            serde_json::from_str(schema).map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;
        let validator = jsonschema::validator_for(&schema)
            .map_err(|e| SchemaError::InvalidSchema(e.to_string()))?;

        Ok(Self { validator })
    }

    /// Validate a JSON document, returning all violations
    pub fn validate_value(&self, document: &JsonValue) -> Vec<SchemaViolation> {
        self.validator
            .iter_errors(document)
            .map(|err| SchemaViolation {
                path: err.instance_path.to_string(),
                message: err.to_string(),
            })
            .collect()
    }

    /// Parse YAML text and validate it
    pub fn validate_yaml_str(&self, contents: &str) -> Result<Vec<SchemaViolation>, SchemaError> {
        let document: serde_yaml::Value = serde_yaml::from_str(contents)?;
        Ok(self.validate_value(&yaml_to_json(&document)))
    }

    /// Read a YAML file and validate it
    pub fn validate_file(&self, path: &Path) -> Result<Vec<SchemaViolation>, SchemaError> {
        let contents = std::fs::read_to_string(path)?;
        let violations = self.validate_yaml_str(&contents)?;
        log::debug!(
            "Validated {}: {} violation(s)",
            path.display(),
            violations.len()
        );
        Ok(violations)
    }
}
