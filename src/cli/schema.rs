//! Schema command implementation

use crate::error::Result;
use crate::schema::SCHEMA;

/// Print the embedded JSON schema
pub fn run() -> Result<()> {
    println!("{}", SCHEMA.trim_end());
    Ok(())
}
