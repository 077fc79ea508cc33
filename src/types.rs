use serde::Serialize;
use strum::IntoEnumIterator;

use crate::codes::LibrtasError;
use crate::error::Error;

/// One row of the librtas status table, as exported to tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    /// Value returned by librtas (e.g. `-1003`).
    pub code: i32,
    /// `librtas.h` macro name (e.g. `"RTAS_PERM"`).
    pub name: &'static str,
    /// Fixed human-readable message.
    pub message: &'static str,
}

impl From<LibrtasError> for CodeEntry {
    fn from(err: LibrtasError) -> Self {
        Self {
            code: err.code(),
            name: err.name(),
            message: err.message(),
        }
    }
}

/// Every known librtas status, in declaration order.
pub fn catalog() -> Vec<CodeEntry> {
    LibrtasError::iter().map(CodeEntry::from).collect()
}

pub fn catalog_json() -> Result<String, Error> {
    Ok(serde_json::to_string(&catalog())?)
}
