//! Error types for record validation.

use std::fmt;

use thiserror::Error;

/// What is wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The field is absent under both its wire key and internal name.
    Missing,
    /// The field is present but null.
    Null,
    /// The field has the wrong JSON type.
    TypeMismatch {
        /// Declared type, e.g. `"integer"` or `"list of Lab"`.
        expected: String,
        /// JSON type that was found, e.g. `"string"`.
        found: &'static str,
    },
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("field required"),
            Self::Null => f.write_str("none is not an allowed value"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
        }
    }
}

/// One invalid field, located by its wire-key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Path from the record root, e.g. `problems[0].Diabetes[1].labs`.
    pub path: String,
    /// The problem found at that path.
    pub kind: IssueKind,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        write!(f, "{}: {}", path, self.kind)
    }
}

/// Every invalid field found while validating one input mapping.
///
/// Validation does not stop at the first problem, so `issues` lists all of
/// them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} validation error(s) for {record}{}", .issues.len(), render(.issues))]
pub struct ValidationError {
    /// Record type being constructed.
    pub record: &'static str,
    /// Invalid fields, in the order they were found.
    pub issues: Vec<FieldIssue>,
}

fn render(issues: &[FieldIssue]) -> String {
    issues.iter().map(|i| format!("\n  {}", i)).collect()
}

impl ValidationError {
    /// Returns true if any issue sits exactly at `path`.
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }

    /// Returns the paths of all issues.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

/// Errors from constructing or serializing records.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// JSON text could not be parsed, or a value could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
