//! Schema-driven validation of untrusted JSON values.
//!
//! Walks a record's field table against an input object, collecting every
//! missing, null, or mistyped field instead of stopping at the first. On
//! success the input is rewritten so that every key is the field's wire key,
//! whichever of the two names the caller used.

use clinic_types::{FieldKind, FieldSpec, Schema};
use serde_json::{Map, Value};

use crate::types::{FieldIssue, IssueKind, ValidationError};

/// Validates `value` against `S` and returns it with wire keys only.
///
/// Keys not declared by the schema are dropped. Both the internal field name
/// and the wire key are accepted; when both are present the wire key wins.
///
/// # Errors
/// Returns a [`ValidationError`] listing every invalid field.
pub fn normalize<S: Schema>(value: &Value) -> Result<Map<String, Value>, ValidationError> {
    let mut issues = Vec::new();
    let normalized = match value {
        Value::Object(obj) => check_record(S::FIELDS, obj, "", &mut issues),
        Value::Null => {
            issues.push(issue("", IssueKind::Null));
            Map::new()
        }
        other => {
            issues.push(issue("", mismatch("object", other)));
            Map::new()
        }
    };

    if issues.is_empty() {
        Ok(normalized)
    } else {
        tracing::debug!(
            record = S::NAME,
            count = issues.len(),
            "record failed validation"
        );
        Err(ValidationError {
            record: S::NAME,
            issues,
        })
    }
}

/// Returns the names used in error reports for a JSON value's type.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "out-of-range integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_record(
    fields: &[FieldSpec],
    obj: &Map<String, Value>,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Map<String, Value> {
    for key in obj.keys() {
        if !fields.iter().any(|f| f.matches(key)) {
            tracing::debug!(path, key = key.as_str(), "ignoring undeclared key");
        }
    }

    let mut out = Map::new();
    for field in fields {
        let field_path = join(path, field.wire_name);
        let raw = match obj.get(field.wire_name).or_else(|| obj.get(field.name)) {
            Some(raw) => raw,
            None => {
                issues.push(issue(&field_path, IssueKind::Missing));
                continue;
            }
        };

        if let Some(value) = check_field(field, raw, &field_path, issues) {
            out.insert(field.wire_name.to_string(), value);
        }
    }
    out
}

fn check_field(
    field: &FieldSpec,
    raw: &Value,
    path: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Value> {
    if raw.is_null() {
        issues.push(issue(path, IssueKind::Null));
        return None;
    }

    match (&field.kind, raw) {
        (FieldKind::Text, Value::String(_)) => Some(raw.clone()),
        (FieldKind::Integer, Value::Number(n)) if n.is_i64() => Some(raw.clone()),
        (FieldKind::Records { record, fields }, Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, i);
                match item {
                    Value::Object(obj) => {
                        out.push(Value::Object(check_record(fields, obj, &item_path, issues)));
                    }
                    Value::Null => issues.push(issue(&item_path, IssueKind::Null)),
                    other => issues.push(issue(&item_path, mismatch(record, other))),
                }
            }
            Some(Value::Array(out))
        }
        (FieldKind::Dynamic, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_object() {
                    issues.push(issue(&format!("{}[{}]", path, i), mismatch("object", item)));
                }
            }
            Some(raw.clone())
        }
        (kind, other) => {
            issues.push(issue(path, mismatch(&kind.label(), other)));
            None
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn issue(path: &str, kind: IssueKind) -> FieldIssue {
    FieldIssue {
        path: path.to_string(),
        kind,
    }
}

fn mismatch(expected: &str, found: &Value) -> IssueKind {
    IssueKind::TypeMismatch {
        expected: expected.to_string(),
        found: json_kind(found),
    }
}
