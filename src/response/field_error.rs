use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Per-field violation detail included in validation error responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    /// Dotted/bracketed path into the rejected input (e.g. "address.city", "items[2].qty")
    pub field: String,
    /// Stringified rejected value, empty when the original value was absent
    pub rejected_value: String,
    /// Human-readable violation description
    pub reason: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        rejected_value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rejected_value: rejected_value.into(),
            reason: reason.into(),
        }
    }

    /// Flatten a [`validator::ValidationErrors`] tree into field errors.
    ///
    /// Nested structs contribute dotted paths, list entries bracketed
    /// indices. The validator stores violations in a `HashMap`, so entries
    /// are stable-sorted by field path to keep responses deterministic;
    /// within one field the constraint declaration order is kept.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut out = Vec::new();
        collect(errors, "", &mut out);
        out.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(violations) => {
                for violation in violations {
                    let rejected = violation
                        .params
                        .get("value")
                        .map(stringify)
                        .unwrap_or_default();
                    let reason = violation
                        .message
                        .as_deref()
                        .unwrap_or(violation.code.as_ref())
                        .to_string();
                    out.push(FieldError::new(path.clone(), rejected, reason));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

// Absent values surface as an empty string, never as a secondary failure.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
