//! Request validation against per-entity field rules.

use crate::error::{AppError, FieldError};
use serde_json::{Map, Value};

/// Declared JSON type of a body field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present (and non-null) on create.
    pub required: bool,
    /// Explicit `null` is accepted and stored as NULL.
    pub nullable: bool,
}

impl FieldRule {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
            nullable: false,
        }
    }

    pub const fn optional_integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            required: false,
            nullable: true,
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. Every required field must be present; every
    /// present field must match its kind. Unknown keys are ignored.
    pub fn validate(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        let mut errors = Vec::new();
        for rule in rules {
            match body.get(rule.name) {
                None | Some(Value::Null) if rule.required => {
                    errors.push(FieldError::new(rule.name, "field required"));
                }
                Some(v) => {
                    if let Err(e) = validate_field(rule, v) {
                        errors.push(e);
                    }
                }
                None => {}
            }
        }
        finish(errors)
    }

    /// Validate only the fields present in body (for PATCH). Required is not enforced for missing fields.
    pub fn validate_partial(body: &Map<String, Value>, rules: &[FieldRule]) -> Result<(), AppError> {
        let mut errors = Vec::new();
        for rule in rules {
            if let Some(v) = body.get(rule.name) {
                if let Err(e) = validate_field(rule, v) {
                    errors.push(e);
                }
            }
        }
        finish(errors)
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn validate_field(rule: &FieldRule, v: &Value) -> Result<(), FieldError> {
    if v.is_null() {
        if rule.nullable {
            return Ok(());
        }
        return Err(FieldError::new(rule.name, "may not be null"));
    }
    match rule.kind {
        FieldKind::Text => {
            if !v.is_string() {
                return Err(FieldError::new(rule.name, "must be a string"));
            }
        }
        FieldKind::Integer => {
            if as_i32(v).is_none() {
                return Err(FieldError::new(rule.name, "must be a 32-bit integer"));
            }
        }
    }
    Ok(())
}

/// Integers, whole-number floats and numeric strings all count, as long as they fit in `i32`.
fn as_i32(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i32::try_from(i).ok(),
            None => n.as_f64().and_then(whole_f64_to_i32),
        },
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn whole_f64_to_i32(f: f64) -> Option<i32> {
    if f.is_finite() && f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) {
        Some(f as i32)
    } else {
        None
    }
}

/// Read a validated text field. Call only after validation.
pub fn text_field(body: &Map<String, Value>, name: &str) -> Option<String> {
    body.get(name).and_then(Value::as_str).map(String::from)
}

/// Read a validated nullable integer field. Absent and `null` both yield `None`.
pub fn integer_field(body: &Map<String, Value>, name: &str) -> Option<i32> {
    body.get(name).and_then(as_i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[FieldRule] = &[
        FieldRule::text("name"),
        FieldRule::text("secret_name"),
        FieldRule::optional_integer("age"),
    ];

    fn body(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("test body must be an object"),
        }
    }

    fn field_errors(result: Result<(), AppError>) -> Vec<FieldError> {
        match result {
            Err(AppError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_minimal_create_body() {
        let b = body(json!({"name": "Ameen Alam", "secret_name": "AM"}));
        assert!(RequestValidator::validate(&b, RULES).is_ok());
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = field_errors(RequestValidator::validate(&body(json!({})), RULES));
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "secret_name"]);
    }

    #[test]
    fn rejects_object_where_string_expected() {
        let b = body(json!({
            "name": "Ameen Aalam",
            "secret_name": {"message": "Do you wanna know my secret identity?"}
        }));
        let errors = field_errors(RequestValidator::validate(&b, RULES));
        assert_eq!(errors, vec![FieldError::new("secret_name", "must be a string")]);
    }

    #[test]
    fn rejects_null_required_field() {
        let b = body(json!({"name": null, "secret_name": "AM"}));
        let errors = field_errors(RequestValidator::validate(&b, RULES));
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn integer_must_fit_i32() {
        let b = body(json!({"name": "a", "secret_name": "b", "age": 4_000_000_000_i64}));
        assert!(RequestValidator::validate(&b, RULES).is_err());

        let b = body(json!({"name": "a", "secret_name": "b", "age": 12.5}));
        assert!(RequestValidator::validate(&b, RULES).is_err());

        let b = body(json!({"name": "a", "secret_name": "b", "age": "old"}));
        assert!(RequestValidator::validate(&b, RULES).is_err());

        let b = body(json!({"name": "a", "secret_name": "b", "age": "99999999999"}));
        assert!(RequestValidator::validate(&b, RULES).is_err());

        let b = body(json!({"name": "a", "secret_name": "b", "age": true}));
        assert!(RequestValidator::validate(&b, RULES).is_err());

        let b = body(json!({"name": "a", "secret_name": "b", "age": null}));
        assert!(RequestValidator::validate(&b, RULES).is_ok());

        let b = body(json!({"name": "a", "secret_name": "b", "age": 30.0}));
        assert!(RequestValidator::validate(&b, RULES).is_ok());
        assert_eq!(integer_field(&b, "age"), Some(30));

        let b = body(json!({"name": "a", "secret_name": "b", "age": "30"}));
        assert!(RequestValidator::validate(&b, RULES).is_ok());
        assert_eq!(integer_field(&b, "age"), Some(30));
    }

    #[test]
    fn partial_skips_missing_but_checks_present() {
        assert!(RequestValidator::validate_partial(&body(json!({"name": "Nizamani"})), RULES).is_ok());
        assert!(RequestValidator::validate_partial(&body(json!({})), RULES).is_ok());

        let errors = field_errors(RequestValidator::validate_partial(
            &body(json!({"secret_name": null, "age": "old"})),
            RULES,
        ));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let b = body(json!({"name": "a", "secret_name": "b", "power": ["flight"]}));
        assert!(RequestValidator::validate(&b, RULES).is_ok());
    }

    #[test]
    fn field_readers() {
        let b = body(json!({"name": "a", "age": 30, "team_id": null}));
        assert_eq!(text_field(&b, "name").as_deref(), Some("a"));
        assert_eq!(integer_field(&b, "age"), Some(30));
        assert_eq!(integer_field(&b, "team_id"), None);
        assert_eq!(integer_field(&b, "missing"), None);
    }
}
