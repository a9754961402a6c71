//! Typed field extraction from untyped JSON request bodies.
//!
//! Payloads are read field by field so that every problem is reported at once,
//! instead of stopping at the first serde error.

use std::fmt;

use serde_json::{Map, Value};

use crate::response::FieldErrors;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const NOT_A_STRING: &str = "Not a valid string.";
pub const NOT_A_BOOLEAN: &str = "Must be a valid boolean.";

/// Collects typed values and per-field errors from a JSON object.
pub struct FieldReader<'a> {
    data: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    /// Fails when the body is not a JSON object.
    pub fn new(data: &'a Value) -> Result<Self, FieldErrors> {
        match data {
            Value::Object(data) => Ok(Self {
                data,
                errors: FieldErrors::new(),
            }),
            other => Err(FieldErrors::non_field(format!(
                "Invalid data. Expected a dictionary, but got {}.",
                kind(other)
            ))),
        }
    }

    /// A non-blank string, trimmed.
    pub fn required_string(&mut self, field: &str) -> Option<String> {
        match self.data.get(field) {
            None => self.reject(field, REQUIRED),
            Some(Value::Null) => self.reject(field, NOT_NULL),
            Some(value) => self.string(field, value),
        }
    }

    /// A string that may be absent or `null`. Blank strings count as absent.
    pub fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.data.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => self.string(field, value),
        }
    }

    /// A string kept verbatim, without trimming. Used for secrets.
    pub fn required_raw_string(&mut self, field: &str) -> Option<String> {
        match self.data.get(field) {
            None => self.reject(field, REQUIRED),
            Some(Value::Null) => self.reject(field, NOT_NULL),
            Some(Value::String(s)) if s.is_empty() => self.reject(field, NOT_BLANK),
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => self.reject(field, NOT_A_STRING),
        }
    }

    /// An integer primary key referencing another record.
    pub fn required_pk(&mut self, field: &str) -> Option<i32> {
        match self.data.get(field) {
            None => self.reject(field, REQUIRED),
            Some(Value::Null) => self.reject(field, NOT_NULL),
            Some(value) => match integer(value).map(|n| (n, i32::try_from(n))) {
                Some((_, Ok(pk))) => Some(pk),
                // Well-formed, but beyond the key column's range.
                Some((n, Err(_))) => self.reject(field, &missing_pk(n)),
                None => self.reject(field, &incorrect_pk_type(value)),
            },
        }
    }

    /// A boolean flag that falls back to `default` when absent.
    pub fn optional_bool(&mut self, field: &str, default: bool) -> Option<bool> {
        match self.data.get(field) {
            None | Some(Value::Null) => Some(default),
            Some(Value::Bool(b)) => Some(*b),
            Some(_) => self.reject(field, NOT_A_BOOLEAN),
        }
    }

    /// Record an error found outside the reader, e.g. an unresolvable relation.
    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }

    fn string(&mut self, field: &str, value: &Value) -> Option<String> {
        match value {
            Value::String(s) if s.trim().is_empty() => self.reject(field, NOT_BLANK),
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => self.reject(field, NOT_A_STRING),
        }
    }

    fn reject<T>(&mut self, field: &str, message: &str) -> Option<T> {
        self.errors.add(field, message);
        None
    }
}

/// Message for a relation whose referenced record does not exist.
pub fn missing_pk(pk: impl fmt::Display) -> String {
    format!("Invalid pk \"{pk}\" - object does not exist.")
}

fn integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn incorrect_pk_type(value: &Value) -> String {
    format!(
        "Incorrect type. Expected pk value, received {}.",
        kind(value)
    )
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_bodies() {
        let errors = FieldReader::new(&json!([1, 2])).err().unwrap();
        assert_eq!(
            errors.get("non_field_errors"),
            Some(&["Invalid data. Expected a dictionary, but got list.".to_string()][..])
        );
    }

    #[test]
    fn collects_every_missing_field() {
        let body = json!({});
        let mut reader = FieldReader::new(&body).unwrap();

        assert_eq!(reader.required_string("title"), None);
        assert_eq!(reader.required_string("content"), None);
        assert_eq!(reader.required_pk("author"), None);

        let errors = reader.finish();
        for field in ["title", "content", "author"] {
            assert_eq!(errors.get(field), Some(&[REQUIRED.to_string()][..]));
        }
    }

    #[test]
    fn strings_are_trimmed_and_blank_is_rejected() {
        let body = json!({"title": "  Hello  ", "content": "   ", "image": null});
        let mut reader = FieldReader::new(&body).unwrap();

        assert_eq!(reader.required_string("title").as_deref(), Some("Hello"));
        assert_eq!(reader.required_string("content"), None);
        assert_eq!(reader.optional_string("image"), None);

        let errors = reader.finish();
        assert_eq!(errors.get("content"), Some(&[NOT_BLANK.to_string()][..]));
        assert!(!errors.contains("image"));
    }

    #[test]
    fn pk_accepts_numeric_strings_and_reports_wrong_types() {
        let body = json!({"author": "12", "post_type": true, "other": null});
        let mut reader = FieldReader::new(&body).unwrap();

        assert_eq!(reader.required_pk("author"), Some(12));
        assert_eq!(reader.required_pk("post_type"), None);
        assert_eq!(reader.required_pk("other"), None);

        let errors = reader.finish();
        assert_eq!(
            errors.get("post_type"),
            Some(&["Incorrect type. Expected pk value, received bool.".to_string()][..])
        );
        assert_eq!(errors.get("other"), Some(&[NOT_NULL.to_string()][..]));
    }

    #[test]
    fn booleans_fall_back_to_default() {
        let body = json!({"is_active": false, "is_staff": "yes"});
        let mut reader = FieldReader::new(&body).unwrap();

        assert_eq!(reader.optional_bool("is_active", true), Some(false));
        assert_eq!(reader.optional_bool("is_admin", false), Some(false));
        assert_eq!(reader.optional_bool("is_staff", false), None);
        assert!(reader.finish().contains("is_staff"));
    }

    #[test]
    fn out_of_range_pk_does_not_exist() {
        let body = json!({"author": 99999999999_i64, "post_type": "-3000000000"});
        let mut reader = FieldReader::new(&body).unwrap();

        assert_eq!(reader.required_pk("author"), None);
        assert_eq!(reader.required_pk("post_type"), None);

        let errors = reader.finish();
        assert_eq!(
            errors.get("author"),
            Some(&["Invalid pk \"99999999999\" - object does not exist.".to_string()][..])
        );
        assert_eq!(
            errors.get("post_type"),
            Some(&["Invalid pk \"-3000000000\" - object does not exist.".to_string()][..])
        );
    }

    #[test]
    fn missing_pk_message() {
        assert_eq!(missing_pk(5), "Invalid pk \"5\" - object does not exist.");
    }
}
