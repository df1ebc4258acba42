// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Explicit key schemas checked before a record is populated.

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// One JSON key of a record.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub required: bool,
    /// Schema of a nested object, checked when the key holds a non-null value.
    pub nested: Option<&'static Schema>,
}

impl Field {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            nested: None,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            nested: None,
        }
    }

    pub const fn nested(self, schema: &'static Schema) -> Self {
        Self {
            nested: Some(schema),
            ..self
        }
    }
}

/// Key set of a record, in encode order.
#[derive(Debug)]
pub struct Schema {
    pub record: &'static str,
    pub fields: &'static [Field],
}

impl Schema {
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    pub fn optional(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| !f.required).map(|f| f.name)
    }

    /// Checks that `value` is an object holding every required key.
    /// Reports the first missing key in schema order. Unknown keys are ignored.
    pub fn check<'a>(&self, value: &'a Value) -> Result<&'a Map<String, Value>, DecodeError> {
        let obj = value.as_object().ok_or(DecodeError::NotAnObject {
            record: self.record,
        })?;

        for field in self.fields {
            match obj.get(field.name) {
                None if field.required => {
                    return Err(DecodeError::MissingField {
                        record: self.record,
                        field: field.name,
                    });
                }
                Some(inner) if !inner.is_null() => {
                    if let Some(schema) = field.nested {
                        schema.check(inner)?;
                    }
                }
                _ => {}
            }
        }

        Ok(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static INNER: Schema = Schema {
        record: "Inner",
        fields: &[Field::required("x")],
    };

    static OUTER: Schema = Schema {
        record: "Outer",
        fields: &[
            Field::required("a"),
            Field::optional("inner").nested(&INNER),
            Field::required("b"),
        ],
    };

    #[test]
    fn test_accepts_complete_object() {
        assert!(OUTER.check(&json!({"a": 1, "b": 2})).is_ok());
        assert!(OUTER.check(&json!({"a": 1, "inner": null, "b": 2})).is_ok());
        assert!(OUTER.check(&json!({"a": 1, "inner": {"x": 0}, "b": 2, "extra": true})).is_ok());
    }

    #[test]
    fn test_reports_first_missing_key() {
        let err = OUTER.check(&json!({})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField { record: "Outer", field: "a" }
        ));
        let err = OUTER.check(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { field: "b", .. }));
    }

    #[test]
    fn test_checks_nested_object() {
        let err = OUTER.check(&json!({"a": 1, "inner": {}, "b": 2})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MissingField { record: "Inner", field: "x" }
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            OUTER.check(&json!([1, 2])),
            Err(DecodeError::NotAnObject { record: "Outer" })
        ));
    }

    #[test]
    fn test_key_listing() {
        assert_eq!(OUTER.required().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(OUTER.optional().collect::<Vec<_>>(), vec!["inner"]);
    }
}
