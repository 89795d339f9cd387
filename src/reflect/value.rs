//! Dynamic property values.
//!
//! [`PropertyValue`] is what flows through the untyped property path
//! (`set_property` / `get_property`, the upgrade replay). It carries the
//! host's truthiness and string conversion rules, which the codecs use to
//! decide between writing and removing an attribute.

use serde_json::Value;

use super::codec::format_number;

/// A property value of any variant.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// No value (`null` / unset).
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Arbitrary structured data (sequences, objects).
    Structured(Value),
}

impl PropertyValue {
    /// Host truthiness.
    ///
    /// `null`, `false`, `0`, `-0`, `NaN` and the empty string are falsy.
    /// Every sequence and object is truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Structured(value) => json_truthy(value),
        }
    }

    /// String conversion used when a value is written into an attribute.
    pub fn to_attribute_string(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
            Self::Structured(value) => json_to_string(value),
        }
    }

    /// Structured form of this value, for storage in an instance field.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::String(s) => Value::String(s.clone()),
            Self::Structured(value) => value.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        // Sequence elements join with commas; null elements print as nothing.
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => json_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness_of_primitives() {
        assert!(!PropertyValue::Null.is_truthy());
        assert!(!PropertyValue::from(false).is_truthy());
        assert!(!PropertyValue::from(0.0).is_truthy());
        assert!(!PropertyValue::from(-0.0).is_truthy());
        assert!(!PropertyValue::from(f64::NAN).is_truthy());
        assert!(!PropertyValue::from("").is_truthy());

        assert!(PropertyValue::from(true).is_truthy());
        assert!(PropertyValue::from(-1).is_truthy());
        assert!(PropertyValue::from(f64::INFINITY).is_truthy());
        assert!(PropertyValue::from("0").is_truthy());
    }

    #[test]
    fn test_empty_collections_are_truthy() {
        assert!(PropertyValue::from(json!([])).is_truthy());
        assert!(PropertyValue::from(json!({})).is_truthy());
        assert!(!PropertyValue::from(json!(null)).is_truthy());
        assert!(!PropertyValue::from(json!(0)).is_truthy());
        assert!(!PropertyValue::from(json!("")).is_truthy());
    }

    #[test]
    fn test_attribute_string_conversion() {
        assert_eq!(PropertyValue::from(42).to_attribute_string(), "42");
        assert_eq!(PropertyValue::from(1.5).to_attribute_string(), "1.5");
        assert_eq!(PropertyValue::from(true).to_attribute_string(), "true");
        assert_eq!(
            PropertyValue::from(json!(["a", null, 3])).to_attribute_string(),
            "a,,3"
        );
        assert_eq!(
            PropertyValue::from(json!({"foo": "bar"})).to_attribute_string(),
            "[object Object]"
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(PropertyValue::from(None::<&str>), PropertyValue::Null);
        assert_eq!(
            PropertyValue::from(Some("Pickle")),
            PropertyValue::String("Pickle".to_string())
        );
    }

    #[test]
    fn test_to_json() {
        assert_eq!(PropertyValue::from(42).to_json(), json!(42.0));
        assert_eq!(PropertyValue::from(f64::NAN).to_json(), Value::Null);
        assert_eq!(PropertyValue::from("x").to_json(), json!("x"));
    }
}
