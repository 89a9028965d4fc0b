//! Built-in ordering for dynamic values.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde_json::{Number, Value};

use super::types::{Comparator, OrderError};

/// Category of a dynamic value, as reported in ordering errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    Array,
    Object,
}

impl ValueKind {
    /// Categorizes a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::Text,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Text => "text",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// The ordering installed when a queue is built without a comparator.
///
/// Handles exactly two value categories:
///
/// - numbers, by numeric magnitude;
/// - text, by locale-aware collation (root locale, tertiary strength).
///
/// Any other pairing, including a number against text, fails with
/// [`OrderError`] at the moment the pair is compared.
pub struct DefaultComparator {
    collator: Collator,
}

impl DefaultComparator {
    /// Creates the comparator with root-locale collation.
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&Default::default(), options)
            .expect("root collation data is compiled into icu_collator");
        Self { collator }
    }
}

impl Default for DefaultComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator<Value> for DefaultComparator {
    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering, OrderError> {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => Ok(compare_numbers(x, y)),
            (Value::String(x), Value::String(y)) => Ok(self.collator.compare(x, y)),
            _ => Err(OrderError {
                left: ValueKind::of(a),
                right: ValueKind::of(b),
            }),
        }
    }
}

fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a.cmp(&b);
    }
    // Mixed-representation pair; f64 covers every remaining case.
    let a = x.as_f64().unwrap_or(f64::NAN);
    let b = y.as_f64().unwrap_or(f64::NAN);
    a.total_cmp(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cmp(a: Value, b: Value) -> Result<Ordering, OrderError> {
        DefaultComparator::new().compare(&a, &b)
    }

    #[test]
    fn test_numbers_by_magnitude() {
        assert_eq!(cmp(json!(2), json!(10)).unwrap(), Ordering::Less);
        assert_eq!(cmp(json!(-3), json!(2.5)).unwrap(), Ordering::Less);
        assert_eq!(cmp(json!(7), json!(7)).unwrap(), Ordering::Equal);
        assert_eq!(cmp(json!(u64::MAX), json!(1)).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_text_by_collation() {
        assert_eq!(cmp(json!("apple"), json!("banana")).unwrap(), Ordering::Less);
        // Collation orders by base letter, not by code point.
        assert_eq!(cmp(json!("ähnlich"), json!("zebra")).unwrap(), Ordering::Less);
        assert_eq!(cmp(json!("a"), json!("B")).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_unsupported_pairings_fail() {
        let err = cmp(json!(true), json!(1)).unwrap_err();
        assert_eq!(err.left, ValueKind::Bool);
        assert_eq!(err.right, ValueKind::Number);

        assert!(cmp(json!(null), json!(null)).is_err());
        assert!(cmp(json!([1]), json!({"a": 1})).is_err());
        // Number against text has no defined ordering either.
        assert!(cmp(json!(1), json!("1")).is_err());
    }

    #[test]
    fn test_error_message_names_both_kinds() {
        let err = cmp(json!(true), json!("x")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("boolean"), "{message}");
        assert!(message.contains("text"), "{message}");
    }
}
