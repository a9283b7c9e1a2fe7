//! Natural sorting of untyped JSON values.
//!
//! [`serde_json::Value`] implements [`Keyed`], so arrays that mix numbers,
//! strings and objects sort directly with [`natural_sort`]. Each element is
//! compared by its string form and returned untouched.
//!
//! ## String forms
//!
//! | value | key |
//! |---|---|
//! | string | the string itself |
//! | number | shortest round-trip decimal (`10.02`, `1e21` as digits) |
//! | `true` / `false` / `null` | the literal |
//! | array | element keys joined by `,`, `null` elements empty |
//! | object | `[object Object]` |
//!
//! Fields resolve object members by name and array elements by index.

use crate::algo::natural_sort;
use crate::core::Keyed;
use crate::options::SortOptions;
use serde_json::Value;
use std::borrow::Cow;
use tracing::trace;

const OBJECT_KEY: &str = "[object Object]";

impl Keyed for Value {
    fn key(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => Cow::Owned(f.to_string()),
                _ => Cow::Owned(n.to_string()),
            },
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::Null => Cow::Borrowed("null"),
            Value::Array(items) => Cow::Owned(
                items
                    .iter()
                    .map(|item| match item {
                        Value::Null => Cow::Borrowed(""),
                        other => other.key(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Value::Object(_) => Cow::Borrowed(OBJECT_KEY),
        }
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self {
            Value::Object(map) => map.get(name).map(Keyed::key),
            Value::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .map(Keyed::key),
            _ => None,
        }
    }
}

/// Sorts a JSON array in natural order with options read from a JSON value.
///
/// Options are read with [`SortOptions::from_value`], so a malformed options
/// value means defaults. Input that is not an array is treated as an empty
/// array.
///
/// # Examples
///
/// ```
/// use alphanum::sort_json;
/// use serde_json::json;
///
/// let sorted = sort_json(json!(["10", 9, 2, "1", "4"]), &json!(null));
/// assert_eq!(sorted, json!(["1", 2, "4", 9, "10"]));
///
/// assert_eq!(sort_json(json!({ "a": 1 }), &json!({})), json!([]));
/// ```
pub fn sort_json(array: Value, options: &Value) -> Value {
    let options = SortOptions::from_value(options);
    match array {
        Value::Array(items) => Value::Array(natural_sort(items, &options)),
        other => {
            trace!(input = %kind(&other), "non-array input treated as empty");
            Value::Array(Vec::new())
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
