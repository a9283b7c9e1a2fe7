//! Configuration options for natural sorting.
//!
//! [`SortOptions`] can be built in code with the `with_*` builders, embedded
//! in a serde configuration (camelCase field names), or read from an untyped
//! JSON value with [`SortOptions::from_value`], which never fails.
//!
//! ## Examples
//!
//! ```rust
//! use alphanum::SortOptions;
//!
//! let options = SortOptions::new()
//!     .with_sort_by("key")
//!     .with_sort_by_secondary("value")
//!     .with_reverse(true);
//!
//! let parsed: SortOptions = r#"{"sortBy": "key", "sortBySecondary": "value", "reverse": 1}"#
//!     .parse()
//!     .unwrap();
//! assert_eq!(parsed, options);
//! ```

use crate::core::Keyed;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Options controlling one natural sort.
///
/// All fields default to disabled or absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortOptions {
    /// Treat a `+`/`-` directly before a digit run as its sign.
    pub sign: bool,
    /// Field used as the primary key instead of the whole value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Field compared when primary keys are equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by_secondary: Option<String>,
    /// Reverse the final order.
    pub reverse: bool,
    /// Lowercase keys before comparing.
    pub insensitive: bool,
}

impl SortOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alphanum::SortOptions;
    ///
    /// let options = SortOptions::new();
    /// assert!(!options.sign);
    /// assert!(options.sort_by.is_none());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sign(mut self, sign: bool) -> Self {
        self.sign = sign;
        self
    }

    #[must_use]
    pub fn with_sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_sort_by_secondary(mut self, field: impl Into<String>) -> Self {
        self.sort_by_secondary = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub fn with_insensitive(mut self, insensitive: bool) -> Self {
        self.insensitive = insensitive;
        self
    }

    /// Reads options from an untyped JSON value without failing.
    ///
    /// A value that is not an object yields the default options. Flags use
    /// truthiness: `false`, `0`, `""` and `null` are off, anything else is on.
    /// Key fields that are falsy are absent; other values are converted to
    /// their string form, so `{"sortBy": 0}` has no key but `{"sortBy": 1}`
    /// sorts by field `"1"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use alphanum::SortOptions;
    /// use serde_json::json;
    ///
    /// assert_eq!(SortOptions::from_value(&json!("sign")), SortOptions::default());
    ///
    /// let options = SortOptions::from_value(&json!({ "sign": "yes", "sortBy": "" }));
    /// assert!(options.sign);
    /// assert!(options.sort_by.is_none());
    /// ```
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };
        let flag = |name: &str| map.get(name).is_some_and(truthy);
        let field = |name: &str| {
            map.get(name)
                .filter(|v| truthy(v))
                .map(|v| v.key().into_owned())
        };

        SortOptions {
            sign: flag("sign"),
            sort_by: field("sortBy"),
            sort_by_secondary: field("sortBySecondary"),
            reverse: flag("reverse"),
            insensitive: flag("insensitive"),
        }
    }

    /// Parses options from JSON text.
    ///
    /// Fails only when `s` is not valid JSON; well-formed JSON of any shape
    /// is read as by [`SortOptions::from_value`].
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Self::from_value(&value))
    }
}

impl FromStr for SortOptions {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_wrong_shape_is_default() {
        for value in [json!(null), json!(true), json!(3), json!("x"), json!([1, 2])] {
            assert_eq!(SortOptions::from_value(&value), SortOptions::default());
        }
    }

    #[test]
    fn test_truthiness() {
        let options = SortOptions::from_value(&json!({
            "sign": 1,
            "reverse": 0,
            "insensitive": "",
        }));
        assert!(options.sign);
        assert!(!options.reverse);
        assert!(!options.insensitive);

        let options = SortOptions::from_value(&json!({ "reverse": {}, "insensitive": [] }));
        assert!(options.reverse);
        assert!(options.insensitive);
    }

    #[test]
    fn test_key_fields() {
        let options = SortOptions::from_value(&json!({ "sortBy": "key", "sortBySecondary": null }));
        assert_eq!(options.sort_by.as_deref(), Some("key"));
        assert!(options.sort_by_secondary.is_none());

        let options = SortOptions::from_value(&json!({ "sortBy": 1, "sortBySecondary": 0 }));
        assert_eq!(options.sort_by.as_deref(), Some("1"));
        assert!(options.sort_by_secondary.is_none());
    }

    #[test]
    fn test_from_json_str() {
        let options = SortOptions::from_json_str(r#"{"insensitive": true}"#).unwrap();
        assert_eq!(options, SortOptions::new().with_insensitive(true));

        let options: SortOptions = "42".parse().unwrap();
        assert_eq!(options, SortOptions::default());

        let err = SortOptions::from_json_str("{sign: true").unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
        assert!(err.to_string().starts_with("invalid sort options"));
    }

    #[test]
    fn test_serde_camel_case() {
        let options = SortOptions::new().with_sort_by("name").with_sign(true);
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(
            value,
            json!({ "sign": true, "sortBy": "name", "reverse": false, "insensitive": false })
        );

        let typed: SortOptions = serde_json::from_value(json!({ "sortBySecondary": "v" })).unwrap();
        assert_eq!(typed, SortOptions::new().with_sort_by_secondary("v"));
    }
}
