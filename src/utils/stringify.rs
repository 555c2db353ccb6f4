//! Value-to-text rendering used at ingestion time.
//!
//! The default renders the value as JSON, so field names are indexed along
//! with field values. [`Stringifier::json_values_only`] drops object keys and
//! indexes only the leaf values.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure to turn a value into indexable text.
#[derive(Error, Debug)]
pub enum StringifyError {
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Custom(String),
}

type StringifyFn<V> = dyn Fn(&V) -> Result<String, StringifyError> + Send + Sync;

/// Pluggable `value -> text` stage of the ingestion pipeline.
pub struct Stringifier<V> {
    inner: Arc<StringifyFn<V>>,
}

impl<V> Clone for Stringifier<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for Stringifier<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Stringifier(..)")
    }
}

impl<V> Stringifier<V> {
    /// Wrap an arbitrary fallible function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&V) -> Result<String, StringifyError> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Wrap an infallible function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        Self::custom(move |v| Ok(f(v)))
    }

    #[inline]
    pub fn stringify(&self, value: &V) -> Result<String, StringifyError> {
        (self.inner)(value)
    }
}

impl<V: Serialize> Stringifier<V> {
    /// Structural JSON rendering (keys and values).
    pub fn json() -> Self {
        Self::custom(|v| Ok(serde_json::to_string(v)?))
    }

    /// JSON rendering with object keys omitted.
    pub fn json_values_only() -> Self {
        Self::custom(|v| {
            let value = serde_json::to_value(v)?;
            let mut out = String::new();
            write_values(&value, &mut out);
            Ok(out)
        })
    }
}

/// Append every leaf of `value` to `out`, space separated.
fn write_values(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::Bool(b) => push_word(out, if *b { "true" } else { "false" }),
        Value::Number(n) => push_word(out, &n.to_string()),
        Value::String(s) => push_word(out, s),
        Value::Array(items) => {
            for item in items {
                write_values(item, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                write_values(item, out);
            }
        }
    }
}

fn push_word(out: &mut String, word: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        id: u32,
        name: &'static str,
        tags: Vec<&'static str>,
    }

    fn item() -> Item {
        Item {
            id: 7,
            name: "Apple pie",
            tags: vec!["dessert", "baked"],
        }
    }

    #[test]
    fn test_json_includes_keys() {
        let text = Stringifier::json().stringify(&item()).unwrap();
        assert!(text.contains("\"name\""));
        assert!(text.contains("Apple pie"));
    }

    #[test]
    fn test_values_only_drops_keys() {
        let text = Stringifier::json_values_only().stringify(&item()).unwrap();
        assert_eq!(text, "7 Apple pie dessert baked");
        assert!(!text.contains("name"));
    }

    #[test]
    fn test_values_only_skips_null() {
        let value = serde_json::json!({"a": null, "b": true, "c": [1, 2.5]});
        let text = Stringifier::json_values_only().stringify(&value).unwrap();
        assert_eq!(text, "true 1 2.5");
    }

    #[test]
    fn test_custom_error_is_propagated() {
        let s: Stringifier<u32> =
            Stringifier::custom(|_| Err(StringifyError::Custom("nope".to_string())));
        let err = s.stringify(&1).unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
