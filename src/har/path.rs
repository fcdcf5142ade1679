use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{HarsnipError, Result};

/// A dot-separated field path into a HAR entry, e.g. `request.url`.
///
/// The same segments drive both lookup ([`FieldPath::lookup`]) and
/// reconstruction ([`FieldPath::nest`]), so a snippet keeps the nesting of
/// the entry it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(expr: &str) -> Result<Self> {
        if expr.is_empty() {
            return Err(HarsnipError::InvalidArgs(
                "Field path cannot be empty".to_string(),
            ));
        }

        let segments: Vec<String> = expr.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(HarsnipError::InvalidArgs(format!(
                "Invalid field path '{expr}'; expected dot-separated keys like 'request.url'",
            )));
        }

        Ok(Self {
            raw: expr.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk `value` along the path. Returns `None` as soon as a segment is
    /// missing. Array values are indexed by numeric segments.
    pub fn lookup<'a>(&self, value: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(value, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    /// Build `{seg0: {seg1: {...: value}}}` for this path.
    pub fn nest(&self, value: Value) -> Value {
        nest(&self.segments, value)
    }
}

impl FromStr for FieldPath {
    type Err = HarsnipError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Wrap `value` in one single-key object per segment, innermost last.
pub fn nest<S: AsRef<str>>(segments: &[S], value: Value) -> Value {
    segments.iter().rev().fold(value, |inner, key| {
        let mut map = Map::new();
        map.insert(key.as_ref().to_string(), inner);
        Value::Object(map)
    })
}

#[cfg(test)]
mod tests {
    use super::{nest, FieldPath};
    use serde_json::json;

    #[test]
    fn parses_dotted_paths() {
        let path = FieldPath::parse("response.content.mimeType").unwrap();
        assert_eq!(path.segments(), ["response", "content", "mimeType"]);
        assert_eq!(path.as_str(), "response.content.mimeType");
        assert_eq!(path.to_string(), "response.content.mimeType");
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("request..url").is_err());
        assert!(FieldPath::parse(".request").is_err());
        assert!(FieldPath::parse("request.").is_err());
    }

    #[test]
    fn looks_up_nested_values() {
        let entry = json!({
            "request": {"method": "GET", "url": "https://example.com/"},
            "response": {"status": 200}
        });

        let url = FieldPath::parse("request.url").unwrap();
        let status = FieldPath::parse("response.status").unwrap();
        assert_eq!(url.lookup(&entry), Some(&json!("https://example.com/")));
        assert_eq!(status.lookup(&entry), Some(&json!(200)));
    }

    #[test]
    fn missing_segments_are_absent() {
        let entry = json!({"request": {"url": "https://example.com/"}});

        assert_eq!(FieldPath::parse("response.status").unwrap().lookup(&entry), None);
        assert_eq!(FieldPath::parse("request.url.host").unwrap().lookup(&entry), None);
    }

    #[test]
    fn indexes_arrays_with_numeric_segments() {
        let entry = json!({
            "request": {"headers": [{"name": "accept", "value": "*/*"}]}
        });

        let first = FieldPath::parse("request.headers.0.name").unwrap();
        assert_eq!(first.lookup(&entry), Some(&json!("accept")));

        let out_of_range = FieldPath::parse("request.headers.3.name").unwrap();
        assert_eq!(out_of_range.lookup(&entry), None);

        let not_an_index = FieldPath::parse("request.headers.name").unwrap();
        assert_eq!(not_an_index.lookup(&entry), None);
    }

    #[test]
    fn nest_builds_key_chain() {
        assert_eq!(
            nest(&["a", "b", "c"], json!(1)),
            json!({"a": {"b": {"c": 1}}})
        );
        assert_eq!(nest(&["a"], json!(null)), json!({"a": null}));
    }

    #[test]
    fn nest_then_lookup_returns_value() {
        let value = json!({"deep": ["x", {"y": true}]});
        let path = FieldPath::parse("response.content.text").unwrap();

        let nested = path.nest(value.clone());
        assert_eq!(path.lookup(&nested), Some(&value));
    }
}
