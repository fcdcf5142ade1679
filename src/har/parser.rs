use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{HarsnipError, Result};

/// Output document: `{"log": {"entries": [...]}}`.
///
/// Partial documents read back by merge mode have the same shape, so the
/// output of one run can feed the next.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetDocument {
    pub log: SnippetLog,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnippetLog {
    #[serde(default)]
    pub entries: Vec<Value>,
}

impl SnippetDocument {
    pub fn new(entries: Vec<Value>) -> Self {
        Self {
            log: SnippetLog { entries },
        }
    }
}

/// Parse a JSON file from disk without assuming any schema.
pub fn parse_json_file(path: &Path) -> Result<Value> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|err| {
        HarsnipError::InvalidDocument(format!("failed to parse {}: {}", path.display(), err))
    })
}

/// Move `log.entries` out of a parsed document.
///
/// A missing or null `log.entries` yields an empty list.
pub fn take_entries(mut document: Value) -> Result<Vec<Value>> {
    let entries = document
        .get_mut("log")
        .and_then(|log| log.get_mut("entries"))
        .map(Value::take);

    match entries {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(HarsnipError::InvalidDocument(format!(
            "log.entries must be an array, found {}",
            value_kind(&other)
        ))),
    }
}

/// Load the entry list of a HAR or partial JSON file.
pub fn load_entries(path: &Path) -> Result<Vec<Value>> {
    let document = parse_json_file(path)?;
    let entries = take_entries(document).map_err(|err| match err {
        HarsnipError::InvalidDocument(msg) => {
            HarsnipError::InvalidDocument(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;
    tracing::debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::{take_entries, SnippetDocument};
    use serde_json::json;

    #[test]
    fn takes_entries_from_har() {
        let har = json!({
            "log": {
                "version": "1.2",
                "entries": [
                    {"request": {"method": "GET", "url": "https://example.com/"}},
                    {"request": {"method": "POST", "url": "https://example.com/api"}}
                ]
            }
        });

        let entries = take_entries(har).expect("entries should load");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1]["request"]["method"], "POST");
    }

    #[test]
    fn missing_entries_are_empty() {
        assert!(take_entries(json!({})).unwrap().is_empty());
        assert!(take_entries(json!({"log": {}})).unwrap().is_empty());
        assert!(take_entries(json!({"log": {"entries": null}})).unwrap().is_empty());
        assert!(take_entries(json!([1, 2, 3])).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array_entries() {
        let err = take_entries(json!({"log": {"entries": {"a": 1}}})).unwrap_err();
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn serializes_log_shape() {
        let doc = SnippetDocument::new(vec![json!({"request": {"url": "u"}})]);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"log": {"entries": [{"request": {"url": "u"}}]}})
        );
        assert_eq!(
            serde_json::to_string(&SnippetDocument::default()).unwrap(),
            r#"{"log":{"entries":[]}}"#
        );
    }
}
