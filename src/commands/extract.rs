use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::{Map, Value};

use crate::commands::output::write_document;
use crate::error::{HarsnipError, Result};
use crate::har::{deep_merge, load_entries, FieldPath, SnippetDocument};

pub const DEFAULT_FILTER: &str = "/(click|imp)";
pub const DEFAULT_FILTER_APPLY_NO: u8 = 2;

pub struct ExtractOptions {
    pub expr1: String,
    pub expr2: String,
    pub expr3: String,
    pub filter: String,
    pub filter_apply_no: u8,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

/// Regex applied to the value of one of the three expressions.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    regex: Regex,
    target: usize,
}

impl EntryFilter {
    /// `apply_no` is the 1-based expression number the filter looks at.
    pub fn new(pattern: &str, apply_no: u8) -> Result<Self> {
        if !(1..=3).contains(&apply_no) {
            return Err(HarsnipError::InvalidArgs(format!(
                "Filter target must be 1, 2, or 3 (got {apply_no})",
            )));
        }
        Ok(Self {
            regex: Regex::new(pattern)?,
            target: usize::from(apply_no - 1),
        })
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Only present string values can match.
    pub fn matches(&self, value: Option<&Value>) -> bool {
        match value {
            Some(Value::String(s)) => self.regex.is_match(s),
            _ => false,
        }
    }
}

/// Turns HAR entries into snippets holding only the three selected fields.
#[derive(Debug, Clone)]
pub struct Extractor {
    paths: [FieldPath; 3],
    filter: EntryFilter,
}

impl Extractor {
    pub fn new(paths: [FieldPath; 3], filter: EntryFilter) -> Self {
        Self { paths, filter }
    }

    pub fn from_options(options: &ExtractOptions) -> Result<Self> {
        let paths = [
            FieldPath::parse(&options.expr1)?,
            FieldPath::parse(&options.expr2)?,
            FieldPath::parse(&options.expr3)?,
        ];
        let filter = EntryFilter::new(&options.filter, options.filter_apply_no)?;
        Ok(Self::new(paths, filter))
    }

    /// Build the snippet for `entry`, or `None` when the filter rejects it.
    ///
    /// Fields are merged in expression order regardless of which one is
    /// filtered, so expr3 wins on overlapping leaves.
    pub fn snippet(&self, entry: &Value) -> Option<Value> {
        let values = self.paths.each_ref().map(|path| path.lookup(entry));
        if !self.filter.matches(values[self.filter.target()]) {
            return None;
        }

        let mut snippet = Value::Object(Map::new());
        for (path, value) in self.paths.iter().zip(values) {
            deep_merge(&mut snippet, path.nest(value.cloned().unwrap_or(Value::Null)));
        }
        Some(snippet)
    }

    pub fn extract(&self, entries: &[Value]) -> Vec<Value> {
        entries.iter().filter_map(|e| self.snippet(e)).collect()
    }
}

pub fn run_extract(har: &Path, options: &ExtractOptions) -> Result<()> {
    let extractor = Extractor::from_options(options)?;
    let entries = load_entries(har)?;
    let snippets = extractor.extract(&entries);

    tracing::info!(
        "kept {} of {} entries from {}",
        snippets.len(),
        entries.len(),
        har.display()
    );

    write_document(
        &SnippetDocument::new(snippets),
        options.output.as_deref(),
        options.pretty,
    )
}
