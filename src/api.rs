//! Stable, supported API surface for embedding harsnip.
//!
//! This module re-exports the types and functions intended for external use.
//! Treat the contents of this module as SemVer-stable.

pub use crate::commands::{
    merge_entry_lists, run_extract, run_merge, EntryFilter, ExtractOptions, Extractor,
    MergeMode, MergeOptions, DEFAULT_FILTER, DEFAULT_FILTER_APPLY_NO,
};
pub use crate::error::{HarsnipError, Result};
pub use crate::har::{
    deep_merge, load_entries, merge_objects, nest, parse_json_file, take_entries, FieldPath,
    SnippetDocument, SnippetLog,
};
