//! Convenience prelude for common harsnip embedding tasks.

pub use crate::api::{
    deep_merge, load_entries, merge_entry_lists, Extractor, FieldPath, HarsnipError, MergeMode,
    Result, SnippetDocument,
};
