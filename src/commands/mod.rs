mod extract;
mod merge;
mod output;

pub use extract::{
    run_extract, EntryFilter, ExtractOptions, Extractor, DEFAULT_FILTER, DEFAULT_FILTER_APPLY_NO,
};
pub use merge::{merge_entry_lists, run_merge, MergeMode, MergeOptions};
pub use output::write_document;
