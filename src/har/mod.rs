mod merge;
mod parser;
mod path;

pub use merge::{deep_merge, merge_objects};
pub use parser::{load_entries, parse_json_file, take_entries, SnippetDocument, SnippetLog};
pub use path::{nest, FieldPath};
