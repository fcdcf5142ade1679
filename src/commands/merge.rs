use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::commands::output::write_document;
use crate::error::{HarsnipError, Result};
use crate::har::{deep_merge, load_entries, SnippetDocument};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Concatenate entry lists in file order
    #[default]
    Append,
    /// Deep-merge entries at the same list position
    Update,
}

pub struct MergeOptions {
    pub mode: MergeMode,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

/// Combine entry lists, one per input file, in input order.
///
/// `Append` keeps every entry. `Update` yields one entry per index up to the
/// longest list, deep-merging whichever lists still have an entry there.
pub fn merge_entry_lists(lists: Vec<Vec<Value>>, mode: MergeMode) -> Vec<Value> {
    match mode {
        MergeMode::Append => lists.into_iter().flatten().collect(),
        MergeMode::Update => {
            let longest = lists.iter().map(Vec::len).max().unwrap_or(0);
            let mut iters: Vec<_> = lists.into_iter().map(Vec::into_iter).collect();

            (0..longest)
                .map(|_| {
                    let mut merged = Value::Object(Map::new());
                    for entry in iters.iter_mut().filter_map(|it| it.next()) {
                        deep_merge(&mut merged, entry);
                    }
                    merged
                })
                .collect()
        }
    }
}

pub fn run_merge(files: Vec<PathBuf>, options: &MergeOptions) -> Result<()> {
    if files.is_empty() {
        return Err(HarsnipError::InvalidArgs(
            "Provide at least one partial JSON file to merge".to_string(),
        ));
    }

    let lists = files
        .iter()
        .map(|path| load_entries(path))
        .collect::<Result<Vec<_>>>()?;
    let merged = merge_entry_lists(lists, options.mode);

    tracing::info!(
        "merged {} files into {} entries ({:?})",
        files.len(),
        merged.len(),
        options.mode
    );

    write_document(
        &SnippetDocument::new(merged),
        options.output.as_deref(),
        options.pretty,
    )
}
