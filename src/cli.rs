use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::commands::MergeMode;

#[derive(Parser)]
#[command(name = "harsnip")]
#[command(about = "Extract, filter, and recombine fields from HAR files as minimal JSON snippets.")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
pub struct Cli {
    /// HAR file to extract snippets from
    #[arg(long, value_name = "FILE", group = "mode")]
    pub extract_har: Option<PathBuf>,

    /// Partial JSON files (output of --extract-har) to merge
    #[arg(long, value_name = "FILE", num_args = 1.., group = "mode")]
    pub partial_json_files: Option<Vec<PathBuf>>,

    /// Print the resolved configuration
    #[arg(long, group = "mode")]
    pub print_config: bool,

    /// Generate shell completions
    #[cfg(feature = "completions")]
    #[arg(long, value_name = "SHELL", value_enum, group = "mode")]
    pub completions: Option<clap_complete::Shell>,

    /// First field path, e.g. response.status
    #[arg(long, value_name = "EXPR", help_heading = "Extract options")]
    pub expr1: Option<String>,

    /// Second field path, e.g. request.url
    #[arg(long, value_name = "EXPR", help_heading = "Extract options")]
    pub expr2: Option<String>,

    /// Third field path, e.g. request.method
    #[arg(long, value_name = "EXPR", help_heading = "Extract options")]
    pub expr3: Option<String>,

    /// Regex an entry must match to be kept (default: '/(click|imp)')
    #[arg(long, value_name = "REGEX", help_heading = "Extract options")]
    pub filter: Option<String>,

    /// Which expression the filter is applied to (default: 2)
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(1..=3),
        help_heading = "Extract options"
    )]
    pub filter_apply_no: Option<u8>,

    /// How entry lists are combined (default: append)
    #[arg(long, value_enum, help_heading = "Merge options")]
    pub merge_mode: Option<MergeMode>,

    /// Write the document to FILE instead of stdout ('-' for stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}
