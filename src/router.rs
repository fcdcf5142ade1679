#[cfg(feature = "completions")]
use clap::CommandFactory;

use crate::cli::Cli;
use crate::commands::{run_extract, run_merge, ExtractOptions, MergeOptions};
use crate::config::{load_config, render_config, ResolvedConfig};
use crate::error::{HarsnipError, Result};

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    let resolved = ResolvedConfig::from_config(&config);

    if cli.print_config {
        let rendered = render_config(&resolved)?;
        println!("{rendered}");
        return Ok(());
    }

    #[cfg(feature = "completions")]
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "harsnip", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(har) = cli.extract_har {
        let defaults = resolved.extract;
        let options = ExtractOptions {
            expr1: required_expr("--expr1", cli.expr1.or(defaults.expr1))?,
            expr2: required_expr("--expr2", cli.expr2.or(defaults.expr2))?,
            expr3: required_expr("--expr3", cli.expr3.or(defaults.expr3))?,
            filter: cli.filter.unwrap_or(defaults.filter),
            filter_apply_no: cli.filter_apply_no.unwrap_or(defaults.filter_apply_no),
            output: cli.output.or(defaults.output),
            pretty: !(cli.compact || defaults.compact),
        };
        return run_extract(&har, &options);
    }

    if let Some(files) = cli.partial_json_files {
        let defaults = resolved.merge;
        let options = MergeOptions {
            mode: cli.merge_mode.unwrap_or(defaults.mode),
            output: cli.output.or(defaults.output),
            pretty: !(cli.compact || defaults.compact),
        };
        return run_merge(files, &options);
    }

    Err(HarsnipError::InvalidArgs(
        "One of --extract-har or --partial-json-files is required".to_string(),
    ))
}

fn required_expr(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| {
        HarsnipError::InvalidArgs(format!(
            "{flag} is required with --extract-har (pass it or set it under [extract] in harsnip.toml)",
        ))
    })
}
