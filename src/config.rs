use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::commands::{MergeMode, DEFAULT_FILTER, DEFAULT_FILTER_APPLY_NO};
use crate::error::{HarsnipError, Result};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: Option<ExtractConfig>,
    #[serde(default)]
    pub merge: Option<MergeConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExtractConfig {
    pub expr1: Option<String>,
    pub expr2: Option<String>,
    pub expr3: Option<String>,
    pub filter: Option<String>,
    pub filter_apply_no: Option<u8>,
    pub output: Option<PathBuf>,
    pub compact: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MergeConfig {
    pub mode: Option<MergeMode>,
    pub output: Option<PathBuf>,
    pub compact: Option<bool>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ResolvedConfig {
    pub extract: ResolvedExtractConfig,
    pub merge: ResolvedMergeConfig,
}

#[derive(Clone, Debug, Serialize)]
pub struct ResolvedExtractConfig {
    pub expr1: Option<String>,
    pub expr2: Option<String>,
    pub expr3: Option<String>,
    pub filter: String,
    pub filter_apply_no: u8,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ResolvedMergeConfig {
    pub mode: MergeMode,
    pub output: Option<PathBuf>,
    pub compact: bool,
}

impl Default for ResolvedExtractConfig {
    fn default() -> Self {
        Self {
            expr1: None,
            expr2: None,
            expr3: None,
            filter: DEFAULT_FILTER.to_string(),
            filter_apply_no: DEFAULT_FILTER_APPLY_NO,
            output: None,
            compact: false,
        }
    }
}

impl ResolvedConfig {
    pub fn from_config(config: &Config) -> Self {
        let mut resolved = Self::default();
        if let Some(cfg) = &config.extract {
            resolved.extract.apply(cfg);
        }
        if let Some(cfg) = &config.merge {
            resolved.merge.apply(cfg);
        }
        resolved
    }
}

impl ResolvedExtractConfig {
    fn apply(&mut self, cfg: &ExtractConfig) {
        if let Some(value) = cfg.expr1.clone() {
            self.expr1 = Some(value);
        }
        if let Some(value) = cfg.expr2.clone() {
            self.expr2 = Some(value);
        }
        if let Some(value) = cfg.expr3.clone() {
            self.expr3 = Some(value);
        }
        if let Some(value) = cfg.filter.clone() {
            self.filter = value;
        }
        if let Some(value) = cfg.filter_apply_no {
            self.filter_apply_no = value;
        }
        if let Some(value) = cfg.output.clone() {
            self.output = Some(value);
        }
        if let Some(value) = cfg.compact {
            self.compact = value;
        }
    }
}

impl ResolvedMergeConfig {
    fn apply(&mut self, cfg: &MergeConfig) {
        if let Some(value) = cfg.mode {
            self.mode = value;
        }
        if let Some(value) = cfg.output.clone() {
            self.output = Some(value);
        }
        if let Some(value) = cfg.compact {
            self.compact = value;
        }
    }
}

pub fn load_config() -> Result<Config> {
    let mut config = Config::default();
    for path in config_search_paths() {
        if !path.exists() {
            continue;
        }
        let contents = fs::read_to_string(&path)?;
        let parsed = parse_config(&contents).map_err(|err| {
            HarsnipError::InvalidArgs(format!(
                "Failed to parse config {}: {}",
                path.display(),
                err
            ))
        })?;
        tracing::debug!("loaded config {}", path.display());
        merge_config(&mut config, parsed);
    }
    Ok(config)
}

fn parse_config(contents: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn merge_config(base: &mut Config, other: Config) {
    merge_section(&mut base.extract, other.extract, ExtractConfig::merge);
    merge_section(&mut base.merge, other.merge, MergeConfig::merge);
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
    if let Some(other_section) = other {
        match base {
            Some(existing) => merge(existing, other_section),
            None => *base = Some(other_section),
        }
    }
}

impl ExtractConfig {
    fn merge(&mut self, other: ExtractConfig) {
        merge_opt(&mut self.expr1, other.expr1);
        merge_opt(&mut self.expr2, other.expr2);
        merge_opt(&mut self.expr3, other.expr3);
        merge_opt(&mut self.filter, other.filter);
        merge_opt(&mut self.filter_apply_no, other.filter_apply_no);
        merge_opt(&mut self.output, other.output);
        merge_opt(&mut self.compact, other.compact);
    }
}

impl MergeConfig {
    fn merge(&mut self, other: MergeConfig) {
        merge_opt(&mut self.mode, other.mode);
        merge_opt(&mut self.output, other.output);
        merge_opt(&mut self.compact, other.compact);
    }
}

fn merge_opt<T>(base: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *base = other;
    }
}

/// Candidate config files, lowest precedence first.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = home_dir() {
        paths.push(config_home_dir(&home).join("harsnip").join("harsnip.toml"));
        if let Some(appdata) = env::var_os("APPDATA") {
            paths.push(PathBuf::from(appdata).join("harsnip").join("harsnip.toml"));
        }
        paths.push(home.join(".harsniprc"));
    }

    if let Ok(cwd) = env::current_dir() {
        let mut dirs: Vec<&Path> = cwd.ancestors().collect();
        dirs.reverse();
        for dir in dirs {
            paths.push(dir.join(".harsniprc"));
            paths.push(dir.join("harsnip.toml"));
        }
    }

    paths
}

fn config_home_dir(home: &Path) -> PathBuf {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) => PathBuf::from(xdg),
        None => home.join(".config"),
    }
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
}

pub fn render_config(config: &ResolvedConfig) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|err| HarsnipError::InvalidArgs(format!("Failed to render config: {}", err)))
}
