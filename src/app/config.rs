use crate::app::cli::Cli;
use crate::app::models::{
    PathPattern, RuntimeConfig, DEFAULT_COMMENT_SYMBOL, DEFAULT_OUTPUT_FILE,
};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_CANDIDATES: [&str; 3] = ["config.yaml", "config.yml", "config.toml"];
const HOME_CANDIDATES: [&str; 2] = ["config.yaml", "config.toml"];

/// The configuration document as written on disk.
#[derive(Deserialize, Debug, Default, PartialEq)]
struct ConfigFile {
    root_dir: Option<String>,
    comment_symbol: Option<String>,
    #[serde(default)]
    paths: Vec<String>,
    output_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Explicit `--config` first, then the working directory, then ~/.config/file_combiner.
fn locate_config(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }

    let mut searched = Vec::new();

    for name in CONFIG_CANDIDATES {
        searched.push(cwd.join(name));
    }
    if let Some(home) = home {
        let dir = home.join(".config").join("file_combiner");
        for name in HOME_CANDIDATES {
            searched.push(dir.join(name));
        }
    }

    match searched.iter().find(|p| p.is_file()) {
        Some(found) => Ok(found.clone()),
        None => {
            let listed: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
            bail!("No config file found (searched: {})", listed.join(", "))
        }
    }
}

fn parse_config(content: &str, format: ConfigFormat) -> Result<ConfigFile> {
    let parsed: ConfigFile = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content).context("Failed to parse YAML config")?,
        ConfigFormat::Toml => toml::from_str(content).context("Failed to parse TOML config")?,
    };
    Ok(parsed)
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read config at {:?}", path))?;

    parse_config(&content, ConfigFormat::from_path(path))
        .context(format!("Invalid config at {:?}", path))
}

/// Expands a leading `~` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(raw),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Applies CLI overrides, then falls back to defaults for absent or empty values.
fn build_runtime_config(file: ConfigFile, cli: &Cli) -> RuntimeConfig {
    let root_dir = non_empty(cli.root_dir.clone().or(file.root_dir))
        .map(|r| expand_home(&r))
        .unwrap_or_else(|| PathBuf::from("."));

    let comment_symbol = non_empty(cli.comment_symbol.clone().or(file.comment_symbol))
        .unwrap_or_else(|| DEFAULT_COMMENT_SYMBOL.to_string());

    let output_file = non_empty(cli.output.clone().or(file.output_file))
        .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

    RuntimeConfig {
        root_dir,
        comment_symbol,
        patterns: file.paths.iter().map(|p| PathPattern::parse(p)).collect(),
        output_file: PathBuf::from(output_file),
    }
}

pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<RuntimeConfig> {
    let home = dirs::home_dir();
    let path = locate_config(cli.config.as_deref(), cwd, home.as_deref())?;
    log::debug!("Using config {}", path.display());

    let file = load_config_file(&path)?;
    Ok(build_runtime_config(file, cli))
}
