use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::args::{OutputFormat, DEFAULT_ADDR};
use crate::cli::{InteractiveArgs, SearchArgs, ServeArgs};

/// Top-level representation of `.tocsearch/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub dataset: Option<DatasetSection>,

    #[serde(default)]
    pub search: Option<SearchSection>,

    #[serde(default)]
    pub serve: Option<ServeSection>,

    #[serde(default)]
    pub http: Option<HttpSection>,

    /// Directory containing `.tocsearch/`; relative dataset paths are
    /// resolved against it.
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
pub struct DatasetSection {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub no_server: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServeSection {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HttpSection {
    #[serde(default)]
    pub server_url: Option<String>,
}

impl CliConfig {
    /// Configured dataset path, resolved against the project root.
    pub fn dataset_path(&self) -> Option<PathBuf> {
        let path = self.dataset.as_ref()?.path.as_ref()?;
        if path.is_absolute() {
            Some(path.clone())
        } else {
            Some(self.root.join(path))
        }
    }
}

/// Discover and load a project-local `.tocsearch/config.toml` (or
/// `.tocsearch/tocsearch.toml`) starting from the current working
/// directory and walking up parent directories.
pub fn load_cli_config() -> Result<Option<CliConfig>> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config_path = find_project_config(&cwd);

    let Some(path) = config_path else {
        return Ok(None);
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let mut config: CliConfig = toml::from_str(&contents)
        .with_context(|| format!("failed to parse TOML config at {}", path.display()))?;

    // <root>/.tocsearch/config.toml
    config.root = path
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(cwd);

    tracing::debug!(path = %path.display(), "loaded project config");
    Ok(Some(config))
}

fn find_project_config(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);

    while let Some(current) = dir {
        let config_dir = current.join(".tocsearch");
        let config_toml = config_dir.join("config.toml");
        if config_toml.is_file() {
            return Some(config_toml);
        }

        let named_toml = config_dir.join("tocsearch.toml");
        if named_toml.is_file() {
            return Some(named_toml);
        }

        dir = current.parent();
    }

    None
}

pub fn apply_search_config_defaults(config: &CliConfig, args: &mut SearchArgs) {
    if args.dataset.is_none() {
        args.dataset = config.dataset_path();
    }

    if let Some(search) = &config.search {
        if matches!(args.format, OutputFormat::Text) {
            if let Some(format) = search.format {
                args.format = format;
            }
        }

        if args.server.is_none() {
            if let Some(server) = &search.server {
                args.server = Some(server.clone());
            } else if let Some(http) = &config.http {
                if let Some(url) = &http.server_url {
                    args.server = Some(url.clone());
                }
            }
        }

        if !args.no_server {
            if let Some(true) = search.no_server {
                args.no_server = true;
            }
        }
    } else if args.server.is_none() {
        // If there is no per-search section, fall back to a global
        // HTTP server URL when present.
        if let Some(http) = &config.http {
            if let Some(url) = &http.server_url {
                args.server = Some(url.clone());
            }
        }
    }
}

pub fn apply_interactive_config_defaults(config: &CliConfig, args: &mut InteractiveArgs) {
    if args.dataset.is_none() {
        args.dataset = config.dataset_path();
    }
}

pub fn apply_serve_config_defaults(config: &CliConfig, args: &mut ServeArgs) {
    if args.dataset.is_none() {
        args.dataset = config.dataset_path();
    }

    if let Some(serve) = &config.serve {
        if args.addr == DEFAULT_ADDR {
            if let Some(addr) = &serve.addr {
                args.addr = addr.clone();
            }
        }

        if args.title.is_none() {
            args.title = serve.title.clone();
        }
    }
}
