//! Property and fallback sources consulted by the resolver

use crate::domain::Configuration;
use figment::providers::{Format, Json, Toml, Yaml};
use figment::value::Value;
use figment::Figment;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base name of the fallback configuration file.
pub const FALLBACK_FILE_STEM: &str = "cloudinary_config";

/// Section that, when present at the top level, holds the configuration.
const CONFIG_SECTION: &str = "config";

/// A named-property store such as the process environment.
pub trait PropertySource: Send {
    fn property(&self, name: &str) -> Option<String>;
}

/// Reads properties from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProperties;

impl PropertySource for EnvProperties {
    fn property(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory property store.
#[derive(Debug, Clone, Default)]
pub struct MapProperties {
    values: BTreeMap<String, String>,
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl PropertySource for MapProperties {
    fn property(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error(
        "couldn't find configuration file 'cloudinary_config' (searched: {})",
        join_paths(.searched)
    )]
    NotFound { searched: Vec<PathBuf> },

    #[error("failed reading configuration file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

fn join_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// A configuration loaded from a fallback source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFallback {
    pub config: Configuration,
    pub path: PathBuf,
}

/// Supplies default settings when no connection-string is set.
///
/// Each call must hand back a fresh, independently owned configuration.
pub trait FallbackSource: Send {
    fn load(&self) -> Result<LoadedFallback, FallbackError>;
}

/// A fallback source that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl FallbackSource for NoFallback {
    fn load(&self) -> Result<LoadedFallback, FallbackError> {
        Err(FallbackError::NotFound { searched: Vec::new() })
    }
}

#[derive(Debug, Clone)]
enum FileLocation {
    Discover(PathBuf),
    Explicit(PathBuf),
}

/// Loads `cloudinary_config.{toml,yaml,yml,json}` from disk.
#[derive(Debug, Clone)]
pub struct FileFallback {
    location: FileLocation,
}

impl FileFallback {
    /// Discover the fallback file inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { location: FileLocation::Discover(dir.into()) }
    }

    /// Use exactly this file, whatever its name.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { location: FileLocation::Explicit(path.into()) }
    }

    fn candidates(dir: &Path) -> Vec<PathBuf> {
        ["toml", "yaml", "yml", "json"]
            .iter()
            .map(|ext| dir.join(format!("{FALLBACK_FILE_STEM}.{ext}")))
            .collect()
    }
}

impl Default for FileFallback {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FallbackSource for FileFallback {
    fn load(&self) -> Result<LoadedFallback, FallbackError> {
        let path = match &self.location {
            FileLocation::Explicit(path) => {
                if !path.is_file() {
                    return Err(FallbackError::NotFound { searched: vec![path.clone()] });
                }
                path.clone()
            }
            FileLocation::Discover(dir) => {
                let candidates = Self::candidates(dir);
                match candidates.iter().find(|p| p.is_file()) {
                    Some(found) => found.clone(),
                    None => return Err(FallbackError::NotFound { searched: candidates }),
                }
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|source| FallbackError::Read { path: path.clone(), source })?;
        let config = parse_fallback(&content, &path)?;
        Ok(LoadedFallback { config, path })
    }
}

/// Parse a fallback document, unwrapping a top-level `config` section if present.
fn parse_fallback(content: &str, path: &Path) -> Result<Configuration, FallbackError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = match ext.as_str() {
        "toml" => Figment::from(Toml::string(content)),
        "yaml" | "yml" => Figment::from(Yaml::string(content)),
        "json" => Figment::from(Json::string(content)),
        other => {
            return Err(FallbackError::Parse {
                path: path.to_path_buf(),
                message: format!("unsupported extension '.{other}'"),
            })
        }
    };

    let figment = if matches!(figment.find_value(CONFIG_SECTION), Ok(Value::Dict(..))) {
        figment.focus(CONFIG_SECTION)
    } else {
        figment
    };

    let mut config = figment
        .extract::<Configuration>()
        .map_err(|e| FallbackError::Parse { path: path.to_path_buf(), message: e.to_string() })?;
    config.stringify_known_keys();
    Ok(config)
}
