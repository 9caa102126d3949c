//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env
//! vars into typed sections. Provides helpers to expand `~` and `${VAR}` and
//! to resolve relative paths against a known base directory.

use std::env;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingConfig {
    /// Model identifier, e.g. "aubmindlab/bert-base-arabertv2".
    pub model_name: String,
    #[serde(default = "default_device")]
    pub device: String,
    /// Overrides the local directory the model files are loaded from.
    #[serde(default)]
    pub model_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub index_path: String,
    pub metadata_path: String,
    /// Development mode: start with a fresh empty index when none exists on
    /// disk. A missing index file is otherwise a fatal startup error.
    #[serde(default)]
    pub create_if_missing: bool,
}

impl StorageConfig {
    pub fn index_path(&self) -> PathBuf {
        expand_path(&self.index_path)
    }

    pub fn metadata_path(&self) -> PathBuf {
        expand_path(&self.metadata_path)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: default_top_k(), score_threshold: default_score_threshold() }
    }
}

fn default_device() -> String {
    "cpu".to_string()
}

fn default_top_k() -> usize {
    3
}

fn default_score_threshold() -> f32 {
    0.5
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub embeddings: EmbeddingConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl AppConfig {
    /// Loads `config.toml`, then the `RUST_ENV`-specific overlay, then
    /// `APP_*` environment variables (nested keys split on `__`, e.g.
    /// `APP_STORAGE__INDEX_PATH`).
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        figment.extract().map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after
/// expansion. If `p` is absolute, it's returned as-is.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
