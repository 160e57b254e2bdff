use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::digest::{DigestEngine, DEFAULT_BUFFER_BYTES};

/// Configuration loaded from `~/.config/sha512sum/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sha512sumConfig {
    /// Read chunk size in bytes for streaming digests.
    pub buffer_bytes: usize,
}

impl Default for Sha512sumConfig {
    fn default() -> Self {
        Self {
            buffer_bytes: DEFAULT_BUFFER_BYTES,
        }
    }
}

impl Sha512sumConfig {
    pub fn validate(&self) -> Result<()> {
        if self.buffer_bytes == 0 {
            bail!("buffer_bytes must be greater than zero");
        }
        Ok(())
    }

    pub fn digest_engine(&self) -> DigestEngine {
        DigestEngine::new(self.buffer_bytes)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sha512sum")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk. A missing file yields the defaults; nothing
/// is written.
pub fn load() -> Result<Sha512sumConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(Sha512sumConfig::default());
    }
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<Sha512sumConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: Sha512sumConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
