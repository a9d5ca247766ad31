//! Catalog configuration: the two data-file paths (TOML).
//!
//! The paths are explicit configuration handed to each repository at
//! construction, never process-wide constants, so tests can point them at
//! temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Catalog configuration (TOML).
///
/// This file is intended to be edited by humans. Missing fields default to
/// the standard `data/` layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON array of program records.
    pub programs_file: PathBuf,

    /// JSON array of course records.
    pub courses_file: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            programs_file: PathBuf::from("data/carreras.json"),
            courses_file: PathBuf::from("data/materias.json"),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<()> {
        if self.programs_file.as_os_str().is_empty() {
            return Err(anyhow!("programs_file must not be empty"));
        }
        if self.courses_file.as_os_str().is_empty() {
            return Err(anyhow!("courses_file must not be empty"));
        }
        if self.programs_file == self.courses_file {
            return Err(anyhow!("programs_file and courses_file must differ"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CatalogConfig::default()`.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    if !path.exists() {
        let cfg = CatalogConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CatalogConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
