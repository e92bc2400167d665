//! Configuration for the gradplan CLI
//!
//! A small TOML file (`gradplan.toml` in the working directory) naming the
//! catalog data files and the saved-plan location. Every field has a
//! default, and a missing config file just means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::storage;

/// Catalog data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_courses_path")]
    pub courses: PathBuf,
    #[serde(default = "default_programs_path")]
    pub programs: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            courses: default_courses_path(),
            programs: default_programs_path(),
        }
    }
}

fn default_courses_path() -> PathBuf {
    PathBuf::from("courses.json")
}

fn default_programs_path() -> PathBuf {
    PathBuf::from("programs.json")
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Saved-plan file; platform data directory when absent
    #[serde(default)]
    pub storage: Option<PathBuf>,
}

impl Config {
    /// Load from a TOML file
    pub fn from_file(path: &Path) -> PlanResult<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PlanError::storage(format!("{}: {e}", path.display())))
    }

    /// Load `gradplan.toml` from the working directory, or defaults when it
    /// does not exist
    pub fn load_or_default() -> PlanResult<Self> {
        let path = Path::new("gradplan.toml");
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Effective saved-plan path
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .clone()
            .unwrap_or_else(storage::default_data_path)
    }
}
