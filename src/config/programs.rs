use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use super::context::ContextConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid manifest: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Duplicate program name: {0}")]
    DuplicateProgram(String),
}

/// One program to build: a vertex and a fragment stage plus an optional
/// geometry stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub name: String,
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<PathBuf>,
}

/// A `shaders.toml` file: context settings and the programs to build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default, rename = "program")]
    pub programs: Vec<ProgramEntry>,
}

impl Manifest {
    /// Reads a manifest and resolves its shader paths against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest: Manifest = text.parse()?;
        if let Some(base) = path.parent() {
            manifest.resolve_paths(base);
        }
        Ok(manifest)
    }

    /// Prefixes every relative shader path with `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        for entry in &mut self.programs {
            resolve(&mut entry.vertex);
            resolve(&mut entry.fragment);
            if let Some(geometry) = entry.geometry.as_mut() {
                resolve(geometry);
            }
        }
    }

    fn check_unique_names(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.programs.iter().enumerate() {
            if self.programs[..i].iter().any(|p| p.name == entry.name) {
                return Err(ConfigError::DuplicateProgram(entry.name.clone()));
            }
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let manifest: Manifest = toml::from_str(s)?;
        manifest.check_unique_names()?;
        Ok(manifest)
    }
}
