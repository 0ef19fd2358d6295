use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::DEFAULT_INPUT;
use crate::error::{Error, Result};

/// Name of the project-level config file.
pub const CONFIG_FILE: &str = "negfilt.toml";

/// Resolved settings for a negfilt run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Sequence to filter.
    pub values: Vec<i64>,
    /// Directory the config files were looked up in.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values: DEFAULT_INPUT.to_vec(),
            root: PathBuf::from("."),
        }
    }
}

/// Config as stored in negfilt.toml or Cargo.toml metadata.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    values: Option<Vec<i64>>,
}

/// Cargo.toml metadata section.
#[derive(Debug, Deserialize)]
struct CargoMetadata {
    #[serde(default)]
    package: Option<CargoPackage>,
}

#[derive(Debug, Deserialize)]
struct CargoPackage {
    #[serde(default)]
    metadata: Option<CargoPackageMetadata>,
}

#[derive(Debug, Deserialize)]
struct CargoPackageMetadata {
    #[serde(default)]
    negfilt: Option<FileConfig>,
}

impl Config {
    /// Load config with the following precedence:
    /// 1. CLI overrides (applied by the caller after this method)
    /// 2. negfilt.toml in `root`
    /// 3. [package.metadata.negfilt] in Cargo.toml
    /// 4. Defaults
    ///
    /// A malformed negfilt.toml is an error. A Cargo.toml that cannot be
    /// read as metadata is skipped.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Config {
            root: root.to_path_buf(),
            ..Default::default()
        };

        let cargo_toml = root.join("Cargo.toml");
        if cargo_toml.exists() {
            match read_cargo_metadata(&cargo_toml) {
                Ok(Some(fc)) => {
                    tracing::debug!(path = %cargo_toml.display(), "using [package.metadata.negfilt]");
                    config.apply_file_config(fc);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("skipping Cargo.toml metadata: {e}"),
            }
        }

        let own_toml = root.join(CONFIG_FILE);
        if own_toml.exists() {
            let content = read(&own_toml)?;
            let fc = toml::from_str::<FileConfig>(&content).map_err(|e| Error::ConfigParse {
                path: own_toml.clone(),
                message: e.message().to_string(),
            })?;
            tracing::debug!(path = %own_toml.display(), "loaded config file");
            config.apply_file_config(fc);
        }

        Ok(config)
    }

    fn apply_file_config(&mut self, fc: FileConfig) {
        if let Some(v) = fc.values {
            self.values = v;
        }
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_cargo_metadata(path: &Path) -> Result<Option<FileConfig>> {
    let content = read(path)?;
    let cargo = toml::from_str::<CargoMetadata>(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;
    Ok(cargo
        .package
        .and_then(|pkg| pkg.metadata)
        .and_then(|meta| meta.negfilt))
}
