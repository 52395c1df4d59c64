//! Document loading and validation for the persisted store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::store::types::{Package, Settings, SourcePort};

/// Errors that can occur when reading the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read store document '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store document '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store validation failed: {message}")]
    Validation { message: String },

    #[error("Package '{id}' not found in the store")]
    PackageNotFound { id: String },
}

/// Read-only accessor for the persisted document store.
///
/// The store is a directory of JSON documents (`settings.json`,
/// `sourceports.json`, `packages.json`) maintained by the frontend;
/// this core only ever reads them.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`. No I/O happens until a document
    /// is read.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default store location: `<data dir>/doomdeck/store`.
    ///
    /// Falls back to the current directory if the platform data dir
    /// is unavailable.
    pub fn default_dir() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("doomdeck").join("store")
    }

    /// The store's root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.dir.join(format!("{name}.json"));
        let content = fs::read_to_string(&path).map_err(|e| StoreError::Read {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| StoreError::Parse { path, source: e })
    }

    /// Load and validate the `settings` document.
    pub fn settings(&self) -> Result<Settings, StoreError> {
        let settings: Settings = self.document("settings")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate the `sourceports` collection.
    pub fn sourceports(&self) -> Result<Vec<SourcePort>, StoreError> {
        let ports: Vec<SourcePort> = self.document("sourceports")?;
        for port in &ports {
            port.validate()?;
        }
        Ok(ports)
    }

    /// Load the `packages` collection.
    pub fn packages(&self) -> Result<Vec<Package>, StoreError> {
        self.document("packages")
    }

    /// Find a package by id, falling back to a name match.
    pub fn package(&self, id: &str) -> Result<Package, StoreError> {
        let packages = self.packages()?;
        packages
            .iter()
            .find(|p| p.id == id)
            .or_else(|| packages.iter().find(|p| p.name == id))
            .cloned()
            .ok_or_else(|| StoreError::PackageNotFound { id: id.to_string() })
    }
}

impl Settings {
    /// A usable settings document needs a save root.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.savepath.as_os_str().is_empty() {
            return Err(StoreError::Validation {
                message: "Settings savepath must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl SourcePort {
    /// Checks the invariants the frontend's source-port form enforces
    /// on save. Parameter tokens are only required to be well-formed
    /// when their owning flag is enabled.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name is required"));
        }
        if self.binary.as_os_str().is_empty() {
            return Err(self.invalid("binary is required"));
        }
        if self.has_config {
            if !self.param_config.starts_with('-') {
                return Err(self.invalid("paramConfig must start with -"));
            }
            if self.config_filename.trim().is_empty() {
                return Err(self.invalid("configFilename is required"));
            }
        }
        if self.has_savedir {
            if !self.param_save.starts_with('-') {
                return Err(self.invalid("paramSave must start with -"));
            }
            if !self.param_load.starts_with('-') {
                return Err(self.invalid("paramLoad must start with -"));
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> StoreError {
        StoreError::Validation {
            message: format!("Source port '{}': {}", self.id, reason),
        }
    }
}
