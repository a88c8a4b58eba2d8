//! Per-column generator overrides loaded from YAML.
//!
//! ```yaml
//! columns:
//!   status:
//!     type: one_of
//!     values: [active, disabled]
//!   score:
//!     type: int_range
//!     min: 0
//!     max: 100
//! ```

use crate::config::GeneratorConfig;
use crate::registry::GeneratorRegistry;
use loader_core::TableStructure;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading or applying overrides.
#[derive(Debug, thiserror::Error)]
pub enum OverrideError {
    /// Override file could not be read
    #[error("Failed to read generator overrides from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Override file is not valid YAML for this format
    #[error("Invalid generator overrides: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Override names a column the table does not have
    #[error("Column '{column}' not found in table '{table}'")]
    UnknownColumn { column: String, table: String },
}

/// Generator bindings that replace the defaults for named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOverrides {
    #[serde(default)]
    pub columns: BTreeMap<String, GeneratorConfig>,
}

impl GeneratorOverrides {
    /// Load overrides from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, OverrideError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| OverrideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse overrides from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, OverrideError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Bind every override into `registry`.
    ///
    /// All names are checked against `table` before anything is bound, so an
    /// unknown column leaves the registry untouched.
    pub fn apply(
        &self,
        registry: &mut GeneratorRegistry,
        table: &TableStructure,
    ) -> Result<(), OverrideError> {
        if let Some(column) = self.columns.keys().find(|c| table.column(c).is_none()) {
            return Err(OverrideError::UnknownColumn {
                column: column.clone(),
                table: table.name.clone(),
            });
        }

        for (column, config) in &self.columns {
            registry.set(column.clone(), config.clone());
        }
        Ok(())
    }
}
