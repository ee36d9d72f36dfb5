//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Environment variables are read by the binary only; nothing in this crate consults the
//! process environment while handling requests.

use crate::constants::{DEFAULT_RECIPE_DATA_DIR, RECIPE_COLLECTION};
use crate::{RecipeError, RecipeResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which document store backend holds the recipes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// YAML documents in a sharded directory tree under the data dir.
    #[default]
    File,
    /// Process-local store; contents are lost on exit.
    Memory,
}

impl FromStr for StoreKind {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(StoreKind::File),
            "memory" => Ok(StoreKind::Memory),
            other => Err(RecipeError::InvalidInput(format!(
                "unknown store kind '{}' (expected 'file' or 'memory')",
                other
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    recipe_data_dir: PathBuf,
    store_kind: StoreKind,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::InvalidInput` if the file store is selected and `recipe_data_dir`
    /// is not an existing directory.
    pub fn new(recipe_data_dir: PathBuf, store_kind: StoreKind) -> RecipeResult<Self> {
        if store_kind == StoreKind::File && !recipe_data_dir.is_dir() {
            return Err(RecipeError::InvalidInput(format!(
                "recipe data directory does not exist: {}",
                recipe_data_dir.display()
            )));
        }

        Ok(Self {
            recipe_data_dir,
            store_kind,
        })
    }

    /// Configuration for a process-local store; never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            recipe_data_dir: PathBuf::from(DEFAULT_RECIPE_DATA_DIR),
            store_kind: StoreKind::Memory,
        }
    }

    pub fn recipe_data_dir(&self) -> &Path {
        &self.recipe_data_dir
    }

    pub fn collection_dir(&self) -> PathBuf {
        self.recipe_data_dir.join(RECIPE_COLLECTION)
    }

    pub fn store_kind(&self) -> StoreKind {
        self.store_kind
    }
}

/// Parse the store kind from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default (file) store.
pub fn store_kind_from_env_value(value: Option<String>) -> RecipeResult<StoreKind> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<StoreKind>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}
