//! Helpers shared by the recipe store backends.

use crate::constants::RECIPE_DOCUMENT_NAME;
use crate::models::RecipeEntity;
use crate::{RecipeError, RecipeResult};
use cookbook_uuid::RecipeId;
use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Creates a fresh sharded directory for a new recipe document.
///
/// Identifiers come from `id_source`. A candidate whose directory already exists is skipped,
/// up to 5 attempts.
///
/// # Errors
///
/// Returns `RecipeError::RecipeDirCreation` if directory creation fails or all 5 candidates
/// were taken.
pub(super) fn create_unique_recipe_dir(
    collection_dir: &Path,
    mut id_source: impl FnMut() -> RecipeId,
) -> RecipeResult<(RecipeId, PathBuf)> {
    for _attempt in 0..5 {
        let id = id_source();
        let candidate = id.sharded_dir(collection_dir);

        if candidate.exists() {
            continue;
        }

        if let Some(parent) = candidate.parent() {
            fs::create_dir_all(parent).map_err(RecipeError::RecipeDirCreation)?;
        }

        match fs::create_dir(&candidate) {
            Ok(()) => return Ok((id, candidate)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(RecipeError::RecipeDirCreation(e)),
        }
    }

    Err(RecipeError::RecipeDirCreation(io::Error::new(
        ErrorKind::AlreadyExists,
        "failed to allocate a unique recipe directory after 5 attempts",
    )))
}

pub(super) fn document_path(recipe_dir: &Path) -> PathBuf {
    recipe_dir.join(RECIPE_DOCUMENT_NAME)
}

/// Writes `recipe.yaml` into `recipe_dir` through a temp file renamed into place, so readers
/// see either the previous document or the new one.
pub(super) fn write_document(recipe_dir: &Path, recipe: &RecipeEntity) -> RecipeResult<()> {
    let yaml = serde_yaml::to_string(recipe).map_err(RecipeError::YamlSerialization)?;

    let mut temp = NamedTempFile::new_in(recipe_dir).map_err(RecipeError::FileWrite)?;
    temp.write_all(yaml.as_bytes()).map_err(RecipeError::FileWrite)?;
    temp.as_file().sync_all().map_err(RecipeError::FileWrite)?;
    temp.persist(document_path(recipe_dir)).map_err(|e| RecipeError::FileWrite(e.error))?;
    Ok(())
}

pub(super) fn read_document(path: &Path) -> RecipeResult<RecipeEntity> {
    let contents = fs::read_to_string(path).map_err(RecipeError::FileRead)?;
    serde_yaml::from_str(&contents).map_err(RecipeError::YamlDeserialization)
}

/// Parses a caller-supplied id for lookup. A non-canonical id cannot name a stored recipe, so
/// it maps to `None` instead of an error.
pub(super) fn lookup_id(id: &str) -> Option<RecipeId> {
    match RecipeId::parse(id) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::debug!("treating non-canonical recipe id as absent: {}", e);
            None
        }
    }
}
