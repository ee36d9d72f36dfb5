//! File-backed recipe document store.
//!
//! ## Storage Layout
//!
//! Each recipe is one YAML document in a sharded directory under the collection dir:
//!
//! ```text
//! <recipe_data_dir>/
//!   recipe/
//!     <s1>/
//!       <s2>/
//!         <id>/
//!           recipe.yaml
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the id.
//!
//! There is no in-process locking. Concurrent writers to the same recipe race at the
//! filesystem, and the last `save` wins.

use super::helpers::{
    create_unique_recipe_dir, document_path, lookup_id, read_document, write_document,
};
use super::RecipeRepository;
use crate::models::{NewRecipe, RecipeEntity};
use crate::{RecipeError, RecipeResult};
use chrono::Utc;
use cookbook_uuid::RecipeId;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct FileRecipeRepository {
    collection_dir: PathBuf,
}

impl FileRecipeRepository {
    /// Opens the store rooted at `collection_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::StorageDirCreation` if the directory cannot be created.
    pub fn open(collection_dir: PathBuf) -> RecipeResult<Self> {
        fs::create_dir_all(&collection_dir).map_err(RecipeError::StorageDirCreation)?;
        Ok(Self { collection_dir })
    }

    pub fn collection_dir(&self) -> &Path {
        &self.collection_dir
    }
}

impl RecipeRepository for FileRecipeRepository {
    /// Walks the shard tree and reads every `recipe.yaml`.
    ///
    /// Shards and documents that cannot be read or parsed are logged as warnings and skipped.
    /// A missing collection dir is an empty store; any other failure to read it is an error.
    /// Results are ordered by creation time, then id.
    fn find_all(&self) -> RecipeResult<Vec<RecipeEntity>> {
        let mut recipes = Vec::new();

        let s1_iter = match fs::read_dir(&self.collection_dir) {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(recipes),
            Err(e) => return Err(RecipeError::FileRead(e)),
        };
        for s1 in s1_iter.flatten() {
            let s1_path = s1.path();
            if !s1_path.is_dir() {
                continue;
            }

            let s2_iter = match fs::read_dir(&s1_path) {
                Ok(it) => it,
                Err(e) => {
                    tracing::warn!("skipping unreadable shard: {} - {}", s1_path.display(), e);
                    continue;
                }
            };

            for s2 in s2_iter.flatten() {
                let s2_path = s2.path();
                if !s2_path.is_dir() {
                    continue;
                }

                let id_iter = match fs::read_dir(&s2_path) {
                    Ok(it) => it,
                    Err(e) => {
                        tracing::warn!(
                            "skipping unreadable shard: {} - {}",
                            s2_path.display(),
                            e
                        );
                        continue;
                    }
                };

                for id_ent in id_iter.flatten() {
                    let recipe_path = document_path(&id_ent.path());
                    if !recipe_path.is_file() {
                        continue;
                    }

                    match read_document(&recipe_path) {
                        Ok(recipe) => recipes.push(recipe),
                        Err(e) => {
                            tracing::warn!(
                                "skipping unreadable recipe document: {} - {}",
                                recipe_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        recipes.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(recipes)
    }

    fn find_by_id(&self, id: &str) -> RecipeResult<Option<RecipeEntity>> {
        let Some(id) = lookup_id(id) else {
            return Ok(None);
        };

        let recipe_path = document_path(&id.sharded_dir(&self.collection_dir));
        if !recipe_path.is_file() {
            return Ok(None);
        }

        read_document(&recipe_path).map(Some)
    }

    /// Allocates a directory, then writes the document. If the write fails the directory is
    /// removed again so no empty shard is left behind.
    fn insert(&self, recipe: NewRecipe) -> RecipeResult<RecipeEntity> {
        let (id, recipe_dir) = create_unique_recipe_dir(&self.collection_dir, RecipeId::new)?;
        let recipe = recipe.into_entity(id, Utc::now());

        if let Err(e) = write_document(&recipe_dir, &recipe) {
            if let Err(cleanup_error) = fs::remove_dir_all(&recipe_dir) {
                tracing::warn!(
                    "failed to clean up recipe directory {}: {}",
                    recipe_dir.display(),
                    cleanup_error
                );
            }
            return Err(e);
        }

        Ok(recipe)
    }

    fn save(&self, recipe: RecipeEntity) -> RecipeResult<RecipeEntity> {
        let recipe_dir = recipe.id.sharded_dir(&self.collection_dir);
        if !document_path(&recipe_dir).is_file() {
            return Err(RecipeError::SaveTargetMissing(recipe.id.to_string()));
        }

        write_document(&recipe_dir, &recipe)?;
        Ok(recipe)
    }

    fn delete_by_id(&self, id: &str) -> RecipeResult<()> {
        let Some(id) = lookup_id(id) else {
            return Ok(());
        };

        match fs::remove_dir_all(id.sharded_dir(&self.collection_dir)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RecipeError::FileRemove(e)),
        }
    }
}
