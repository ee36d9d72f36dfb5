//! Recipe persistence.
//!
//! [`RecipeRepository`] is the capability set the service needs from a document store. Two
//! backends implement it: a YAML document tree on disk ([`FileRecipeRepository`]) and a
//! process-local store ([`InMemoryRecipeRepository`]).
//!
//! Repositories never decide what a failure means for a caller. Absence is reported as `None`
//! and everything else propagates as a [`RecipeError`](crate::RecipeError).

mod files;
mod helpers;
mod memory;

pub use files::FileRecipeRepository;
pub use memory::InMemoryRecipeRepository;

use crate::config::{CoreConfig, StoreKind};
use crate::models::{NewRecipe, RecipeEntity};
use crate::RecipeResult;
use std::sync::Arc;

/// CRUD access to recipe documents keyed by their opaque string id.
pub trait RecipeRepository: Send + Sync {
    /// Every stored recipe, in the store's default order.
    fn find_all(&self) -> RecipeResult<Vec<RecipeEntity>>;

    /// The recipe with `id`, or `None` if there is none.
    fn find_by_id(&self, id: &str) -> RecipeResult<Option<RecipeEntity>>;

    /// Stores a new recipe, assigning its id and creation time.
    fn insert(&self, recipe: NewRecipe) -> RecipeResult<RecipeEntity>;

    /// Overwrites the stored document with the same id.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::SaveTargetMissing` if no document has that id; `save` never
    /// creates documents.
    fn save(&self, recipe: RecipeEntity) -> RecipeResult<RecipeEntity>;

    /// Removes the recipe with `id`. Removing an absent recipe succeeds.
    fn delete_by_id(&self, id: &str) -> RecipeResult<()>;
}

/// Builds the backend selected by `cfg`.
pub fn open_repository(cfg: &CoreConfig) -> RecipeResult<Arc<dyn RecipeRepository>> {
    match cfg.store_kind() {
        StoreKind::File => {
            let repository = FileRecipeRepository::open(cfg.collection_dir())?;
            tracing::info!(
                "using file recipe store at {}",
                repository.collection_dir().display()
            );
            Ok(Arc::new(repository))
        }
        StoreKind::Memory => {
            tracing::info!("using in-memory recipe store");
            Ok(Arc::new(InMemoryRecipeRepository::new()))
        }
    }
}
