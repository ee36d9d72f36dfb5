//! Recipe service.
//!
//! Orchestrates the mapper and the repository for each recipe operation. The only decision made
//! here is resolve-or-fail: operations that need an existing recipe look it up first and turn
//! absence into [`RecipeError::NotFound`].
//!
//! Request bodies are expected to have been validated with
//! [`validate_recipe`](crate::validation::validate_recipe) before they reach this service.

use crate::mapper;
use crate::models::RecipeEntity;
use crate::repositories::RecipeRepository;
use crate::{RecipeError, RecipeResult};
use api_shared::{CreateOrUpdateRecipeDto, RecipeDto};
use std::sync::Arc;

/// Pure recipe operations - no API concerns
#[derive(Clone)]
pub struct RecipesService {
    repository: Arc<dyn RecipeRepository>,
}

impl RecipesService {
    /// Creates a service over the given store.
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self { repository }
    }

    /// Lists every recipe in the store's default order.
    pub fn list_recipes(&self) -> RecipeResult<Vec<RecipeDto>> {
        Ok(mapper::to_recipe_dtos(self.repository.find_all()?))
    }

    /// Fetches one recipe.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has `recipe_id`.
    pub fn get_recipe(&self, recipe_id: &str) -> RecipeResult<RecipeDto> {
        Ok(mapper::to_recipe_dto(self.get_recipe_or_fail(recipe_id)?))
    }

    /// Stores a new recipe; the store assigns its id and creation time.
    pub fn create_recipe(&self, recipe: CreateOrUpdateRecipeDto) -> RecipeResult<RecipeDto> {
        let created = self.repository.insert(mapper::from_recipe_dto(recipe))?;
        tracing::info!("created recipe {}", created.id);
        Ok(mapper::to_recipe_dto(created))
    }

    /// Replaces the name, description and ingredients of an existing recipe.
    ///
    /// The id and creation time of the stored recipe are kept.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::NotFound` if no recipe has `recipe_id`.
    pub fn update_recipe(
        &self,
        recipe_id: &str,
        recipe: CreateOrUpdateRecipeDto,
    ) -> RecipeResult<RecipeDto> {
        let existing = self.get_recipe_or_fail(recipe_id)?;
        let updated = self
            .repository
            .save(mapper::update_from_dto(existing, recipe))?;
        tracing::info!("updated recipe {}", updated.id);
        Ok(mapper::to_recipe_dto(updated))
    }

    /// Deletes a recipe. Deleting an unknown id succeeds.
    pub fn delete_recipe(&self, recipe_id: &str) -> RecipeResult<()> {
        self.repository.delete_by_id(recipe_id)?;
        tracing::info!("deleted recipe {}", recipe_id);
        Ok(())
    }

    fn get_recipe_or_fail(&self, recipe_id: &str) -> RecipeResult<RecipeEntity> {
        self.repository
            .find_by_id(recipe_id)?
            .ok_or_else(|| RecipeError::NotFound(recipe_id.to_string()))
    }
}
