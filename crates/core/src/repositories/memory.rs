//! Process-local recipe store.

use super::helpers::lookup_id;
use super::RecipeRepository;
use crate::models::{NewRecipe, RecipeEntity};
use crate::{RecipeError, RecipeResult};
use chrono::Utc;
use cookbook_uuid::RecipeId;
use std::sync::RwLock;

/// Keeps recipes in insertion order; `find_all` returns them in that order.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<Vec<RecipeEntity>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn find_all(&self) -> RecipeResult<Vec<RecipeEntity>> {
        let recipes = self.recipes.read().map_err(|_| RecipeError::StorePoisoned)?;
        Ok(recipes.clone())
    }

    fn find_by_id(&self, id: &str) -> RecipeResult<Option<RecipeEntity>> {
        let Some(id) = lookup_id(id) else {
            return Ok(None);
        };

        let recipes = self.recipes.read().map_err(|_| RecipeError::StorePoisoned)?;
        Ok(recipes.iter().find(|r| r.id == id).cloned())
    }

    fn insert(&self, recipe: NewRecipe) -> RecipeResult<RecipeEntity> {
        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| RecipeError::StorePoisoned)?;

        let mut id = RecipeId::new();
        while recipes.iter().any(|r| r.id == id) {
            id = RecipeId::new();
        }

        let recipe = recipe.into_entity(id, Utc::now());
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    fn save(&self, recipe: RecipeEntity) -> RecipeResult<RecipeEntity> {
        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| RecipeError::StorePoisoned)?;

        let slot = recipes
            .iter_mut()
            .find(|r| r.id == recipe.id)
            .ok_or_else(|| RecipeError::SaveTargetMissing(recipe.id.to_string()))?;
        *slot = recipe.clone();
        Ok(recipe)
    }

    fn delete_by_id(&self, id: &str) -> RecipeResult<()> {
        let Some(id) = lookup_id(id) else {
            return Ok(());
        };

        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| RecipeError::StorePoisoned)?;
        recipes.retain(|r| r.id != id);
        Ok(())
    }
}
