//! # Cookbook Core
//!
//! Core business logic for the cookbook recipe service.
//!
//! This crate contains the recipe data model and everything between the wire DTOs and the
//! document store:
//! - Input validation producing per-field messages
//! - Entity/DTO mapping
//! - The [`RecipeRepository`] abstraction with file and in-memory backends
//! - [`RecipesService`], which resolves missing recipes into typed not-found errors
//!
//! **No API concerns**: HTTP routing, status codes and error envelopes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod mapper;
pub mod models;
pub mod recipes;
pub mod repositories;
pub mod validation;

pub use api_shared::{CreateOrUpdateRecipeDto, IngredientDto, RecipeDto};
pub use config::{store_kind_from_env_value, CoreConfig, StoreKind};
pub use constants::DEFAULT_RECIPE_DATA_DIR;
pub use cookbook_uuid::RecipeId;
pub use error::{ErrorCategory, FieldErrors, RecipeError, RecipeResult};
pub use models::{Ingredient, NewRecipe, RecipeEntity};
pub use recipes::RecipesService;
pub use repositories::{
    open_repository, FileRecipeRepository, InMemoryRecipeRepository, RecipeRepository,
};
pub use validation::validate_recipe;
