//! # API Shared
//!
//! Wire-level definitions shared by the cookbook core and its HTTP surface.
//!
//! Contains:
//! - Recipe DTOs exchanged with clients (`dto` module)
//! - Shared services like `HealthService`
//!
//! `cookbook-core` maps its entities to and from these types; `api-rest` serialises them.

pub mod dto;
pub mod health;

pub use dto::{CreateOrUpdateRecipeDto, HealthRes, IngredientDto, RecipeDto};
pub use health::HealthService;
