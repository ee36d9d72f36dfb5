//! Conversions between stored recipes and their wire shapes.
//!
//! All functions are pure. Inputs are assumed to have passed validation already.

use crate::models::{Ingredient, NewRecipe, RecipeEntity};
use api_shared::{CreateOrUpdateRecipeDto, IngredientDto, RecipeDto};

/// Copies every field of a stored recipe, identity and creation time included.
pub fn to_recipe_dto(recipe: RecipeEntity) -> RecipeDto {
    RecipeDto {
        id: recipe.id.to_string(),
        name: recipe.name,
        description: recipe.description,
        ingredients: recipe.ingredients.into_iter().map(to_ingredient_dto).collect(),
        created_at: recipe.created_at,
    }
}

/// Order-preserving batch form of [`to_recipe_dto`].
pub fn to_recipe_dtos(recipes: Vec<RecipeEntity>) -> Vec<RecipeDto> {
    recipes.into_iter().map(to_recipe_dto).collect()
}

/// Builds an unsaved recipe. Identity and creation time are left to the store.
pub fn from_recipe_dto(dto: CreateOrUpdateRecipeDto) -> NewRecipe {
    NewRecipe {
        name: dto.name,
        description: dto.description,
        ingredients: from_ingredient_dtos(dto.ingredients),
    }
}

/// Overwrites the mutable fields of an existing recipe; `id` and `created_at` are untouched.
pub fn update_from_dto(mut recipe: RecipeEntity, dto: CreateOrUpdateRecipeDto) -> RecipeEntity {
    recipe.name = dto.name;
    recipe.description = dto.description;
    recipe.ingredients = from_ingredient_dtos(dto.ingredients);
    recipe
}

fn to_ingredient_dto(ingredient: Ingredient) -> IngredientDto {
    IngredientDto {
        name: ingredient.name,
    }
}

fn from_ingredient_dtos(ingredients: Vec<IngredientDto>) -> Vec<Ingredient> {
    ingredients
        .into_iter()
        .map(|i| Ingredient { name: i.name })
        .collect()
}
