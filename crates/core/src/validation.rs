//! Input validation utilities.
//!
//! Request bodies are checked here before any service call. Every violated constraint is
//! collected into a [`FieldErrors`] map rather than stopping at the first one, so a client sees
//! all problems with a submission at once.

use crate::constants::{
    INGREDIENT_NAME_MAX_CHARS, RECIPE_DESCRIPTION_MAX_CHARS, RECIPE_NAME_MAX_CHARS,
};
use crate::FieldErrors;
use api_shared::CreateOrUpdateRecipeDto;

/// Validates a create/update request body.
///
/// Lengths are counted in characters, not bytes.
///
/// # Errors
///
/// Returns the per-field violation messages if any constraint fails.
pub fn validate_recipe(dto: &CreateOrUpdateRecipeDto) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if dto.name.trim().is_empty() {
        errors.insert("name".into(), "Recipe name cannot be null or empty".into());
    } else if exceeds(&dto.name, RECIPE_NAME_MAX_CHARS) {
        errors.insert(
            "name".into(),
            format!(
                "Recipe name cannot be longer than {} characters",
                RECIPE_NAME_MAX_CHARS
            ),
        );
    }

    if let Some(description) = &dto.description {
        if exceeds(description, RECIPE_DESCRIPTION_MAX_CHARS) {
            errors.insert(
                "description".into(),
                format!(
                    "Recipe description cannot be longer than {} characters",
                    RECIPE_DESCRIPTION_MAX_CHARS
                ),
            );
        }
    }

    if dto.ingredients.is_empty() {
        errors.insert(
            "ingredients".into(),
            "Recipe ingredients cannot be empty".into(),
        );
    }

    for (index, ingredient) in dto.ingredients.iter().enumerate() {
        let field = format!("ingredients[{}].name", index);
        if ingredient.name.trim().is_empty() {
            errors.insert(field, "Ingredient name cannot be null or empty".into());
        } else if exceeds(&ingredient.name, INGREDIENT_NAME_MAX_CHARS) {
            errors.insert(
                field,
                format!(
                    "Ingredient name cannot be longer than {} characters",
                    INGREDIENT_NAME_MAX_CHARS
                ),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn exceeds(value: &str, max_chars: usize) -> bool {
    value.chars().count() > max_chars
}
