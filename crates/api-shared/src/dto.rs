//! Recipe wire shapes.
//!
//! Input and output use distinct types: the input shape has no `id` or `createdAt` at all, so a
//! client can never supply them (unknown JSON fields are ignored on deserialisation).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// An ingredient as exchanged on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Request body for creating or updating a recipe.
///
/// Missing or `null` fields bind to their empty value so that the validator, not the JSON
/// binder, reports them against the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateOrUpdateRecipeDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<IngredientDto>,
}

/// A persisted recipe as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<IngredientDto>,
    pub created_at: DateTime<Utc>,
}

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
