//! Persisted recipe shapes.
//!
//! Ingredients have no identity of their own; they are embedded in their recipe's document and
//! keep their order.

use chrono::{DateTime, Utc};
use cookbook_uuid::RecipeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

/// A recipe as held by the document store.
///
/// `id` and `created_at` are assigned by the store on insert and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntity {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub created_at: DateTime<Utc>,
}

/// A recipe that has not been stored yet, so it has neither an id nor a creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl NewRecipe {
    /// Attaches store-assigned identity, producing the persisted form.
    pub fn into_entity(self, id: RecipeId, created_at: DateTime<Utc>) -> RecipeEntity {
        RecipeEntity {
            id,
            name: self.name,
            description: self.description,
            ingredients: self.ingredients,
            created_at,
        }
    }
}
