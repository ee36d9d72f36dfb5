//! Recipe endpoints.
//!
//! Each handler binds its request, validates bodies before the service sees them, calls
//! [`RecipesService`](cookbook_core::RecipesService) and picks the success status. Failure
//! statuses are decided in [`crate::error`] only.

use crate::error::ApiError;
use crate::extract::{RecipeJson, RecipePath};
use crate::AppState;
use api_shared::{CreateOrUpdateRecipeDto, HealthRes, HealthService, RecipeDto};
use axum::{extract::State, http::StatusCode, response::Json};
use cookbook_core::validate_recipe;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for monitoring and load balancers.
#[axum::debug_handler]
pub(crate) async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = [RecipeDto]),
        (status = 500, description = "Internal server error", body = crate::error::ErrorEnvelope)
    )
)]
/// List all recipes
#[axum::debug_handler]
pub(crate) async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecipeDto>>, ApiError> {
    Ok(Json(state.recipes.list_recipes()?))
}

#[utoipa::path(
    get,
    path = "/recipes/{recipe_id}",
    params(
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 200, description = "Recipe", body = RecipeDto),
        (status = 404, description = "Recipe not found", body = crate::error::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::error::ErrorEnvelope)
    )
)]
/// Fetch one recipe
#[axum::debug_handler]
pub(crate) async fn get_recipe(
    State(state): State<AppState>,
    RecipePath(recipe_id): RecipePath<String>,
) -> Result<Json<RecipeDto>, ApiError> {
    Ok(Json(state.recipes.get_recipe(&recipe_id)?))
}

#[utoipa::path(
    post,
    path = "/recipes",
    request_body = CreateOrUpdateRecipeDto,
    responses(
        (status = 201, description = "Recipe created", body = RecipeDto),
        (status = 400, description = "Validation failed", body = crate::error::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::error::ErrorEnvelope)
    )
)]
/// Create a recipe
///
/// The store assigns `id` and `createdAt`; any values the client sends for them are ignored.
#[axum::debug_handler]
pub(crate) async fn create_recipe(
    State(state): State<AppState>,
    RecipeJson(req): RecipeJson<CreateOrUpdateRecipeDto>,
) -> Result<(StatusCode, Json<RecipeDto>), ApiError> {
    validate_recipe(&req).map_err(ApiError::Validation)?;
    let created = state.recipes.create_recipe(req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/recipes/{recipe_id}",
    params(
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    request_body = CreateOrUpdateRecipeDto,
    responses(
        (status = 200, description = "Recipe updated", body = RecipeDto),
        (status = 400, description = "Validation failed", body = crate::error::ErrorEnvelope),
        (status = 404, description = "Recipe not found", body = crate::error::ErrorEnvelope),
        (status = 500, description = "Internal server error", body = crate::error::ErrorEnvelope)
    )
)]
/// Replace a recipe's name, description and ingredients
#[axum::debug_handler]
pub(crate) async fn update_recipe(
    State(state): State<AppState>,
    RecipePath(recipe_id): RecipePath<String>,
    RecipeJson(req): RecipeJson<CreateOrUpdateRecipeDto>,
) -> Result<Json<RecipeDto>, ApiError> {
    validate_recipe(&req).map_err(ApiError::Validation)?;
    Ok(Json(state.recipes.update_recipe(&recipe_id, req)?))
}

#[utoipa::path(
    delete,
    path = "/recipes/{recipe_id}",
    params(
        ("recipe_id" = String, Path, description = "Recipe id")
    ),
    responses(
        (status = 204, description = "Recipe deleted, or it did not exist"),
        (status = 500, description = "Internal server error", body = crate::error::ErrorEnvelope)
    )
)]
/// Delete a recipe
#[axum::debug_handler]
pub(crate) async fn delete_recipe(
    State(state): State<AppState>,
    RecipePath(recipe_id): RecipePath<String>,
) -> Result<StatusCode, ApiError> {
    state.recipes.delete_recipe(&recipe_id)?;
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn unknown_route() -> ApiError {
    ApiError::NotFound("No resource exists at this path".into())
}
