//! # API REST
//!
//! HTTP surface of the cookbook service.
//!
//! Handles:
//! - Recipe endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON binding, CORS, the error envelope)
//!
//! Business logic lives in `cookbook-core`; this crate only maps verbs and paths onto it.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod extract;
mod handlers;

use axum::{routing::get, Router};
use cookbook_core::{RecipeRepository, RecipesService};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::{ApiError, ErrorEnvelope};

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    recipes: RecipesService,
}

impl AppState {
    pub fn new(repository: Arc<dyn RecipeRepository>) -> Self {
        Self {
            recipes: RecipesService::new(repository),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_recipes,
        handlers::get_recipe,
        handlers::create_recipe,
        handlers::update_recipe,
        handlers::delete_recipe,
    ),
    components(schemas(
        api_shared::HealthRes,
        api_shared::RecipeDto,
        api_shared::CreateOrUpdateRecipeDto,
        api_shared::IngredientDto,
        ErrorEnvelope,
    ))
)]
pub struct ApiDoc;

/// Builds the complete HTTP application.
///
/// Routes:
/// - `GET /health`
/// - `GET /recipes`, `POST /recipes`
/// - `GET /recipes/:recipe_id`, `PUT /recipes/:recipe_id`, `DELETE /recipes/:recipe_id`
/// - `/swagger-ui` and `/api-docs/openapi.json`
///
/// Unknown paths answer 404 through the same error envelope as every other failure.
pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/recipes",
            get(handlers::list_recipes).post(handlers::create_recipe),
        )
        .route(
            "/recipes/:recipe_id",
            get(handlers::get_recipe)
                .put(handlers::update_recipe)
                .delete(handlers::delete_recipe),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::unknown_route);

    error::with_failure_handling(routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
