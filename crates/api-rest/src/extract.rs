//! Request extractors whose rejections go through [`ApiError`].

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct RecipeJson<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct RecipePath<T>(pub T);
