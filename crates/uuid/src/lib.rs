//! Recipe identifiers and sharded-path utilities.
//!
//! Recipes are addressed by an opaque string identifier which the document store assigns on
//! insert. The store generates identifiers in a *canonical* UUID representation:
//! **32 lowercase hexadecimal characters** (no hyphens).
//!
//! This crate provides:
//! - A wrapper type ([`RecipeId`]) that *guarantees* the canonical format once constructed.
//! - Sharding logic that derives a document's directory from its identifier.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! ## Sharded directory layout
//! For a canonical identifier `u`, the file store keeps the document under:
//! `collection_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! This keeps any single directory from growing without bound.

mod id;

pub use id::RecipeId;

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
