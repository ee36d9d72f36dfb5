//! Constants used throughout the cookbook core crate.
//!
//! Collection and document names plus the field bounds enforced at the request boundary.

/// Collection name for recipe documents; also the directory name under the data dir.
pub const RECIPE_COLLECTION: &str = "recipe";

/// Filename of a recipe document within its sharded directory.
pub const RECIPE_DOCUMENT_NAME: &str = "recipe.yaml";

/// Default directory for the file document store when no explicit directory is configured.
pub const DEFAULT_RECIPE_DATA_DIR: &str = "recipe_data";

/// Maximum recipe name length, in characters.
pub const RECIPE_NAME_MAX_CHARS: usize = 255;

/// Maximum recipe description length, in characters.
pub const RECIPE_DESCRIPTION_MAX_CHARS: usize = 1020;

/// Maximum ingredient name length, in characters.
pub const INGREDIENT_NAME_MAX_CHARS: usize = 128;
