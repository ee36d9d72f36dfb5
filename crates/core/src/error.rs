use std::collections::BTreeMap;

/// Per-field validation messages, keyed by field path (for example `ingredients[0].name`).
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("Recipe with id {0} doesn't exist")]
    NotFound(String),
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("cannot save recipe {0}: no stored document has that id")]
    SaveTargetMissing(String),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to create recipe directory: {0}")]
    RecipeDirCreation(std::io::Error),
    #[error("failed to write recipe document: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to read recipe document: {0}")]
    FileRead(std::io::Error),
    #[error("failed to remove recipe document: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("invalid recipe id: {0}")]
    Uuid(#[from] cookbook_uuid::UuidError),
    #[error("recipe store lock poisoned")]
    StorePoisoned,
}

/// Coarse classification used by outer layers to pick a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Validation,
    Unclassified,
}

impl RecipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecipeError::NotFound(_) => ErrorCategory::NotFound,
            RecipeError::Validation(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Unclassified,
        }
    }
}

pub type RecipeResult<T> = std::result::Result<T, RecipeError>;
