//! Canonical recipe identifier.

use crate::{UuidError, UuidResult};
use std::path::{Path, PathBuf};
use std::{fmt, str::FromStr};

use ::uuid::Uuid;

/// Canonical recipe identifier (32 lowercase hex characters, no hyphens).
///
/// Once constructed, the contained UUID is known to be valid, and its string form is always the
/// canonical one. Use [`RecipeId::new`] when the store allocates a document and
/// [`RecipeId::parse`] for identifiers arriving from outside (path segments, stored documents).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(Uuid);

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeId {
    /// Generates a fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and wraps an identifier that must already be canonical.
    ///
    /// Hyphenated or uppercase forms are rejected rather than normalised, so that one recipe
    /// can never be reachable under two different strings.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if !Self::is_canonical(input) {
            return Err(UuidError::InvalidInput(format!(
                "recipe id must be 32 lowercase hex characters without hyphens, got: '{}'",
                input
            )));
        }
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| UuidError::InvalidInput(e.to_string()))
    }

    /// Returns true if `input` is in canonical form.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Returns `parent_dir/<s1>/<s2>/<id>/`, where `s1` and `s2` are the first and second pairs
    /// of hex characters.
    pub fn sharded_dir(&self, parent_dir: &Path) -> PathBuf {
        let canonical = self.0.simple().to_string();
        let s1 = &canonical[0..2];
        let s2 = &canonical[2..4];
        parent_dir.join(s1).join(s2).join(&canonical)
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecipeId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeId::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RecipeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecipeId::parse(&s).map_err(serde::de::Error::custom)
    }
}
