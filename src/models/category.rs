//! Open-ended task categories: a validated tag plus a registry of known tags.

use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Categories every installation knows about.
pub const BUILTIN_CATEGORIES: [&str; 6] = ["feeding", "walk", "medication", "grooming", "vet", "play"];

/// A non-empty, trimmed, lowercase category tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(raw: &str) -> AppResult<Self> {
        let tag = raw.trim().to_lowercase();
        if tag.is_empty() {
            return Err(AppError::InvalidCategory(
                "category must not be empty".to_string(),
            ));
        }
        if tag.chars().any(|c| c.is_control()) {
            return Err(AppError::InvalidCategory(raw.to_string()));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_builtin(&self) -> bool {
        BUILTIN_CATEGORIES.contains(&self.0.as_str())
    }

    pub fn icon(&self) -> &'static str {
        match self.0.as_str() {
            "feeding" => "🍽️",
            "walk" => "🚶",
            "medication" => "💊",
            "grooming" => "🛁",
            "vet" => "🏥",
            "play" => "🎾",
            _ => "📋",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known categories: the built-in set plus user-defined additions.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    known: BTreeSet<Category>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        let known = BUILTIN_CATEGORIES
            .iter()
            .map(|c| Category(c.to_string()))
            .collect();
        Self { known }
    }
}

impl CategoryRegistry {
    /// Registry seeded with the built-ins and the given custom tags.
    pub fn with_custom<I, S>(custom: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reg = Self::default();
        for c in custom {
            reg.register(c.as_ref())?;
        }
        Ok(reg)
    }

    /// Add a tag. Returns `true` when it was not known yet.
    pub fn register(&mut self, raw: &str) -> AppResult<bool> {
        let cat = Category::new(raw)?;
        Ok(self.known.insert(cat))
    }

    pub fn contains(&self, cat: &Category) -> bool {
        self.known.contains(cat)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.known.iter()
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_normalized() {
        let c = Category::new("  Grooming ").unwrap();
        assert_eq!(c.as_str(), "grooming");
        assert!(c.is_builtin());
        assert_eq!(c.icon(), "🛁");
    }

    #[test]
    fn empty_category_is_rejected() {
        assert!(matches!(
            Category::new("   "),
            Err(AppError::InvalidCategory(_))
        ));
    }

    #[test]
    fn registry_accepts_custom_tags() {
        let mut reg = CategoryRegistry::default();
        assert_eq!(reg.len(), BUILTIN_CATEGORIES.len());

        assert!(reg.register("Training").unwrap());
        assert!(!reg.register("training").unwrap());
        assert!(!reg.register("walk").unwrap());

        let training = Category::new("training").unwrap();
        assert!(reg.contains(&training));
        assert!(!training.is_builtin());
        assert_eq!(training.icon(), "📋");
    }
}
