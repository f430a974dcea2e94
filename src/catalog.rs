// ABOUTME: Recipe catalog container and the JSON loading/validation seam
// ABOUTME: Structurally invalid recipes are rejected here, before the engine sees them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Recipe Catalog
//!
//! The catalog is the engine's only input collection: an ordered, immutable
//! set of recipes owned by the host. [`RecipeCatalog`] wraps the loader
//! boundary: construction validates every recipe's structural invariants
//! (non-empty name and ingredient list, positive quantities, positive
//! servings and calories) so the matcher and sampler can assume well-formed
//! data.
//!
//! Duplicate recipe names are tolerated with a warning; the sampler treats
//! them as one recipe when drawing a plan.

use crate::errors::CatalogError;
use crate::models::Recipe;
use std::collections::HashSet;
use tracing::warn;

/// A validated, ordered collection of recipes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from already-deserialized recipes, validating each.
    ///
    /// Catalog order is preserved: non-shuffled match results follow it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidRecipe`] for the first recipe that
    /// violates a structural invariant.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        for recipe in &recipes {
            validate_recipe(recipe)?;
        }

        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.name.as_str()) {
                warn!(name = %recipe.name, "catalog contains duplicate recipe name");
            }
        }

        Ok(Self { recipes })
    }

    /// Parse and validate a catalog from a JSON array of recipe objects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the JSON does not deserialize
    /// into recipe records, or [`CatalogError::InvalidRecipe`] when a record
    /// violates a structural invariant.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_str(json)?;
        Self::new(recipes)
    }

    /// Parse and validate a catalog from an in-memory JSON value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RecipeCatalog::from_json_str`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        let recipes: Vec<Recipe> = serde_json::from_value(value)?;
        Self::new(recipes)
    }

    /// The recipes, in catalog order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Iterate the recipes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The distinct cuisines present, sorted alphabetically.
    ///
    /// Hosts use this to populate a cuisine selector without hard-coding
    /// the list.
    #[must_use]
    pub fn cuisines(&self) -> Vec<&str> {
        let mut cuisines: Vec<&str> = self
            .recipes
            .iter()
            .map(|recipe| recipe.cuisine.as_str())
            .collect();
        cuisines.sort_unstable();
        cuisines.dedup();
        cuisines
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_recipe(recipe: &Recipe) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRecipe {
        name: recipe.name.clone(),
        reason,
    };

    if recipe.name.trim().is_empty() {
        return Err(invalid("recipe name is empty".to_owned()));
    }
    if recipe.ingredients.is_empty() {
        return Err(invalid("recipe has no ingredients".to_owned()));
    }
    for ingredient in &recipe.ingredients {
        if ingredient.name.trim().is_empty() {
            return Err(invalid("ingredient name is empty".to_owned()));
        }
        if !ingredient.quantity.is_finite() || ingredient.quantity <= 0.0 {
            return Err(invalid(format!(
                "ingredient '{}' has non-positive quantity",
                ingredient.name
            )));
        }
    }
    if recipe.servings == 0 {
        return Err(invalid("servings must be positive".to_owned()));
    }
    if recipe.calories_per_serving == 0 {
        return Err(invalid("calories_per_serving must be positive".to_owned()));
    }
    Ok(())
}
