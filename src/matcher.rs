// ABOUTME: Ingredient matcher selecting recipes cookable from what the user has on hand
// ABOUTME: Loose substring matching with a pantry staple exemption and a missing-count tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Ingredient Matcher
//!
//! Given comma-separated free text ("chicken, rice, tomatoes") and a cuisine
//! filter, select up to three recipes the user could cook. A recipe
//! qualifies when at least one of its ingredients is supplied by the user
//! and at most [`MatcherConfig::missing_ingredient_tolerance`] of the rest
//! are neither supplied nor pantry staples.
//!
//! There is no relevance ranking: the candidate test is binary, and results
//! keep catalog order. Surprise mode instead shuffles the candidates
//! uniformly before truncating. An empty query returns an empty
//! result, never an error; "searched, found nothing" is the caller's state
//! to track.

use crate::catalog::RecipeCatalog;
use crate::config::MatcherConfig;
use crate::matching::{loosely_matches, tokenize_ingredients};
use crate::models::{CuisineFilter, MatchQuery, Recipe};
use crate::pantry::is_pantry_staple;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Matches recipes against the ingredients a user has on hand.
#[derive(Debug, Clone, Default)]
pub struct IngredientMatcher {
    config: MatcherConfig,
}

impl IngredientMatcher {
    /// Create a matcher with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with a custom configuration.
    #[must_use]
    pub const fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find up to `max_results` recipes cookable from the queried ingredients.
    ///
    /// Returns borrowed recipes in catalog order, or in uniformly shuffled
    /// order when the filter is [`CuisineFilter::Surprise`]. An empty or
    /// whitespace-only ingredient text yields an empty result. This
    /// operation never fails.
    #[must_use]
    pub fn find_matches<'a, R: Rng>(
        &self,
        catalog: &'a RecipeCatalog,
        query: &MatchQuery,
        rng: &mut R,
    ) -> Vec<&'a Recipe> {
        let tokens = tokenize_ingredients(&query.ingredients);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<&Recipe> = catalog
            .iter()
            .filter(|recipe| self.is_candidate(recipe, &tokens, &query.cuisine))
            .collect();
        debug!(
            candidates = candidates.len(),
            filter = %query.cuisine,
            "ingredient match candidates collected"
        );

        if query.cuisine == CuisineFilter::Surprise {
            candidates.shuffle(rng);
        }
        candidates.truncate(self.config.max_results);
        candidates
    }

    /// Binary candidate test: cuisine passes, at least one ingredient is
    /// supplied, and the missing count stays within tolerance.
    fn is_candidate(&self, recipe: &Recipe, tokens: &[String], filter: &CuisineFilter) -> bool {
        if !filter.admits(&recipe.cuisine) {
            return false;
        }

        let mut missing = 0usize;
        let mut has_supplied = false;
        for ingredient in &recipe.ingredients {
            let name = ingredient.name.to_lowercase();
            if tokens.iter().any(|token| loosely_matches(&name, token)) {
                has_supplied = true;
            } else if !is_pantry_staple(&name) {
                missing += 1;
            }
        }

        // A recipe made entirely of staples still needs one supplied
        // ingredient; staples are exempt from the missing count, nothing more.
        has_supplied && missing <= self.config.missing_ingredient_tolerance
    }
}
