// ABOUTME: Meal plan sampler drawing a week of distinct recipes under region/diet constraints
// ABOUTME: Uniform sampling without replacement, distinct by recipe name, bounded by pool size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Meal Plan Sampler
//!
//! Filters the catalog by the selected continents and dietary preference,
//! then draws seven recipes uniformly at random without replacement,
//! distinct by name. Too small a pool is a recoverable condition
//! ([`PlanError::InsufficientCatalog`]) the host should answer with "select
//! more regions or relax the dietary filter", never a partial plan.
//!
//! The draw itself is day-agnostic; [`MealPlan::schedule`] pairs the drawn
//! order with Monday through Sunday for presentation.

use crate::catalog::RecipeCatalog;
use crate::config::PlannerConfig;
use crate::errors::PlanError;
use crate::models::{PlanQuery, Recipe};
use crate::shopping_list::{build_shopping_list, ShoppingList};
use chrono::Weekday;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::iter::successors;
use tracing::{debug, warn};

/// Draws randomized weekly meal plans from a recipe catalog.
#[derive(Debug, Clone, Default)]
pub struct MealPlanSampler {
    config: PlannerConfig,
}

impl MealPlanSampler {
    /// Create a sampler with the default configuration (7-day plans).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sampler with a custom configuration.
    #[must_use]
    pub const fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Draw a meal plan of distinct recipes matching the query.
    ///
    /// Each draw picks a uniformly random recipe from the remaining pool and
    /// removes it whether or not it is kept; a pick whose name was already
    /// chosen (possible only with duplicate catalog names) is discarded and
    /// the draw continues against the shrinking pool, so the loop is bounded
    /// by the pool size.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::EmptyContinentSelection`] when no continents are
    /// selected, and [`PlanError::InsufficientCatalog`] when the filtered
    /// pool cannot supply enough distinct recipe names.
    pub fn generate_plan<'a, R: Rng>(
        &self,
        catalog: &'a RecipeCatalog,
        query: &PlanQuery,
        rng: &mut R,
    ) -> Result<MealPlan<'a>, PlanError> {
        if query.continents.is_empty() {
            return Err(PlanError::EmptyContinentSelection);
        }

        let mut pool: Vec<&Recipe> = catalog
            .iter()
            .filter(|recipe| {
                query.continents.contains(&recipe.continent)
                    && query.dietary_preference.allows(recipe.kind)
            })
            .collect();
        debug!(
            pool = pool.len(),
            preference = ?query.dietary_preference,
            "meal plan pool filtered"
        );

        let required = self.config.plan_length;
        if pool.len() < required {
            return Err(PlanError::InsufficientCatalog {
                available: pool.len(),
                required,
            });
        }

        let mut chosen: Vec<&Recipe> = Vec::with_capacity(required);
        let mut used_names: HashSet<&str> = HashSet::with_capacity(required);
        while chosen.len() < required && !pool.is_empty() {
            let index = rng.gen_range(0..pool.len());
            let recipe = pool.swap_remove(index);
            if used_names.insert(recipe.name.as_str()) {
                chosen.push(recipe);
            }
        }

        if chosen.len() < required {
            // Duplicate names shrank the distinct pool below the plan length.
            warn!(
                distinct = chosen.len(),
                required, "catalog has too few distinct recipe names"
            );
            return Err(PlanError::InsufficientCatalog {
                available: chosen.len(),
                required,
            });
        }

        Ok(MealPlan { recipes: chosen })
    }
}

/// A drawn meal plan: recipes in draw order, one per day.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan<'a> {
    recipes: Vec<&'a Recipe>,
}

impl<'a> MealPlan<'a> {
    /// The planned recipes, in draw order (index 0 = Monday).
    #[must_use]
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    /// Number of planned recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the plan is empty (it never is for a default-length plan).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Pair each planned recipe with its weekday, Monday first.
    ///
    /// Plans longer than seven recipes wrap back to Monday.
    #[must_use]
    pub fn schedule(&self) -> impl Iterator<Item = (Weekday, &'a Recipe)> + '_ {
        successors(Some(Weekday::Mon), |day| Some(day.succ()))
            .zip(self.recipes.iter().copied())
    }

    /// Aggregate the whole plan's ingredients into a categorized shopping list.
    #[must_use]
    pub fn shopping_list(&self) -> ShoppingList {
        build_shopping_list(self.recipes.iter().copied())
    }
}
