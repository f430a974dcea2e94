// ABOUTME: Main library entry point for the Kitchen Planner recipe engine
// ABOUTME: Exposes ingredient matching, meal plan sampling, and shopping list aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

#![deny(unsafe_code)]

//! # Kitchen Planner Engine
//!
//! A pure, synchronous engine for turning a recipe catalog into cookable
//! suggestions: match recipes against the ingredients a user has on hand,
//! draw a randomized 7-day meal plan constrained by region and diet, and
//! aggregate the plan's ingredients into a categorized shopping list.
//!
//! The engine owns no I/O. A host application supplies the [`RecipeCatalog`]
//! (typically deserialized from JSON via [`RecipeCatalog::from_json_str`]),
//! renders the results, and decides how to present empty or recoverable
//! outcomes such as [`PlanError::InsufficientCatalog`].
//!
//! ## Components
//!
//! - [`IngredientMatcher`]: free-text ingredients + cuisine filter → up to
//!   three matching recipes.
//! - [`MealPlanSampler`]: continents + dietary preference → seven distinct
//!   recipes drawn uniformly without replacement.
//! - [`build_shopping_list`]: any recipe selection → quantities merged per
//!   ingredient and bucketed into fixed shopping categories.
//!
//! Randomized steps (surprise-mode shuffling, plan sampling) draw from a
//! caller-supplied [`rand::Rng`] so hosts can pass `rand::thread_rng()` while
//! tests substitute a seeded generator.
//!
//! ## Example
//!
//! ```
//! use kitchen_planner::{CuisineFilter, IngredientMatcher, MatchQuery, RecipeCatalog};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = RecipeCatalog::from_json_str(
//!     r#"[{
//!         "name": "Vegetable Stir Fry",
//!         "cuisine": "Chinese",
//!         "continent": "Asia",
//!         "ingredients": [
//!             { "name": "broccoli", "quantity": 200, "unit": "g" },
//!             { "name": "soy sauce", "quantity": 25, "unit": "mL" }
//!         ],
//!         "instructions": "Stir-fry the vegetables with garlic and soy sauce.",
//!         "type": "vegan",
//!         "servings": 4,
//!         "calories_per_serving": 145
//!     }]"#,
//! )?;
//!
//! let matcher = IngredientMatcher::new();
//! let query = MatchQuery {
//!     ingredients: "broccoli, carrots".to_owned(),
//!     cuisine: CuisineFilter::All,
//! };
//! let matches = matcher.find_matches(&catalog, &query, &mut rand::thread_rng());
//! assert_eq!(matches[0].name, "Vegetable Stir Fry");
//! # Ok(())
//! # }
//! ```

/// Recipe catalog container and the JSON loading/validation seam
pub mod catalog;
/// Fixed shopping-list category enumeration and keyword table
pub mod categories;
/// Engine configuration with documented defaults
pub mod config;
/// Error types for planning, catalog loading, and configuration
pub mod errors;
/// Ingredient matcher: recipes cookable from what the user has on hand
pub mod matcher;
/// Fuzzy text-matching primitives shared across the engine
pub mod matching;
/// Meal plan sampler: randomized weekly plans under region/diet constraints
pub mod meal_plan;
/// Core domain models: recipes, ingredients, queries
pub mod models;
/// Pantry staple exemption list for the ingredient matcher
pub mod pantry;
/// Shopping list aggregation and categorization
pub mod shopping_list;

pub use catalog::RecipeCatalog;
pub use categories::Category;
pub use config::{MatcherConfig, PlannerConfig};
pub use errors::{CatalogError, ConfigError, PlanError};
pub use matcher::IngredientMatcher;
pub use meal_plan::{MealPlan, MealPlanSampler};
pub use models::{
    Continent, CuisineFilter, DietaryPreference, Ingredient, MatchQuery, PlanQuery, Recipe,
    RecipeKind,
};
pub use shopping_list::{build_shopping_list, ShoppingItem, ShoppingList};
