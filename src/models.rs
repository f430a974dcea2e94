// ABOUTME: Core domain models for recipes, ingredients, and engine queries
// ABOUTME: Serde shapes match the catalog loader's wire format field for field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Domain Models
//!
//! Recipes and their ingredients are immutable, read-only inputs: the host's
//! catalog loader creates them, the engine only borrows them. Query types
//! ([`MatchQuery`], [`PlanQuery`]) carry the user's selections into the
//! matcher and sampler.
//!
//! Units are opaque strings, not normalized measures. `"g"` and `"mL"` and
//! `"cloves"` are just tokens, and two ingredients with the same name but
//! different units stay distinct throughout aggregation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// A single ingredient line within a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Free-form ingredient name; matched case-insensitively
    pub name: String,
    /// Amount in `unit`; positive
    pub quantity: f64,
    /// Opaque unit token, e.g. `"g"`, `"mL"`, `"pieces"`, `"cloves"`
    pub unit: String,
}

/// Continent a recipe's cuisine originates from.
///
/// A closed enumeration; the wire format uses the display names
/// (`"North America"`, not `north_america`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    /// Asian cuisines
    Asia,
    /// European cuisines
    Europe,
    /// African cuisines
    Africa,
    /// North American cuisines
    #[serde(rename = "North America")]
    NorthAmerica,
    /// South American cuisines
    #[serde(rename = "South America")]
    SouthAmerica,
    /// Oceanian cuisines
    Oceania,
    /// Caribbean cuisines
    Caribbean,
}

impl Continent {
    /// All continents, in the order the planner UI presents them.
    pub const ALL: [Self; 7] = [
        Self::Asia,
        Self::Europe,
        Self::Africa,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Oceania,
        Self::Caribbean,
    ];

    /// Display name, identical to the wire format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Africa => "Africa",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Oceania => "Oceania",
            Self::Caribbean => "Caribbean",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad classification of a recipe used for dietary filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    /// Contains meat or poultry
    Meat,
    /// Contains fish or shellfish but no meat
    Seafood,
    /// No meat or fish; may contain dairy or eggs
    Vegetarian,
    /// No animal products at all
    Vegan,
}

/// Dietary preference selected for a meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    /// Everything is on the table
    Omnivore,
    /// Seafood recipes only
    Pescatarian,
    /// Vegetarian and vegan recipes
    Vegetarian,
    /// Vegan recipes only
    Vegan,
}

impl DietaryPreference {
    /// Whether a recipe of the given kind satisfies this preference.
    ///
    /// Pescatarian deliberately admits only seafood recipes, not vegetarian
    /// ones: the plan is meant to feature fish, not merely avoid meat.
    #[must_use]
    pub const fn allows(self, kind: RecipeKind) -> bool {
        match self {
            Self::Omnivore => true,
            Self::Pescatarian => matches!(kind, RecipeKind::Seafood),
            Self::Vegetarian => matches!(kind, RecipeKind::Vegetarian | RecipeKind::Vegan),
            Self::Vegan => matches!(kind, RecipeKind::Vegan),
        }
    }
}

/// A complete recipe as supplied by the catalog loader.
///
/// `name` is the unique key within a catalog; the sampler treats two entries
/// with the same name as the same recipe. Recipes are never mutated by the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name; unique key within the catalog
    pub name: String,
    /// Cuisine label, e.g. `"Thai"`; compared case-sensitively by the matcher
    pub cuisine: String,
    /// Continent the cuisine belongs to
    pub continent: Continent,
    /// Ordered, non-empty ingredient list
    pub ingredients: Vec<Ingredient>,
    /// Free-text cooking instructions
    pub instructions: String,
    /// Dietary classification (`"type"` on the wire)
    #[serde(rename = "type")]
    pub kind: RecipeKind,
    /// Number of servings the recipe makes; positive
    pub servings: u8,
    /// Stored per-serving calorie value; echoed, never computed
    pub calories_per_serving: u32,
}

/// Cuisine filter for ingredient matching.
///
/// Serialized as the strings the search form submits: `"all"`,
/// `"surprise"`, or the cuisine name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuisineFilter {
    /// Every cuisine passes
    All,
    /// Every cuisine passes, and the results are shuffled
    Surprise,
    /// Only recipes whose cuisine equals this string exactly
    Cuisine(String),
}

impl CuisineFilter {
    /// The filter's wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Surprise => "surprise",
            Self::Cuisine(name) => name,
        }
    }

    /// Whether a recipe with the given cuisine passes this filter.
    ///
    /// Cuisine comparison is exact and case-sensitive: the filter values come
    /// from the catalog's own cuisine list, not from free text.
    #[must_use]
    pub fn admits(&self, cuisine: &str) -> bool {
        match self {
            Self::All | Self::Surprise => true,
            Self::Cuisine(wanted) => wanted == cuisine,
        }
    }
}

impl From<String> for CuisineFilter {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "all" => Self::All,
            "surprise" => Self::Surprise,
            _ => Self::Cuisine(raw),
        }
    }
}

impl From<&str> for CuisineFilter {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CuisineFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CuisineFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// A recipe search request from the ingredient matcher's form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    /// Comma-separated free text describing what the user has on hand
    pub ingredients: String,
    /// Cuisine restriction, if any
    pub cuisine: CuisineFilter,
}

impl MatchQuery {
    /// Convenience constructor.
    #[must_use]
    pub fn new(ingredients: impl Into<String>, cuisine: impl Into<CuisineFilter>) -> Self {
        Self {
            ingredients: ingredients.into(),
            cuisine: cuisine.into(),
        }
    }
}

/// A weekly meal plan request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuery {
    /// Continents the plan may draw recipes from; must be non-empty
    pub continents: HashSet<Continent>,
    /// Dietary preference every planned recipe must satisfy
    pub dietary_preference: DietaryPreference,
}

impl PlanQuery {
    /// Convenience constructor.
    #[must_use]
    pub fn new(
        continents: impl IntoIterator<Item = Continent>,
        dietary_preference: DietaryPreference,
    ) -> Self {
        Self {
            continents: continents.into_iter().collect(),
            dietary_preference,
        }
    }
}
