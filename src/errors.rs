// ABOUTME: Error types for meal planning, catalog loading, and configuration
// ABOUTME: Recoverable conditions carry the context callers need for user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Error Types
//!
//! The engine's failure surface is deliberately narrow. Matching never
//! fails: an empty query or an empty result set is a normal outcome, not an
//! error. Planning can fail in two recoverable ways ([`PlanError`]), both of
//! which a host should surface as actionable guidance rather than a crash.
//! Catalog loading rejects structurally invalid recipes ([`CatalogError`])
//! before the engine ever sees them.

use thiserror::Error;

/// Errors raised while generating a weekly meal plan.
///
/// Both variants are expected, recoverable conditions: the caller should
/// prompt the user to widen their selection, and must not apply a partial
/// plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// No continents were selected; checked before any filtering happens.
    #[error("no continents selected for the meal plan")]
    EmptyContinentSelection,

    /// The filtered recipe pool is too small to fill the plan.
    #[error("only {available} recipes match the selected filters, {required} are needed")]
    InsufficientCatalog {
        /// Recipes (distinct by name) available after filtering
        available: usize,
        /// Plan length that could not be satisfied
        required: usize,
    },
}

/// Errors raised while loading or validating a recipe catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be deserialized into recipe records.
    #[error("failed to parse recipe catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A recipe deserialized cleanly but violates a structural invariant.
    #[error("invalid recipe '{name}': {reason}")]
    InvalidRecipe {
        /// Name of the offending recipe (may be empty when the name itself is invalid)
        name: String,
        /// Human-readable description of the violated invariant
        reason: String,
    },
}

/// Errors raised when validating engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configured value is outside its acceptable range.
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
}
