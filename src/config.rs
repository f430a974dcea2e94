// ABOUTME: Engine configuration with documented defaults and validation
// ABOUTME: Tolerances and limits live here as named fields, never as magic literals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Engine Configuration
//!
//! The matcher and sampler take their tunables from these structs rather
//! than hard-coded literals. Defaults carry the engine's documented
//! behavior; hosts that deserialize configuration from their own sources
//! should call `validate()` before handing it to the engine.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of missing ingredients a recipe may have and still match.
///
/// Earlier revisions of this feature used a stricter tolerance of 1; the
/// current behavior is the more permissive 2, and the test suite pins it.
pub const DEFAULT_MISSING_INGREDIENT_TOLERANCE: usize = 2;

/// Default cap on returned matches.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Default meal plan length: one recipe per day, Monday through Sunday.
pub const DEFAULT_PLAN_LENGTH: usize = 7;

/// Ingredient matcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// How many non-staple, non-supplied ingredients a recipe may have and
    /// still be considered cookable. Default: 2
    pub missing_ingredient_tolerance: usize,
    /// Maximum number of recipes a search returns. Default: 3
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            missing_ingredient_tolerance: DEFAULT_MISSING_INGREDIENT_TOLERANCE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl MatcherConfig {
    /// Validate the configuration.
    ///
    /// A tolerance of 0 is legal (strictest matching). A result cap of 0 is
    /// not: it would make every search trivially empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] if `max_results` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_results must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Meal plan sampler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Number of recipes a plan draws. Default: 7 (Monday through Sunday)
    pub plan_length: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            plan_length: DEFAULT_PLAN_LENGTH,
        }
    }
}

impl PlannerConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] if `plan_length` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plan_length == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan_length must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
