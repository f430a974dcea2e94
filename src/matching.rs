// ABOUTME: Fuzzy text-matching primitives shared by the matcher, pantry list, and categories
// ABOUTME: Bidirectional substring matching is the engine's single, deliberately loose heuristic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Text Matching Primitives
//!
//! Everywhere the engine compares ingredient text (user tokens against
//! recipe ingredients, ingredients against the pantry staple list, entry
//! names against category keywords) it uses the same loose rule:
//! a bidirectional substring test over lower-cased strings.
//!
//! The looseness is part of the observable contract. `"chicken"` matches
//! `"chicken breast"` and vice versa, and `"egg"` matches `"eggplant"`.
//! This is intentionally not tokenized or stemmed matching; callers that
//! want stricter behavior supply more specific text.

/// Bidirectional substring match.
///
/// Returns `true` when either string contains the other. Callers are
/// expected to pass already lower-cased input; this function does no
/// normalization of its own.
#[must_use]
pub fn loosely_matches(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Split comma-separated free text into lower-cased, trimmed tokens.
///
/// Empty tokens (from stray commas or an all-whitespace input) are dropped,
/// so an effectively empty query yields an empty token list.
#[must_use]
pub fn tokenize_ingredients(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
