// ABOUTME: Pantry staple exemption list used by the ingredient matcher
// ABOUTME: Staples never count as missing ingredients when scoring a recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Pantry Staples
//!
//! Common seasonings, condiments, oils, and aromatics that a stocked kitchen
//! is assumed to have. When the matcher counts how many of a recipe's
//! ingredients the user is missing, anything that matches this list is
//! exempt. Nobody should lose a recipe suggestion over salt.
//!
//! The list is fixed configuration data compiled into the engine. It also
//! carries a few catalog-specific staple labels (`"berbere spice"`,
//! `"fresh herbs"`) so composite seasoning lines are exempted the same way
//! single spices are.

use crate::matching::loosely_matches;

/// The fixed staple exemption list.
///
/// Matched bidirectionally against lower-cased recipe ingredient names, so
/// `"extra virgin olive oil"` is exempt via `"olive oil"` and plain
/// `"oil"` alike.
pub static PANTRY_STAPLES: &[&str] = &[
    "salt",
    "pepper",
    "black pepper",
    "white pepper",
    "garlic",
    "onion",
    "ginger",
    "paprika",
    "cumin",
    "oregano",
    "thyme",
    "basil",
    "rosemary",
    "cinnamon",
    "cardamom",
    "turmeric",
    "coriander",
    "bay leaves",
    "chili powder",
    "curry powder",
    "soy sauce",
    "vinegar",
    "oil",
    "olive oil",
    "sesame oil",
    "butter",
    "flour",
    "sugar",
    "honey",
    "lemon",
    "lime",
    "vanilla",
    "baking powder",
    "baking soda",
    "garlic powder",
    "chili spices",
    "berbere spice",
    "fresh herbs",
    "herbs",
];

/// Whether an ingredient name counts as a pantry staple.
///
/// The name is lower-cased here; the staple list is already lower-case.
#[must_use]
pub fn is_pantry_staple(ingredient_name: &str) -> bool {
    let normalized = ingredient_name.to_lowercase();
    PANTRY_STAPLES
        .iter()
        .any(|staple| loosely_matches(&normalized, staple))
}
