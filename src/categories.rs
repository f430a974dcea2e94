// ABOUTME: Fixed shopping-list category enumeration and its keyword table
// ABOUTME: First matching category in enumeration order wins; unmatched entries fall to Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Shopping Categories
//!
//! Shopping-list entries are grouped into nine fixed categories so a user
//! can walk the store aisle by aisle. Each category owns a static keyword
//! list; an entry lands in the **first** category (in enumeration order)
//! whose any keyword loosely matches the entry's lower-cased name. Entries
//! no category claims land in [`Category::Other`].
//!
//! The order matters and is part of the contract: `"lime"` matches the
//! `"lime juice"` keyword under Pantry Items before Fruits & Nuts ever gets
//! a look, and `"fresh basil"` is claimed by Herbs & Spices. The keyword
//! table is static configuration data, not derived from the catalog.

use crate::matching::loosely_matches;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A shopping-list category bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Meat, poultry, fish, and other protein sources
    Proteins,
    /// Rice, pasta, breads, doughs, and other starches
    #[serde(rename = "Grains & Starches")]
    GrainsAndStarches,
    /// Fresh and prepared vegetables
    Vegetables,
    /// Cheeses and other dairy
    #[serde(rename = "Dairy & Cheese")]
    DairyAndCheese,
    /// Sauces, dressings, stocks, and bottled condiments
    #[serde(rename = "Pantry Items")]
    PantryItems,
    /// Herbs, spices, and seasonings
    #[serde(rename = "Herbs & Spices")]
    HerbsAndSpices,
    /// Fruits and nuts
    #[serde(rename = "Fruits & Nuts")]
    FruitsAndNuts,
    /// Long-shelf-life staples: sweeteners, dry goods, canned beans
    #[serde(rename = "Pantry Staples")]
    PantryStaples,
    /// Everything no other category claims
    Other,
}

const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken",
    "beef",
    "pork",
    "fish",
    "shrimp",
    "seafood",
    "eggs",
    "lamb",
    "bacon",
    "steak",
    "ground beef",
    "white fish",
    "barramundi",
    "mixed seafood",
    "pisco",
    "anchovy",
];

const GRAIN_KEYWORDS: &[&str] = &[
    "rice",
    "pasta",
    "spaghetti",
    "noodles",
    "bread",
    "couscous",
    "pastry",
    "pizza dough",
    "tortillas",
    "injera bread",
    "corn tortillas",
    "pastry sheets",
];

const VEGETABLE_KEYWORDS: &[&str] = &[
    "onions",
    "garlic",
    "tomatoes",
    "peppers",
    "vegetables",
    "mushrooms",
    "carrots",
    "broccoli",
    "bell peppers",
    "bean sprouts",
    "cabbage",
    "lettuce",
    "cucumber",
    "mixed vegetables",
    "diced tomatoes",
    "red onions",
];

const DAIRY_KEYWORDS: &[&str] = &[
    "parmesan cheese",
    "mozzarella cheese",
    "feta cheese",
    "egg white",
];

const PANTRY_ITEM_KEYWORDS: &[&str] = &[
    "olive oil",
    "soy sauce",
    "vinegar",
    "teriyaki sauce",
    "bbq sauce",
    "tomato sauce",
    "caesar dressing",
    "red wine vinegar",
    "lime juice",
    "beef stock",
];

const HERB_KEYWORDS: &[&str] = &[
    "basil",
    "parsley",
    "oregano",
    "cilantro",
    "cinnamon",
    "paprika",
    "black pepper",
    "berbere spice",
    "herbs",
    "fresh basil",
    "fresh parsley",
    "fresh herbs",
    "garlic powder",
    "chili spices",
    "cumin",
    "sesame seeds",
    "saffron",
];

const FRUIT_KEYWORDS: &[&str] = &[
    "lime",
    "lemon",
    "banana",
    "mixed berries",
    "dried apricots",
    "almonds",
];

const STAPLE_KEYWORDS: &[&str] = &[
    "honey",
    "simple syrup",
    "granola",
    "croutons",
    "brown sugar",
    "bitters",
    "açaí puree",
    "mixed beans",
    "black beans",
    "maple syrup",
];

impl Category {
    /// All categories, in the fixed enumeration (and display) order.
    pub const ALL: [Self; 9] = [
        Self::Proteins,
        Self::GrainsAndStarches,
        Self::Vegetables,
        Self::DairyAndCheese,
        Self::PantryItems,
        Self::HerbsAndSpices,
        Self::FruitsAndNuts,
        Self::PantryStaples,
        Self::Other,
    ];

    /// Human-readable category name, identical to the wire format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Proteins => "Proteins",
            Self::GrainsAndStarches => "Grains & Starches",
            Self::Vegetables => "Vegetables",
            Self::DairyAndCheese => "Dairy & Cheese",
            Self::PantryItems => "Pantry Items",
            Self::HerbsAndSpices => "Herbs & Spices",
            Self::FruitsAndNuts => "Fruits & Nuts",
            Self::PantryStaples => "Pantry Staples",
            Self::Other => "Other",
        }
    }

    /// The static keyword list this category claims entries with.
    ///
    /// [`Category::Other`] has no keywords; it only receives fallthrough.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Proteins => PROTEIN_KEYWORDS,
            Self::GrainsAndStarches => GRAIN_KEYWORDS,
            Self::Vegetables => VEGETABLE_KEYWORDS,
            Self::DairyAndCheese => DAIRY_KEYWORDS,
            Self::PantryItems => PANTRY_ITEM_KEYWORDS,
            Self::HerbsAndSpices => HERB_KEYWORDS,
            Self::FruitsAndNuts => FRUIT_KEYWORDS,
            Self::PantryStaples => STAPLE_KEYWORDS,
            Self::Other => &[],
        }
    }

    /// Position of this category in the fixed enumeration order.
    #[must_use]
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Self::Proteins => 0,
            Self::GrainsAndStarches => 1,
            Self::Vegetables => 2,
            Self::DairyAndCheese => 3,
            Self::PantryItems => 4,
            Self::HerbsAndSpices => 5,
            Self::FruitsAndNuts => 6,
            Self::PantryStaples => 7,
            Self::Other => 8,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Assign an ingredient name to its shopping category.
///
/// The first category (in [`Category::ALL`] order) with a loosely matching
/// keyword wins; names nothing claims go to [`Category::Other`].
#[must_use]
pub fn categorize(ingredient_name: &str) -> Category {
    let normalized = ingredient_name.to_lowercase();
    for category in Category::ALL {
        if category
            .keywords()
            .iter()
            .any(|keyword| loosely_matches(&normalized, keyword))
        {
            return category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_category_wins() {
        // "fresh basil" also matches the Herbs & Spices keyword "basil", but
        // no earlier category claims it, so it lands in Herbs & Spices.
        assert_eq!(categorize("fresh basil"), Category::HerbsAndSpices);
        // "lime" is claimed by Pantry Items via "lime juice" before
        // Fruits & Nuts is consulted.
        assert_eq!(categorize("lime"), Category::PantryItems);
    }

    #[test]
    fn keywords_match_bidirectionally() {
        assert_eq!(categorize("chicken breast"), Category::Proteins);
        assert_eq!(categorize("rice noodles"), Category::GrainsAndStarches);
        assert_eq!(categorize("romaine lettuce"), Category::Vegetables);
    }

    #[test]
    fn unclaimed_names_fall_to_other() {
        assert_eq!(categorize("peas"), Category::Other);
        assert_eq!(categorize("chili"), Category::HerbsAndSpices);
        // Loose matching quirk, preserved: "lemongrass" contains "lemon".
        assert_eq!(categorize("lemongrass"), Category::FruitsAndNuts);
    }

    #[test]
    fn category_names_round_trip_through_serde() {
        let json = serde_json::to_string(&Category::GrainsAndStarches).unwrap();
        assert_eq!(json, "\"Grains & Starches\"");
        let parsed: Category = serde_json::from_str("\"Pantry Staples\"").unwrap();
        assert_eq!(parsed, Category::PantryStaples);
    }
}
