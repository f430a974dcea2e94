// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Recipe builders and a small multi-continent catalog in the production data shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(dead_code)] // each test binary exercises a subset of these helpers

use kitchen_planner::{Continent, Ingredient, Recipe, RecipeCatalog, RecipeKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for randomized engine paths.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn ingredient(name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        quantity,
        unit: unit.to_owned(),
    }
}

pub fn recipe(
    name: &str,
    cuisine: &str,
    continent: Continent,
    kind: RecipeKind,
    calories_per_serving: u32,
    ingredients: &[(&str, f64, &str)],
) -> Recipe {
    Recipe {
        name: name.to_owned(),
        cuisine: cuisine.to_owned(),
        continent,
        ingredients: ingredients
            .iter()
            .map(|&(name, quantity, unit)| ingredient(name, quantity, unit))
            .collect(),
        instructions: format!("Prepare {name} and serve."),
        kind,
        servings: 4,
        calories_per_serving,
    }
}

pub fn chicken_fried_rice() -> Recipe {
    recipe(
        "Chicken Fried Rice",
        "Chinese",
        Continent::Asia,
        RecipeKind::Meat,
        385,
        &[
            ("rice", 200.0, "g"),
            ("chicken breast", 300.0, "g"),
            ("eggs", 2.0, "pieces"),
            ("soy sauce", 30.0, "mL"),
            ("mixed vegetables", 150.0, "g"),
        ],
    )
}

pub fn pad_thai() -> Recipe {
    recipe(
        "Pad Thai",
        "Thai",
        Continent::Asia,
        RecipeKind::Seafood,
        425,
        &[
            ("rice noodles", 250.0, "g"),
            ("shrimp", 200.0, "g"),
            ("eggs", 2.0, "pieces"),
            ("bean sprouts", 100.0, "g"),
            ("lime", 2.0, "pieces"),
        ],
    )
}

pub fn margherita_pizza() -> Recipe {
    recipe(
        "Margherita Pizza",
        "Italian",
        Continent::Europe,
        RecipeKind::Vegetarian,
        285,
        &[
            ("pizza dough", 300.0, "g"),
            ("tomato sauce", 100.0, "mL"),
            ("mozzarella cheese", 200.0, "g"),
            ("fresh basil", 20.0, "g"),
            ("olive oil", 15.0, "mL"),
        ],
    )
}

/// A catalog spanning four continents and all four recipe kinds, shaped
/// after the production recipe database.
pub fn world_catalog() -> RecipeCatalog {
    RecipeCatalog::new(vec![
        chicken_fried_rice(),
        pad_thai(),
        recipe(
            "Vegetable Stir Fry",
            "Chinese",
            Continent::Asia,
            RecipeKind::Vegan,
            145,
            &[
                ("broccoli", 200.0, "g"),
                ("carrots", 150.0, "g"),
                ("bell peppers", 150.0, "g"),
                ("soy sauce", 25.0, "mL"),
                ("garlic", 3.0, "cloves"),
            ],
        ),
        recipe(
            "Tom Yum Soup",
            "Thai",
            Continent::Asia,
            RecipeKind::Seafood,
            165,
            &[
                ("shrimp", 250.0, "g"),
                ("mushrooms", 150.0, "g"),
                ("lemongrass", 2.0, "stalks"),
                ("lime leaves", 5.0, "leaves"),
                ("chili", 2.0, "pieces"),
            ],
        ),
        recipe(
            "Beef Teriyaki",
            "Japanese",
            Continent::Asia,
            RecipeKind::Meat,
            485,
            &[
                ("beef", 400.0, "g"),
                ("teriyaki sauce", 60.0, "mL"),
                ("rice", 200.0, "g"),
                ("mixed vegetables", 200.0, "g"),
                ("sesame seeds", 10.0, "g"),
            ],
        ),
        recipe(
            "Spaghetti Carbonara",
            "Italian",
            Continent::Europe,
            RecipeKind::Meat,
            525,
            &[
                ("spaghetti", 400.0, "g"),
                ("eggs", 4.0, "pieces"),
                ("bacon", 150.0, "g"),
                ("parmesan cheese", 80.0, "g"),
                ("black pepper", 2.0, "g"),
            ],
        ),
        margherita_pizza(),
        recipe(
            "Beef Bourguignon",
            "French",
            Continent::Europe,
            RecipeKind::Meat,
            465,
            &[
                ("beef chuck", 800.0, "g"),
                ("red wine", 500.0, "mL"),
                ("onions", 200.0, "g"),
                ("carrots", 200.0, "g"),
                ("mushrooms", 250.0, "g"),
            ],
        ),
        recipe(
            "Greek Salad",
            "Greek",
            Continent::Europe,
            RecipeKind::Vegetarian,
            195,
            &[
                ("tomatoes", 300.0, "g"),
                ("cucumber", 200.0, "g"),
                ("olives", 80.0, "g"),
                ("feta cheese", 150.0, "g"),
                ("olive oil", 30.0, "mL"),
            ],
        ),
        recipe(
            "Paella",
            "Spanish",
            Continent::Europe,
            RecipeKind::Seafood,
            445,
            &[
                ("rice", 300.0, "g"),
                ("mixed seafood", 400.0, "g"),
                ("saffron", 1.0, "g"),
                ("bell peppers", 150.0, "g"),
                ("peas", 100.0, "g"),
            ],
        ),
        recipe(
            "BBQ Ribs",
            "American",
            Continent::NorthAmerica,
            RecipeKind::Meat,
            625,
            &[
                ("pork ribs", 1200.0, "g"),
                ("bbq sauce", 150.0, "mL"),
                ("brown sugar", 50.0, "g"),
                ("paprika", 10.0, "g"),
                ("garlic powder", 5.0, "g"),
            ],
        ),
        recipe(
            "Fish Tacos",
            "Mexican",
            Continent::NorthAmerica,
            RecipeKind::Seafood,
            285,
            &[
                ("white fish fillets", 400.0, "g"),
                ("corn tortillas", 8.0, "pieces"),
                ("cabbage", 150.0, "g"),
                ("lime", 2.0, "pieces"),
                ("cilantro", 30.0, "g"),
            ],
        ),
        recipe(
            "Vegetarian Chili",
            "American",
            Continent::NorthAmerica,
            RecipeKind::Vegan,
            225,
            &[
                ("mixed beans", 400.0, "g"),
                ("diced tomatoes", 400.0, "g"),
                ("onions", 150.0, "g"),
                ("bell peppers", 150.0, "g"),
                ("chili spices", 15.0, "g"),
            ],
        ),
        recipe(
            "Caesar Salad",
            "American",
            Continent::NorthAmerica,
            RecipeKind::Vegetarian,
            185,
            &[
                ("romaine lettuce", 300.0, "g"),
                ("parmesan cheese", 50.0, "g"),
                ("croutons", 80.0, "g"),
                ("caesar dressing", 60.0, "mL"),
                ("anchovies", 30.0, "g"),
            ],
        ),
        recipe(
            "Tagine",
            "Moroccan",
            Continent::Africa,
            RecipeKind::Meat,
            485,
            &[
                ("lamb shoulder", 800.0, "g"),
                ("dried apricots", 150.0, "g"),
                ("onions", 200.0, "g"),
                ("cinnamon", 5.0, "g"),
                ("almonds", 80.0, "g"),
            ],
        ),
        recipe(
            "Couscous Salad",
            "Moroccan",
            Continent::Africa,
            RecipeKind::Vegan,
            225,
            &[
                ("couscous", 200.0, "g"),
                ("mixed vegetables", 300.0, "g"),
                ("fresh herbs", 50.0, "g"),
                ("lemon juice", 40.0, "mL"),
                ("olive oil", 30.0, "mL"),
            ],
        ),
    ])
    .unwrap()
}
