// ABOUTME: Shopping list aggregation merging ingredient quantities across recipes
// ABOUTME: Same name + same unit sums; unit conflicts stay as separate lines, never converted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Kitchen Planner Contributors

//! # Shopping List Aggregator
//!
//! Walks a recipe selection in recipe-then-ingredient order and merges
//! quantities per lower-cased ingredient name. Units are opaque: when the
//! same name reappears with a different unit, the occurrence becomes its own
//! line under an internal `"<name>_<unit>"` key rather than being converted:
//! 200 g of rice and 1 cup of rice are two shopping lines, always.
//!
//! Merged entries are then bucketed into the fixed [`Category`] order.
//! Every category is present in the result, empty ones included; omitting
//! empty buckets from display is the caller's choice, not the aggregator's.

use crate::categories::{categorize, Category};
use crate::models::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One aggregated shopping-list line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Ingredient name, with the casing of its first occurrence
    pub name: String,
    /// Summed quantity across all same-name, same-unit occurrences
    pub quantity: f64,
    /// Opaque unit token shared by every occurrence summed into this line
    pub unit: String,
}

/// A categorized shopping list.
///
/// Buckets appear in the fixed [`Category::ALL`] order; items within a
/// bucket keep the order in which their names were first encountered across
/// the input recipes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingList {
    buckets: Vec<CategoryBucket>,
}

/// One category's slice of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    /// The category these items belong to
    pub category: Category,
    /// Aggregated items, in first-encountered order
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// All buckets in fixed category order, empty ones included.
    #[must_use]
    pub fn buckets(&self) -> &[CategoryBucket] {
        &self.buckets
    }

    /// The items bucketed under one category.
    #[must_use]
    pub fn items_in(&self, category: Category) -> &[ShoppingItem] {
        self.buckets
            .iter()
            .find(|bucket| bucket.category == category)
            .map_or(&[], |bucket| bucket.items.as_slice())
    }

    /// Total number of shopping lines across all categories.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.items.len()).sum()
    }

    /// Whether the list holds no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }
}

/// Aggregate a recipe selection into a categorized shopping list.
///
/// Pure function of the input sequence: recipe order only affects the
/// first-encountered ordering of lines, never the summed quantities.
#[must_use]
pub fn build_shopping_list<'a, I>(recipes: I) -> ShoppingList
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let mut entries: Vec<ShoppingItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let base_key = ingredient.name.to_lowercase();
            match index.get(&base_key).copied() {
                None => {
                    index.insert(base_key, entries.len());
                    entries.push(ShoppingItem {
                        name: ingredient.name.clone(),
                        quantity: ingredient.quantity,
                        unit: ingredient.unit.clone(),
                    });
                }
                Some(at) if entries[at].unit == ingredient.unit => {
                    entries[at].quantity += ingredient.quantity;
                }
                Some(_) => {
                    // Unit conflict: this occurrence lives under a composite
                    // key so later same-unit occurrences still merge into it.
                    let composite_key = format!("{base_key}_{}", ingredient.unit);
                    if let Some(at) = index.get(&composite_key).copied() {
                        entries[at].quantity += ingredient.quantity;
                    } else {
                        index.insert(composite_key, entries.len());
                        entries.push(ShoppingItem {
                            name: ingredient.name.clone(),
                            quantity: ingredient.quantity,
                            unit: ingredient.unit.clone(),
                        });
                    }
                }
            }
        }
    }

    let mut buckets: Vec<CategoryBucket> = Category::ALL
        .iter()
        .map(|&category| CategoryBucket {
            category,
            items: Vec::new(),
        })
        .collect();
    for item in entries {
        let category = categorize(&item.name);
        buckets[category.ordinal()].items.push(item);
    }

    ShoppingList { buckets }
}
