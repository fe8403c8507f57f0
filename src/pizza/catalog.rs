//! Ingredient catalog
//!
//! The fixed table of pizza ingredients. Built once at startup and never
//! mutated afterwards.

use std::collections::HashMap;

use crate::models::{Ingredient, NutritionVector};
use super::{PizzaError, PizzaResult};

/// Per-serving nutrition: (name, calories, protein g, fat g, carbs g)
const STANDARD_INGREDIENTS: [(&str, f64, f64, f64, f64); 12] = [
    ("Pizza Dough", 266.0, 9.0, 1.0, 53.0),
    ("Tomato Sauce", 29.0, 1.5, 0.5, 6.0),
    ("Mozzarella", 280.0, 24.0, 21.0, 3.0),
    ("Pepperoni", 494.0, 20.0, 44.0, 2.0),
    ("Mushrooms", 22.0, 3.0, 0.3, 3.3),
    ("Bell Peppers", 31.0, 1.0, 0.3, 6.0),
    ("Onions", 40.0, 1.1, 0.1, 9.3),
    ("Olives", 115.0, 0.8, 11.0, 6.0),
    ("Ham", 145.0, 21.0, 6.0, 1.5),
    ("Basil", 23.0, 3.0, 0.6, 2.7),
    ("Parmesan", 431.0, 38.0, 29.0, 4.0),
    ("Chicken", 165.0, 31.0, 3.6, 0.0),
];

/// Immutable name-to-ingredient mapping that remembers insertion order
#[derive(Debug, Clone)]
pub struct Catalog {
    ingredients: Vec<Ingredient>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The twelve-ingredient pizza catalog
    pub fn standard() -> Self {
        Self::from_ingredients(STANDARD_INGREDIENTS.iter().map(|&(name, kcal, protein, fat, carbs)| {
            Ingredient::new(name, NutritionVector::new(kcal, protein, fat, carbs))
        }))
    }

    /// Build a catalog; a repeated name keeps its first entry.
    pub fn from_ingredients<I>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let mut catalog = Self {
            ingredients: Vec::new(),
            index: HashMap::new(),
        };
        for ingredient in ingredients {
            if catalog.index.contains_key(&ingredient.name) {
                tracing::warn!(name = %ingredient.name, "Duplicate catalog entry ignored");
                continue;
            }
            catalog.index.insert(ingredient.name.clone(), catalog.ingredients.len());
            catalog.ingredients.push(ingredient);
        }
        catalog
    }

    /// Find an ingredient by exact name
    pub fn lookup(&self, name: &str) -> PizzaResult<&Ingredient> {
        self.index
            .get(name)
            .map(|&i| &self.ingredients[i])
            .ok_or_else(|| PizzaError::UnknownIngredient(name.to_string()))
    }

    /// Whether `name` is a catalog ingredient
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Ingredient names in catalog order
    pub fn all_names(&self) -> Vec<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    /// Ingredients in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.iter()
    }

    /// Number of ingredients
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// True only for a catalog built from no ingredients
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
