//! Ingredient model
//!
//! A named catalog entry with per-serving nutrition.

use serde::{Deserialize, Serialize};

use super::NutritionVector;

/// A pizza ingredient with nutritional information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub nutrition: NutritionVector,
}

impl Ingredient {
    /// Create an ingredient from its name and per-serving nutrition
    pub fn new(name: impl Into<String>, nutrition: NutritionVector) -> Self {
        Self {
            name: name.into(),
            nutrition,
        }
    }
}
