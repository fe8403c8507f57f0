//! Shared nutrition data structure
//!
//! Per-serving nutrition of an ingredient, and the unit of summation for
//! pizza totals.

use serde::{Deserialize, Serialize};

/// Nutritional information for one serving
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionVector {
    pub calories: f64, // kcal
    pub protein: f64,  // grams
    pub fat: f64,      // grams
    pub carbs: f64,    // grams
}

impl NutritionVector {
    /// Create a vector from calories and macronutrient grams
    pub const fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self { calories, protein, fat, carbs }
    }

    /// Create a new NutritionVector with all zeros
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Add another vector to this one, elementwise
    pub fn add(&self, other: &NutritionVector) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
        }
    }

    /// Grams of protein, fat and carbohydrate combined
    pub fn macro_grams(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }

    /// Whether every component is zero or more
    pub fn is_non_negative(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.fat >= 0.0 && self.carbs >= 0.0
    }
}

impl std::ops::Add for NutritionVector {
    type Output = NutritionVector;

    fn add(self, other: NutritionVector) -> NutritionVector {
        NutritionVector::add(&self, &other)
    }
}

impl std::iter::Sum for NutritionVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionVector::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_default() {
        assert_eq!(NutritionVector::zero(), NutritionVector::default());
    }

    #[test]
    fn test_add_elementwise() {
        let a = NutritionVector::new(266.0, 9.0, 1.0, 53.0);
        let b = NutritionVector::new(29.0, 1.5, 0.5, 6.0);
        assert_eq!(a + b, NutritionVector::new(295.0, 10.5, 1.5, 59.0));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: NutritionVector = std::iter::empty().sum();
        assert_eq!(total, NutritionVector::zero());
    }

    #[test]
    fn test_macro_grams_excludes_calories() {
        let v = NutritionVector::new(500.0, 10.0, 20.0, 30.0);
        assert_eq!(v.macro_grams(), 60.0);
    }
}
