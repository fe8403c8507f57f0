//! Nutrition aggregation
//!
//! Totals are recomputed from the catalog on every call; nothing is cached
//! between selection changes.

use serde::Serialize;

use crate::models::NutritionVector;
use super::{Catalog, PizzaResult, SelectionState};

/// Elementwise sum of the selected ingredients' nutrition
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl From<NutritionVector> for AggregateResult {
    fn from(v: NutritionVector) -> Self {
        Self {
            calories: v.calories,
            protein: v.protein,
            fat: v.fat,
            carbs: v.carbs,
        }
    }
}

impl AggregateResult {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Protein/fat/carbohydrate split used by the distribution charts
    pub fn macro_distribution(&self) -> MacroDistribution {
        MacroDistribution::new(self.protein, self.fat, self.carbs)
    }
}

/// Sum the nutrition of every selected ingredient.
///
/// Fails with `UnknownIngredient` if the selection names something the
/// catalog does not hold.
pub fn aggregate(catalog: &Catalog, selection: &SelectionState) -> PizzaResult<AggregateResult> {
    aggregate_names(catalog, selection.selected_names())
}

/// Sum the nutrition of an arbitrary set of ingredient names
pub fn aggregate_names<'a, I>(catalog: &Catalog, names: I) -> PizzaResult<AggregateResult>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(|name| catalog.lookup(name).map(|ingredient| ingredient.nutrition))
        .sum::<PizzaResult<NutritionVector>>()
        .map(AggregateResult::from)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Protein,
    Fat,
    Carbohydrates,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Protein,
        Macronutrient::Fat,
        Macronutrient::Carbohydrates,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Macronutrient::Protein => "Protein",
            Macronutrient::Fat => "Fat",
            Macronutrient::Carbohydrates => "Carbohydrates",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroShare {
    pub nutrient: Macronutrient,
    pub grams: f64,
    /// Percentage of total macro grams, 0.0 when the total is zero
    pub percent: f64,
}

/// Macronutrient split in the fixed order protein, fat, carbohydrates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroDistribution {
    pub total_grams: f64,
    pub shares: [MacroShare; 3],
}

impl MacroDistribution {
    pub fn new(protein: f64, fat: f64, carbs: f64) -> Self {
        let total_grams = protein + fat + carbs;
        let grams = [protein, fat, carbs];
        let shares = std::array::from_fn(|i| MacroShare {
            nutrient: Macronutrient::ALL[i],
            grams: grams[i],
            percent: if total_grams > 0.0 {
                grams[i] / total_grams * 100.0
            } else {
                0.0
            },
        });
        Self { total_grams, shares }
    }

    /// Nothing to chart
    pub fn is_empty(&self) -> bool {
        self.total_grams <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::PizzaError;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: AggregateResult, expected: (f64, f64, f64, f64)) {
        assert!((actual.calories - expected.0).abs() < EPS, "calories {:?}", actual);
        assert!((actual.protein - expected.1).abs() < EPS, "protein {:?}", actual);
        assert!((actual.fat - expected.2).abs() < EPS, "fat {:?}", actual);
        assert!((actual.carbs - expected.3).abs() < EPS, "carbs {:?}", actual);
    }

    fn select(catalog: &Catalog, names: &[&str]) -> SelectionState {
        let mut selection = SelectionState::new(catalog);
        for name in names {
            selection.toggle(name).unwrap();
        }
        selection
    }

    #[test]
    fn test_dough_and_sauce() {
        let catalog = Catalog::standard();
        let selection = select(&catalog, &["Pizza Dough", "Tomato Sauce"]);
        let result = aggregate(&catalog, &selection).unwrap();
        assert_eq!(result, AggregateResult { calories: 295.0, protein: 10.5, fat: 1.5, carbs: 59.0 });
    }

    #[test]
    fn test_mozzarella_and_pepperoni() {
        let catalog = Catalog::standard();
        let selection = select(&catalog, &["Mozzarella", "Pepperoni"]);
        let result = aggregate(&catalog, &selection).unwrap();
        assert_eq!(result, AggregateResult { calories: 774.0, protein: 44.0, fat: 65.0, carbs: 5.0 });
    }

    #[test]
    fn test_empty_selection_is_exactly_zero() {
        let catalog = Catalog::standard();
        let selection = SelectionState::new(&catalog);
        let result = aggregate(&catalog, &selection).unwrap();
        assert_eq!(result, AggregateResult { calories: 0.0, protein: 0.0, fat: 0.0, carbs: 0.0 });
        assert!(result.is_zero());
    }

    #[test]
    fn test_all_twelve_golden() {
        let catalog = Catalog::standard();
        let mut selection = SelectionState::new(&catalog);
        selection.set_all(true);
        let result = aggregate(&catalog, &selection).unwrap();
        assert_close(result, (2041.0, 153.4, 117.4, 96.8));
    }

    #[test]
    fn test_reset_then_aggregate_is_zero() {
        let catalog = Catalog::standard();
        let mut selection = select(&catalog, &["Ham", "Olives", "Basil"]);
        selection.set_all(false);
        assert!(aggregate(&catalog, &selection).unwrap().is_zero());
    }

    #[test]
    fn test_every_subset_matches_manual_sum() {
        let catalog = Catalog::standard();
        let names = catalog.all_names();
        for mask in 0u32..(1 << names.len()) {
            let subset: Vec<&str> = names
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, n)| *n)
                .collect();

            let mut expected = (0.0, 0.0, 0.0, 0.0);
            for name in &subset {
                let n = catalog.lookup(name).unwrap().nutrition;
                expected.0 += n.calories;
                expected.1 += n.protein;
                expected.2 += n.fat;
                expected.3 += n.carbs;
            }

            let selection = select(&catalog, &subset);
            assert_close(aggregate(&catalog, &selection).unwrap(), expected);

            let reversed = aggregate_names(&catalog, subset.iter().rev().copied()).unwrap();
            assert_close(reversed, expected);
        }
    }

    #[test]
    fn test_unknown_name_propagates() {
        let catalog = Catalog::standard();
        let mut selection = SelectionState::new(&catalog);
        selection.insert_raw("Anchovies", true);
        assert_eq!(
            aggregate(&catalog, &selection),
            Err(PizzaError::UnknownIngredient("Anchovies".to_string()))
        );
    }

    #[test]
    fn test_macro_distribution_percentages() {
        let dist = MacroDistribution::new(44.0, 65.0, 5.0);
        assert!(!dist.is_empty());
        assert!((dist.total_grams - 114.0).abs() < EPS);
        let total_percent: f64 = dist.shares.iter().map(|s| s.percent).sum();
        assert!((total_percent - 100.0).abs() < 1e-6);
        assert_eq!(dist.shares[0].nutrient, Macronutrient::Protein);
        assert!((dist.shares[2].percent - 5.0 / 114.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn test_macro_distribution_empty() {
        let dist = AggregateResult::default().macro_distribution();
        assert!(dist.is_empty());
        assert!(dist.shares.iter().all(|s| s.percent == 0.0));
    }
}
