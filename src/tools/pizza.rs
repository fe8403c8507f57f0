//! Pizza MCP Tools
//!
//! Ingredient selection and nutrition tools. Each mutation answers with the
//! freshly recomputed stats so the client can redraw immediately.

use serde::Serialize;

use crate::models::Ingredient;
use crate::pizza::{AggregateResult, IngredientChoice, MacroDistribution, PizzaBuilder, PizzaSnapshot};

/// Catalog entry for list_ingredients / get_ingredient
#[derive(Debug, Serialize)]
pub struct IngredientSummary {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub selected: bool,
}

impl IngredientSummary {
    fn from_ingredient(ingredient: &Ingredient, selected: bool) -> Self {
        Self {
            name: ingredient.name.clone(),
            calories: ingredient.nutrition.calories,
            protein: ingredient.nutrition.protein,
            fat: ingredient.nutrition.fat,
            carbs: ingredient.nutrition.carbs,
            selected,
        }
    }
}

/// Response for list_ingredients
#[derive(Debug, Serialize)]
pub struct ListIngredientsResponse {
    pub items: Vec<IngredientSummary>,
    pub total: usize,
    pub selected: usize,
}

/// Display strings for the stats panel
#[derive(Debug, Serialize, PartialEq)]
pub struct NutritionLabels {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
}

impl From<&AggregateResult> for NutritionLabels {
    fn from(totals: &AggregateResult) -> Self {
        Self {
            calories: format!("Total Calories: {:.1} kcal", totals.calories),
            protein: format!("Protein: {:.1} g", totals.protein),
            fat: format!("Fat: {:.1} g", totals.fat),
            carbs: format!("Carbohydrates: {:.1} g", totals.carbs),
        }
    }
}

/// Response for every tool that changes or reads the selection
#[derive(Debug, Serialize)]
pub struct NutritionStatsResponse {
    pub labels: NutritionLabels,
    pub totals: AggregateResult,
    pub macros: MacroDistribution,
    pub selected: Vec<String>,
    pub ingredients: Vec<IngredientChoice>,
}

impl From<PizzaSnapshot> for NutritionStatsResponse {
    fn from(snapshot: PizzaSnapshot) -> Self {
        let selected = snapshot
            .ingredients
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.name.clone())
            .collect();
        Self {
            labels: NutritionLabels::from(&snapshot.totals),
            totals: snapshot.totals,
            macros: snapshot.macros,
            selected,
            ingredients: snapshot.ingredients,
        }
    }
}

/// Response for quit
#[derive(Debug, Serialize)]
pub struct QuitResponse {
    pub success: bool,
    pub message: String,
    pub final_stats: NutritionStatsResponse,
}

/// List the catalog with selection flags
pub fn list_ingredients(pizza: &PizzaBuilder) -> ListIngredientsResponse {
    let selection = pizza.selection();
    let items: Vec<IngredientSummary> = pizza
        .catalog()
        .iter()
        .map(|i| IngredientSummary::from_ingredient(i, selection.is_selected(&i.name)))
        .collect();

    ListIngredientsResponse {
        total: items.len(),
        selected: selection.selected_count(),
        items,
    }
}

/// Get one ingredient by exact name
pub fn get_ingredient(pizza: &PizzaBuilder, name: &str) -> Result<IngredientSummary, String> {
    let ingredient = pizza.catalog().lookup(name).map_err(|e| e.to_string())?;
    Ok(IngredientSummary::from_ingredient(
        ingredient,
        pizza.selection().is_selected(name),
    ))
}

/// Toggle an ingredient and return the new stats
pub fn toggle_ingredient(pizza: &mut PizzaBuilder, name: &str) -> Result<NutritionStatsResponse, String> {
    pizza.toggled(name).map(Into::into).map_err(|e| e.to_string())
}

/// Set an ingredient on or off and return the new stats
pub fn set_ingredient(
    pizza: &mut PizzaBuilder,
    name: &str,
    selected: bool,
) -> Result<NutritionStatsResponse, String> {
    pizza
        .set_selected(name, selected)
        .map(Into::into)
        .map_err(|e| e.to_string())
}

/// Clear the pizza and return the (zero) stats
pub fn reset_pizza(pizza: &mut PizzaBuilder) -> Result<NutritionStatsResponse, String> {
    pizza.reset().map(Into::into).map_err(|e| e.to_string())
}

/// Current stats without changing anything
pub fn get_nutrition(pizza: &PizzaBuilder) -> Result<NutritionStatsResponse, String> {
    pizza.snapshot().map(Into::into).map_err(|e| e.to_string())
}

/// Finish the session and return the final stats
pub fn quit(pizza: &mut PizzaBuilder) -> Result<QuitResponse, String> {
    let snapshot = pizza.quit().map_err(|e| e.to_string())?;
    Ok(QuitResponse {
        success: true,
        message: "Pizza Builder is shutting down".to_string(),
        final_stats: snapshot.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_one_decimal() {
        let totals = AggregateResult { calories: 295.0, protein: 10.5, fat: 1.5, carbs: 59.0 };
        let labels = NutritionLabels::from(&totals);
        assert_eq!(labels.calories, "Total Calories: 295.0 kcal");
        assert_eq!(labels.protein, "Protein: 10.5 g");
        assert_eq!(labels.fat, "Fat: 1.5 g");
        assert_eq!(labels.carbs, "Carbohydrates: 59.0 g");
    }

    #[test]
    fn test_list_ingredients_reports_selection() {
        let mut pizza = PizzaBuilder::default();
        toggle_ingredient(&mut pizza, "Onions").unwrap();
        let list = list_ingredients(&pizza);
        assert_eq!(list.total, 12);
        assert_eq!(list.selected, 1);
        let onions = list.items.iter().find(|i| i.name == "Onions").unwrap();
        assert!(onions.selected);
        assert_eq!(onions.carbs, 9.3);
    }

    #[test]
    fn test_get_ingredient_unknown() {
        let pizza = PizzaBuilder::default();
        let err = get_ingredient(&pizza, "Anchovies").unwrap_err();
        assert_eq!(err, "Unknown ingredient: Anchovies");
    }

    #[test]
    fn test_toggle_then_reset() {
        let mut pizza = PizzaBuilder::default();
        toggle_ingredient(&mut pizza, "Mozzarella").unwrap();
        let stats = set_ingredient(&mut pizza, "Pepperoni", true).unwrap();
        assert_eq!(stats.labels.calories, "Total Calories: 774.0 kcal");
        assert_eq!(stats.selected, vec!["Mozzarella".to_string(), "Pepperoni".to_string()]);

        let stats = reset_pizza(&mut pizza).unwrap();
        assert!(stats.selected.is_empty());
        assert_eq!(stats.labels.calories, "Total Calories: 0.0 kcal");
    }

    #[test]
    fn test_quit_marks_session_finished() {
        let mut pizza = PizzaBuilder::default();
        toggle_ingredient(&mut pizza, "Basil").unwrap();
        let response = quit(&mut pizza).unwrap();
        assert!(response.success);
        assert_eq!(response.final_stats.selected, vec!["Basil".to_string()]);
        assert!(pizza.is_finished());
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let pizza = PizzaBuilder::default();
        let stats = get_nutrition(&pizza).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totals"]["calories"], 0.0);
        assert_eq!(json["macros"]["shares"][0]["nutrient"], "protein");
        assert_eq!(json["ingredients"].as_array().map(|a| a.len()), Some(12));
    }
}
