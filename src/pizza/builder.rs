//! Pizza builder session
//!
//! Owns the one mutable selection of a running application and turns the
//! adapter's `toggled` / `reset` / `quit` events into fresh snapshots.

use serde::Serialize;

use super::aggregator::{aggregate, AggregateResult, MacroDistribution};
use super::{Catalog, PizzaError, PizzaResult, SelectionState};

/// One checkbox row as the adapter shows it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientChoice {
    pub name: String,
    pub selected: bool,
}

/// Everything the adapter needs to redraw after a change
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaSnapshot {
    pub totals: AggregateResult,
    pub macros: MacroDistribution,
    pub ingredients: Vec<IngredientChoice>,
}

/// The single mutable pizza of a running server
pub struct PizzaBuilder {
    catalog: Catalog,
    selection: SelectionState,
    finished: bool,
}

impl PizzaBuilder {
    /// Start a session with nothing selected
    pub fn new(catalog: Catalog) -> Self {
        let selection = SelectionState::new(&catalog);
        Self {
            catalog,
            selection,
            finished: false,
        }
    }

    /// The catalog this session picks from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selection flags
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether `quit` has been requested
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Mutations are refused once `quit` has run
    fn ensure_active(&self) -> PizzaResult<()> {
        if self.finished {
            return Err(PizzaError::SessionFinished);
        }
        Ok(())
    }

    /// Handle a checkbox toggle
    pub fn toggled(&mut self, name: &str) -> PizzaResult<PizzaSnapshot> {
        self.ensure_active()?;
        let selected = self.selection.toggle(name)?;
        tracing::debug!(ingredient = name, selected, "Ingredient toggled");
        self.snapshot()
    }

    /// Handle an explicit on/off request
    pub fn set_selected(&mut self, name: &str, selected: bool) -> PizzaResult<PizzaSnapshot> {
        self.ensure_active()?;
        self.selection.set(name, selected)?;
        tracing::debug!(ingredient = name, selected, "Ingredient set");
        self.snapshot()
    }

    /// Clear every selection
    pub fn reset(&mut self) -> PizzaResult<PizzaSnapshot> {
        self.ensure_active()?;
        self.selection.set_all(false);
        tracing::info!("Pizza reset");
        self.snapshot()
    }

    /// Mark the session finished and return the final state.
    ///
    /// Calling it again just returns the same state.
    pub fn quit(&mut self) -> PizzaResult<PizzaSnapshot> {
        let snapshot = self.snapshot()?;
        self.finished = true;
        tracing::info!(
            selected = self.selection.selected_count(),
            calories = snapshot.totals.calories,
            "Quit requested"
        );
        Ok(snapshot)
    }

    /// Aggregate nutrition of the current selection
    pub fn totals(&self) -> PizzaResult<AggregateResult> {
        aggregate(&self.catalog, &self.selection)
    }

    /// Totals, macro split and checkbox states for a redraw
    pub fn snapshot(&self) -> PizzaResult<PizzaSnapshot> {
        let totals = self.totals()?;
        let ingredients = self
            .catalog
            .all_names()
            .into_iter()
            .map(|name| IngredientChoice {
                name: name.to_string(),
                selected: self.selection.is_selected(name),
            })
            .collect();

        Ok(PizzaSnapshot {
            totals,
            macros: totals.macro_distribution(),
            ingredients,
        })
    }
}

impl Default for PizzaBuilder {
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pizza::PizzaError;

    #[test]
    fn test_toggle_updates_snapshot() {
        let mut pizza = PizzaBuilder::default();
        pizza.toggled("Pizza Dough").unwrap();
        let snapshot = pizza.toggled("Tomato Sauce").unwrap();
        assert_eq!(snapshot.totals.calories, 295.0);
        assert_eq!(snapshot.ingredients.len(), 12);
        assert!(snapshot.ingredients[0].selected);
        assert!(snapshot.ingredients[1].selected);
        assert!(!snapshot.ingredients[2].selected);
    }

    #[test]
    fn test_unknown_toggle_leaves_state_alone() {
        let mut pizza = PizzaBuilder::default();
        pizza.toggled("Ham").unwrap();
        let err = pizza.toggled("Anchovies").unwrap_err();
        assert_eq!(err, PizzaError::UnknownIngredient("Anchovies".to_string()));
        assert_eq!(pizza.selection().selected_count(), 1);
    }

    #[test]
    fn test_reset_zeroes_totals() {
        let mut pizza = PizzaBuilder::default();
        pizza.toggled("Parmesan").unwrap();
        pizza.set_selected("Chicken", true).unwrap();
        let snapshot = pizza.reset().unwrap();
        assert!(snapshot.totals.is_zero());
        assert!(snapshot.macros.is_empty());
        assert!(snapshot.ingredients.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_quit_returns_final_state() {
        let mut pizza = PizzaBuilder::default();
        pizza.toggled("Mozzarella").unwrap();
        pizza.toggled("Pepperoni").unwrap();
        assert!(!pizza.is_finished());
        let snapshot = pizza.quit().unwrap();
        assert!(pizza.is_finished());
        assert_eq!(snapshot.totals.fat, 65.0);
    }

    #[test]
    fn test_mutations_rejected_after_quit() {
        let mut pizza = PizzaBuilder::default();
        pizza.toggled("Ham").unwrap();
        pizza.quit().unwrap();

        assert_eq!(pizza.toggled("Basil"), Err(PizzaError::SessionFinished));
        assert_eq!(pizza.set_selected("Ham", false), Err(PizzaError::SessionFinished));
        assert_eq!(pizza.reset(), Err(PizzaError::SessionFinished));

        // Reads still work and see the state at quit time
        let snapshot = pizza.snapshot().unwrap();
        assert_eq!(snapshot.totals.calories, 145.0);
        assert_eq!(pizza.quit().unwrap(), snapshot);
    }
}
