//! Selection state
//!
//! Which catalog ingredients are currently on the pizza. The key set is
//! fixed at construction to the catalog's names.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::{Catalog, PizzaError, PizzaResult};

/// Ingredient name to "on the pizza" flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    flags: BTreeMap<String, bool>,
}

impl SelectionState {
    /// One unselected entry per catalog ingredient
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            flags: catalog
                .all_names()
                .into_iter()
                .map(|name| (name.to_string(), false))
                .collect(),
        }
    }

    /// Flip the flag for `name`
    pub fn toggle(&mut self, name: &str) -> PizzaResult<bool> {
        let flag = self.flag_mut(name)?;
        *flag = !*flag;
        Ok(*flag)
    }

    /// Put `name` on or off the pizza
    pub fn set(&mut self, name: &str, value: bool) -> PizzaResult<()> {
        *self.flag_mut(name)? = value;
        Ok(())
    }

    /// Set every flag at once; `set_all(false)` is a reset
    pub fn set_all(&mut self, value: bool) {
        self.flags.values_mut().for_each(|flag| *flag = value);
    }

    /// Names outside the catalog are never selected.
    pub fn is_selected(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Names currently on the pizza
    pub fn selected_names(&self) -> BTreeSet<&str> {
        self.flags
            .iter()
            .filter(|(_, &selected)| selected)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Number of ingredients currently on the pizza
    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|&&selected| selected).count()
    }

    fn flag_mut(&mut self, name: &str) -> PizzaResult<&mut bool> {
        self.flags
            .get_mut(name)
            .ok_or_else(|| PizzaError::UnknownIngredient(name.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn insert_raw(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }
}
