//! Pizza core
//!
//! Catalog, selection and aggregation, free of any presentation concerns.

pub mod aggregator;
mod builder;
mod catalog;
mod error;
mod selection;

pub use aggregator::{
    aggregate, aggregate_names, AggregateResult, MacroDistribution, MacroShare, Macronutrient,
};
pub use builder::{IngredientChoice, PizzaBuilder, PizzaSnapshot};
pub use catalog::Catalog;
pub use error::{PizzaError, PizzaResult};
pub use selection::SelectionState;
