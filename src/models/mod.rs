//! Data models
//!
//! Plain value types shared by the catalog, the aggregator and the tools.

mod ingredient;
mod nutrition;

pub use ingredient::Ingredient;
pub use nutrition::NutritionVector;
