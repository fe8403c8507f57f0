//! Pizza error types

use thiserror::Error;

/// Errors raised by catalog, selection and aggregation operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PizzaError {
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Pizza session has finished")]
    SessionFinished,
}

/// Result type for pizza operations
pub type PizzaResult<T> = Result<T, PizzaError>;
