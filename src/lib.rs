//! Pizza Builder Library
//!
//! Ingredient catalog, selection and nutrition aggregation, plus the MCP
//! tools that present them.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod pizza;
pub mod tools;
