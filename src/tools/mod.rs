//! Pizza Builder tools module
//!
//! MCP tool implementations, independent of the rmcp plumbing.

pub mod charts;
pub mod pizza;
pub mod status;
