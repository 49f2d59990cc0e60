//! CLI command definitions.

pub mod config;
pub mod serve;
