//! Command-line interface module.
//!
//! Provides argument parsing and headless command handling.

pub mod args;
pub mod commands;
