//! Reusable UI widgets

pub mod footer;
pub mod navbar;
