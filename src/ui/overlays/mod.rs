//! Overlay widgets rendered on top of the active view

pub mod toast;
