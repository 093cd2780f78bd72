//! Terminal output formatting and utilities.
//!
//! This module provides colors, the package renderer and error messages.

pub mod colors;
pub mod errors;
pub mod render;

pub use colors::ColorSupport;
pub use errors::ErrorFormatter;
pub use render::{OutputMode, Renderer};
