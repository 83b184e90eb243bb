//! Common types and utilities shared across the crate.

// Submodule declarations
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use style::{Length, RGBColor};
