//! Common style and formatting types.
//!
//! Value types shared by the formatting accessors: lengths and colors.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
