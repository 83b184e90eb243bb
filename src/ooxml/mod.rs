//! Office Open XML (OOXML) format implementation.
//!
//! This module provides the WordprocessingML run content model on top of a
//! small XML element tree.
//!
//! # Architecture
//!
//! The module is organized into several layers:
//!
//! 1. **Element tree** (`oxml`): parse, navigate, edit and serialize XML
//! 2. **Shared Utilities** (`error`): Common types used across the crate
//! 3. **Format-Specific Modules**:
//!    - `docx`: Word runs, fonts and inline content
pub mod docx;
pub mod error;
pub mod oxml;

// Re-export error types
pub use error::{OoxmlError, Result};
