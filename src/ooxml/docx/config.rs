//! Configuration types for run editing.
//!
//! This module defines the options that influence how a [`Run`](super::run::Run)
//! writes new content.
use serde::{Deserialize, Serialize};

/// When a written `w:t` is marked `xml:space="preserve"`.
///
/// Without the marker, consumers are free to drop leading and trailing
/// whitespace of the text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WhitespacePolicy {
    /// Only when the text starts or ends with whitespace.
    #[default]
    WhenNeeded,
    /// On every text node written.
    Always,
}

impl WhitespacePolicy {
    /// Whether `text` should be marked as whitespace-preserving.
    #[inline]
    pub fn preserves(self, text: &str) -> bool {
        match self {
            Self::Always => true,
            Self::WhenNeeded => text.trim().len() < text.len(),
        }
    }
}

/// Options for writing run content.
///
/// # Examples
///
/// ```rust
/// use docx_run::ooxml::docx::config::{RunOptions, WhitespacePolicy};
///
/// // Create with defaults
/// let options = RunOptions::default();
/// assert_eq!(options.whitespace, WhitespacePolicy::WhenNeeded);
///
/// // Or customize
/// let options = RunOptions::new().with_whitespace(WhitespacePolicy::Always);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunOptions {
    /// Whitespace preservation for new `w:t` elements
    pub whitespace: WhitespacePolicy,
}

impl RunOptions {
    /// Create a new `RunOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whitespace preservation policy.
    #[inline]
    pub fn with_whitespace(mut self, policy: WhitespacePolicy) -> Self {
        self.whitespace = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_when_needed_only_for_outer_whitespace() {
        let policy = WhitespacePolicy::WhenNeeded;
        assert!(policy.preserves("fo "));
        assert!(policy.preserves(" fo"));
        assert!(policy.preserves("\u{a0}x"));
        assert!(!policy.preserves("f o"));
        assert!(!policy.preserves("abc  def"));
        assert!(!policy.preserves(""));
    }

    #[test]
    fn test_always() {
        assert!(WhitespacePolicy::Always.preserves("abc"));
        let options = RunOptions::new().with_whitespace(WhitespacePolicy::Always);
        assert_eq!(options.whitespace, WhitespacePolicy::Always);
    }
}
