//! Extracted or pasted contract text.

use std::fmt;

/// Full contents of one input, page order preserved, no markup.
///
/// Built once per analysis and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in chars, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DocumentText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DocumentText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl AsRef<str> for DocumentText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
