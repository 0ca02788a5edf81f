//! Selectable option records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A selectable option.
///
/// Serializes as `{"key": ..., "label": ...}`, the shape hosts pass
/// across the JavaScript boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    /// Identifies the option within its list
    pub key: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new option.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Create an option where key equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            key: text.clone(),
            label: text,
        }
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
