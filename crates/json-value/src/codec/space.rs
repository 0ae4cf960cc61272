//! Indentation setting for encoded text.

use serde::Deserialize;

const MAX_GAP: usize = 10;

/// Indentation of encoded text.
///
/// Deserializes from `null`, a number of spaces, or an indent string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Space {
    #[default]
    None,
    Indent(usize),
    Text(String),
}

impl Space {
    /// Indent unit written per nesting level; empty means compact output.
    ///
    /// Both forms are capped at ten characters.
    pub fn gap(&self) -> String {
        match self {
            Space::None => String::new(),
            Space::Indent(n) => " ".repeat((*n).min(MAX_GAP)),
            Space::Text(text) => text.chars().take(MAX_GAP).collect(),
        }
    }
}

impl From<usize> for Space {
    fn from(n: usize) -> Self {
        Space::Indent(n)
    }
}

impl From<&str> for Space {
    fn from(text: &str) -> Self {
        Space::Text(text.to_owned())
    }
}
