//! Position of a node inside its parent.

use std::fmt;

/// Key under which a visited node sits in its holder.
///
/// Displays the way JSON visitors traditionally see keys: the root is the
/// empty string and array indices are their decimal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Root,
    Field(&'a str),
    Index(usize),
}

impl<'a> Key<'a> {
    pub fn is_root(&self) -> bool {
        matches!(self, Key::Root)
    }

    pub fn as_field(&self) -> Option<&'a str> {
        match self {
            Key::Field(name) => Some(name),
            _ => None,
        }
    }

    /// Compares against a textual key without allocating.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Key::Root => text.is_empty(),
            Key::Field(name) => *name == text,
            Key::Index(index) => {
                // canonical decimal only: "01" is not index 1
                let canonical = text == "0" || !text.starts_with('0');
                canonical && text.parse::<usize>().ok() == Some(*index)
            }
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Root => Ok(()),
            Key::Field(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}
