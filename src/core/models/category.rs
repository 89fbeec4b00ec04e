//! Program category tags used to bucket credits against requirements

use std::cmp::Ordering;
use std::fmt;

const UNCATEGORIZED: &str = "uncategorized";

/// A program category such as `required-major` or `politics`
///
/// Names are normalized on construction: trimmed, inner whitespace collapsed to
/// single spaces, and ASCII-lowercased. An empty name or the literal
/// `uncategorized` becomes [`Category::Uncategorized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// No category was given
    #[default]
    Uncategorized,
    /// A named category (always normalized)
    Named(String),
}

impl Category {
    /// Mandatory courses of the student's major
    pub const REQUIRED_MAJOR: &'static str = "required-major";
    /// Elective courses of the student's major
    pub const ELECTIVE_MAJOR: &'static str = "elective-major";

    /// Build a category from free-form text
    #[must_use]
    pub fn new(name: &str) -> Self {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        if normalized.is_empty() || normalized == UNCATEGORIZED {
            Self::Uncategorized
        } else {
            Self::Named(normalized)
        }
    }

    /// The categories that make up the "major" GPA subset
    #[must_use]
    pub fn major() -> [Self; 2] {
        [
            Self::new(Self::REQUIRED_MAJOR),
            Self::new(Self::ELECTIVE_MAJOR),
        ]
    }

    /// Normalized category name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uncategorized => UNCATEGORIZED,
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
