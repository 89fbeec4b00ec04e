//! Per-category credit requirements of the academic program

use super::Category;

/// Ordered mapping of program category to required credits
///
/// Declaration order is preserved; it drives the row order of credit-progress
/// tables. Declaring the same category twice keeps the first position and the
/// last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditRequirements {
    entries: Vec<(Category, f64)>,
}

impl CreditRequirements {
    /// Create an empty requirement set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The program's built-in category requirements
    #[must_use]
    pub fn program_default() -> Self {
        [
            ("politics", 18.5),
            ("physical-education", 4.0),
            (Category::REQUIRED_MAJOR, 33.0),
            (Category::ELECTIVE_MAJOR, 15.0),
            ("major-platform", 72.5),
            ("school-platform", 25.5),
        ]
        .into_iter()
        .collect()
    }

    /// Declare (or update) the credits required for `category`
    pub fn insert(&mut self, category: impl Into<Category>, credits: f64) {
        let category = category.into();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == category) {
            entry.1 = credits;
        } else {
            self.entries.push((category, credits));
        }
    }

    /// Required credits for `category`, if declared
    #[must_use]
    pub fn get(&self, category: &Category) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, credits)| *credits)
    }

    /// Whether `category` is declared
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.entries.iter().any(|(c, _)| c == category)
    }

    /// Declared categories with their credits, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&Category, f64)> {
        self.entries.iter().map(|(c, credits)| (c, *credits))
    }

    /// Number of declared categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no categories are declared
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all declared requirements
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, credits)| credits).sum()
    }
}

impl<C: Into<Category>> FromIterator<(C, f64)> for CreditRequirements {
    fn from_iter<I: IntoIterator<Item = (C, f64)>>(iter: I) -> Self {
        let mut requirements = Self::new();
        for (category, credits) in iter {
            requirements.insert(category, credits);
        }
        requirements
    }
}
