//! Grade-point values

use super::round_to;
use crate::core::error::PlanError;
use std::fmt;

/// Highest grade point on the scale
pub const MAX_GPA: f64 = 4.0;

/// A course grade point in [0, 4.0], rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Gpa(f64);

impl Gpa {
    /// Validate and round a grade point
    ///
    /// # Errors
    /// Returns `InvalidGpa` if `value` is not finite or lies outside [0, 4.0]
    pub fn new(value: f64) -> Result<Self, PlanError> {
        if !value.is_finite() || !(0.0..=MAX_GPA).contains(&value) {
            return Err(PlanError::InvalidGpa(value.to_string()));
        }
        Ok(Self(round_to(value, 2)))
    }

    /// Parse user-entered text; blank text means "not graded yet"
    ///
    /// # Errors
    /// Returns `InvalidGpa` if the text is not a number or is out of range
    pub fn parse_optional(text: &str) -> Result<Option<Self>, PlanError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| PlanError::InvalidGpa(text.to_string()))?;
        Self::new(value).map(Some)
    }

    /// Raw grade point
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Gpa {
    type Error = PlanError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gpa> for f64 {
    fn from(gpa: Gpa) -> Self {
        gpa.0
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpa_rounds_to_two_decimals() {
        let gpa = Gpa::new(3.456).unwrap();
        assert!((gpa.value() - 3.46).abs() < 1e-9);
    }

    #[test]
    fn test_gpa_bounds() {
        assert!(Gpa::new(0.0).is_ok());
        assert!(Gpa::new(4.0).is_ok());
        assert!(matches!(Gpa::new(4.01), Err(PlanError::InvalidGpa(_))));
        assert!(matches!(Gpa::new(-0.1), Err(PlanError::InvalidGpa(_))));
        assert!(matches!(Gpa::new(f64::NAN), Err(PlanError::InvalidGpa(_))));
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(Gpa::parse_optional("  ").unwrap(), None);
        assert_eq!(Gpa::parse_optional("3.7").unwrap(), Some(Gpa::new(3.7).unwrap()));
        assert!(matches!(
            Gpa::parse_optional("A+"),
            Err(PlanError::InvalidGpa(_))
        ));
        assert!(matches!(
            Gpa::parse_optional("5"),
            Err(PlanError::InvalidGpa(_))
        ));
    }
}
