//! Seasons, program semester tags, and actual semesters
//!
//! A program semester tag is what a course declares in the curriculum: either a
//! bare season (`"spring"`) or a year-qualified slot (`"2spring"`). An actual
//! semester is where a student really enrolls and is always year-qualified.

use crate::core::error::PlanError;
use std::fmt;
use std::str::FromStr;

/// Number of planning years in the program
pub const PROGRAM_YEARS: u32 = 4;

/// Canonical season order within one academic year
pub const SEASONS: [Season; 3] = [Season::Fall, Season::Spring, Season::Summer];

/// One of the three recurring terms of an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    /// Fall term (first of the academic year)
    Fall,
    /// Spring term
    Spring,
    /// Summer term
    Summer,
}

impl Season {
    /// Lowercase season name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fall => "fall",
            Self::Spring => "spring",
            Self::Summer => "summer",
        }
    }

    /// Split a trailing season name off `text`, returning the prefix and the season.
    fn split_suffix(text: &str) -> Option<(&str, Self)> {
        SEASONS.iter().find_map(|season| {
            text.strip_suffix(season.as_str())
                .map(|prefix| (prefix, *season))
        })
    }
}

impl FromStr for Season {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fall" => Ok(Self::Fall),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            _ => Err(PlanError::InvalidSeason(s.to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a year prefix: a positive integer without a leading zero.
fn parse_year(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

/// A course's declared offering slot: `(year)?(season)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemesterTag {
    year: Option<u32>,
    season: Season,
}

impl SemesterTag {
    /// Season-only tag, offered every year in `season`
    #[must_use]
    pub const fn floating(season: Season) -> Self {
        Self { year: None, season }
    }

    /// Year-qualified tag
    #[must_use]
    pub const fn fixed(year: u32, season: Season) -> Self {
        Self {
            year: Some(year),
            season,
        }
    }

    /// Season the course is offered in, regardless of year
    #[must_use]
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Program year, if the tag is year-qualified
    #[must_use]
    pub const fn year(&self) -> Option<u32> {
        self.year
    }

    /// The exact semester this tag names, if it is year-qualified
    #[must_use]
    pub const fn as_actual(&self) -> Option<ActualSemester> {
        match self.year {
            Some(year) => Some(ActualSemester::new(year, self.season)),
            None => None,
        }
    }
}

impl FromStr for SemesterTag {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let invalid = || PlanError::InvalidSemesterTag(s.to_string());
        let (prefix, season) = Season::split_suffix(&normalized).ok_or_else(invalid)?;
        if prefix.is_empty() {
            return Ok(Self::floating(season));
        }
        let year = parse_year(prefix).ok_or_else(invalid)?;
        Ok(Self::fixed(year, season))
    }
}

impl fmt::Display for SemesterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{year}{}", self.season),
            None => write!(f, "{}", self.season),
        }
    }
}

/// A concrete enrollment term: `year + season`
///
/// Ordered chronologically: by year, then fall, spring, summer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActualSemester {
    year: u32,
    season: Season,
}

impl ActualSemester {
    /// Create a semester from its parts
    #[must_use]
    pub const fn new(year: u32, season: Season) -> Self {
        Self { year, season }
    }

    /// Program year (1-based)
    #[must_use]
    pub const fn year(&self) -> u32 {
        self.year
    }

    /// Season component
    #[must_use]
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Whether this semester is one of the canonical planning slots
    #[must_use]
    pub const fn is_in_program(&self) -> bool {
        self.year >= 1 && self.year <= PROGRAM_YEARS
    }
}

impl FromStr for ActualSemester {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Season::split_suffix(&normalized)
            .and_then(|(prefix, season)| parse_year(prefix).map(|year| Self::new(year, season)))
            .ok_or_else(|| PlanError::InvalidActualSemester(s.to_string()))
    }
}

impl fmt::Display for ActualSemester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.year, self.season)
    }
}

/// The canonical planning slots, `1fall` through `4summer`, in chronological order
#[must_use]
pub fn plan_semesters() -> Vec<ActualSemester> {
    (1..=PROGRAM_YEARS)
        .flat_map(|year| SEASONS.iter().map(move |season| ActualSemester::new(year, *season)))
        .collect()
}
