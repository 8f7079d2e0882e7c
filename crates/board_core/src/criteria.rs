use std::fmt;
use std::str::FromStr;

use crate::Job;

/// The user-facing value meaning "no constraint".
pub const FILTER_ALL: &str = "all";

/// Exact-match constraint on one job field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FieldFilter {
    #[default]
    All,
    Exactly(String),
}

impl FieldFilter {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Exactly(expected) => expected == value,
        }
    }
}

impl From<&str> for FieldFilter {
    fn from(value: &str) -> Self {
        if value == FILTER_ALL {
            FieldFilter::All
        } else {
            FieldFilter::Exactly(value.to_string())
        }
    }
}

impl From<String> for FieldFilter {
    fn from(value: String) -> Self {
        if value == FILTER_ALL {
            FieldFilter::All
        } else {
            FieldFilter::Exactly(value)
        }
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFilter::All => f.write_str(FILTER_ALL),
            FieldFilter::Exactly(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Level,
    Type,
    Skill,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterCriteria {
    pub level: FieldFilter,
    pub job_type: FieldFilter,
    pub skill: FieldFilter,
}

impl FilterCriteria {
    pub fn new(
        level: impl Into<FieldFilter>,
        job_type: impl Into<FieldFilter>,
        skill: impl Into<FieldFilter>,
    ) -> Self {
        Self {
            level: level.into(),
            job_type: job_type.into(),
            skill: skill.into(),
        }
    }

    pub fn set(&mut self, field: FilterField, value: FieldFilter) {
        match field {
            FilterField::Level => self.level = value,
            FilterField::Type => self.job_type = value,
            FilterField::Skill => self.skill = value,
        }
    }

    /// All active filters must match (logical AND).
    pub fn matches(&self, job: &Job) -> bool {
        self.level.matches(job.level())
            && self.job_type.matches(job.job_type())
            && self.skill.matches(job.skill())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    TitleAscending,
    TitleDescending,
    #[default]
    PostedNewestFirst,
    PostedOldestFirst,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::TitleAscending,
        SortKey::TitleDescending,
        SortKey::PostedNewestFirst,
        SortKey::PostedOldestFirst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::TitleAscending => "title-asc",
            SortKey::TitleDescending => "title-desc",
            SortKey::PostedNewestFirst => "posted-new",
            SortKey::PostedOldestFirst => "posted-old",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::TitleAscending => "Title (A-Z)",
            SortKey::TitleDescending => "Title (Z-A)",
            SortKey::PostedNewestFirst => "Newest first",
            SortKey::PostedOldestFirst => "Oldest first",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option {0:?} (expected title-asc, title-desc, posted-new or posted-old)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseSortKeyError(s.to_string()))
    }
}
