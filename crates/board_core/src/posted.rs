//! Relative-age parsing for "posted" strings such as `"5 minutes ago"`.
//!
//! The same classification feeds both display formatting and the sort key,
//! so a string shows as `"Unknown time"` exactly when it sorts as
//! [`ElapsedMinutes::Unknown`].
use std::fmt;

pub const UNKNOWN_TIME: &str = "Unknown time";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl TimeUnit {
    /// Match order matters: the first unit whose name is contained in the token wins.
    const MATCH_ORDER: [TimeUnit; 5] = [
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
        }
    }

    /// Minutes per unit. Months are 30 days.
    pub fn minutes(self) -> u64 {
        match self {
            TimeUnit::Minute => 1,
            TimeUnit::Hour => 60,
            TimeUnit::Day => 60 * 24,
            TimeUnit::Week => 60 * 24 * 7,
            TimeUnit::Month => 60 * 24 * 30,
        }
    }

    /// Case-insensitive substring match, so `"Months"` and `"daydream"` both match.
    pub fn from_token(token: &str) -> Option<Self> {
        let lowered = token.to_lowercase();
        Self::MATCH_ORDER
            .into_iter()
            .find(|unit| lowered.contains(unit.name()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid number {0:?} in posted time")]
    InvalidNumber(String),
    #[error("posted time has no unit")]
    MissingUnit,
    #[error("unrecognized time unit {0:?}")]
    UnknownUnit(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostedAge {
    pub value: u64,
    pub unit: TimeUnit,
}

impl PostedAge {
    pub fn new(value: u64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Parses `"<integer> <unit>[s] [ago]"`. Words after the unit are ignored.
    pub fn parse(raw: &str) -> Result<Self, TimeParseError> {
        let mut tokens = raw.split_whitespace();
        let number = tokens.next().unwrap_or_default();
        let value = number
            .parse::<u64>()
            .map_err(|_| TimeParseError::InvalidNumber(number.to_string()))?;
        let unit_token = tokens.next().ok_or(TimeParseError::MissingUnit)?;
        let unit = TimeUnit::from_token(unit_token)
            .ok_or_else(|| TimeParseError::UnknownUnit(unit_token.to_string()))?;
        Ok(Self { value, unit })
    }

    pub fn minutes(&self) -> u64 {
        self.value.saturating_mul(self.unit.minutes())
    }
}

impl fmt::Display for PostedAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(s) ago", self.value, self.unit.name())
    }
}

/// Sort key for posted times. `Unknown` orders after every known value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElapsedMinutes {
    Known(u64),
    Unknown,
}

impl ElapsedMinutes {
    pub fn is_unknown(self) -> bool {
        matches!(self, ElapsedMinutes::Unknown)
    }
}

pub fn to_display_string(raw: &str) -> String {
    match PostedAge::parse(raw) {
        Ok(age) => age.to_string(),
        Err(_) => UNKNOWN_TIME.to_string(),
    }
}

pub fn to_minutes(raw: &str) -> ElapsedMinutes {
    match PostedAge::parse(raw) {
        Ok(age) => ElapsedMinutes::Known(age.minutes()),
        Err(_) => ElapsedMinutes::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::{PostedAge, TimeParseError, TimeUnit};

    #[test]
    fn parses_value_and_plural_unit() {
        assert_eq!(
            PostedAge::parse("3 Weeks ago"),
            Ok(PostedAge::new(3, TimeUnit::Week))
        );
        assert_eq!(
            PostedAge::parse("1 month"),
            Ok(PostedAge::new(1, TimeUnit::Month))
        );
    }

    #[test]
    fn reports_each_failure_kind() {
        assert_eq!(
            PostedAge::parse("five days"),
            Err(TimeParseError::InvalidNumber("five".into()))
        );
        assert_eq!(
            PostedAge::parse("-2 days"),
            Err(TimeParseError::InvalidNumber("-2".into()))
        );
        assert_eq!(PostedAge::parse("7"), Err(TimeParseError::MissingUnit));
        assert_eq!(
            PostedAge::parse("2 years ago"),
            Err(TimeParseError::UnknownUnit("years".into()))
        );
    }

    #[test]
    fn first_matching_unit_wins() {
        assert_eq!(TimeUnit::from_token("daydream"), Some(TimeUnit::Day));
        assert_eq!(TimeUnit::from_token("MINUTES"), Some(TimeUnit::Minute));
        assert_eq!(TimeUnit::from_token("fortnight"), None);
    }

    #[test]
    fn huge_values_saturate() {
        let age = PostedAge::new(u64::MAX, TimeUnit::Month);
        assert_eq!(age.minutes(), u64::MAX);
    }
}
