use std::fmt;

use serde::{Deserialize, Serialize};

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Parse a weekday identifier (`"monday"`), ignoring case and whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let lower = input.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|d| d.id() == lower)
    }

    /// Lowercase identifier as used in preference records.
    pub fn id(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Capitalized display name, used as the schedule key.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// 0 = Monday ... 6 = Sunday
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Days in the same week that follow one another. Sunday and Monday are
    /// not adjacent.
    pub fn is_adjacent(&self, other: Weekday) -> bool {
        self.index().abs_diff(other.index()) == 1
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_ids() {
        assert_eq!(Weekday::parse("monday"), Some(Weekday::Monday));
        assert_eq!(Weekday::parse(" Friday "), Some(Weekday::Friday));
        assert_eq!(Weekday::parse("funday"), None);
    }

    #[test]
    fn adjacency_does_not_wrap() {
        assert!(Weekday::Monday.is_adjacent(Weekday::Tuesday));
        assert!(Weekday::Saturday.is_adjacent(Weekday::Sunday));
        assert!(!Weekday::Sunday.is_adjacent(Weekday::Monday));
        assert!(!Weekday::Monday.is_adjacent(Weekday::Monday));
    }

    #[test]
    fn serializes_as_display_name() {
        assert_eq!(serde_json::to_string(&Weekday::Wednesday).unwrap(), "\"Wednesday\"");
    }
}
