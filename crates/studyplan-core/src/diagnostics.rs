//! Fallback diagnostics.
//!
//! Generation prefers silent fallback to failure. Every fallback is logged at
//! `warn` level and collected here so callers can surface it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value that could not be used as given and was replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fallback {
    UnknownLearningStyle { value: String },
    UnknownSchedulingStyle { value: String },
    UnknownPreferredTime { value: String, start_hour: u32 },
    UnknownWeekday { value: String },
    DuplicateWeekday { value: String },
    InvalidMinutes { field: String, value: String, fallback: u32 },
    UnresolvedCourse { identifier: String },
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::UnknownLearningStyle { value } => {
                write!(f, "unknown learning style '{value}', courses will be shuffled")
            }
            Fallback::UnknownSchedulingStyle { value } => {
                write!(f, "unknown scheduling style '{value}', treated as casual")
            }
            Fallback::UnknownPreferredTime { value, start_hour } => {
                write!(f, "unknown preferred time '{value}', starting at {start_hour}:00")
            }
            Fallback::UnknownWeekday { value } => {
                write!(f, "unknown weekday '{value}' skipped")
            }
            Fallback::DuplicateWeekday { value } => {
                write!(f, "weekday '{value}' listed more than once")
            }
            Fallback::InvalidMinutes {
                field,
                value,
                fallback,
            } => write!(f, "invalid {field} '{value}', using {fallback} minutes"),
            Fallback::UnresolvedCourse { identifier } => {
                write!(f, "course '{identifier}' not in catalog, shown as-is")
            }
        }
    }
}

/// Collects fallbacks and mirrors each one to the log.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    fallbacks: Vec<Fallback>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, fallback: Fallback) {
        tracing::warn!(fallback = %fallback, "schedule input fell back to default");
        self.fallbacks.push(fallback);
    }

    pub fn is_empty(&self) -> bool {
        self.fallbacks.is_empty()
    }

    pub fn fallbacks(&self) -> &[Fallback] {
        &self.fallbacks
    }

    pub fn into_fallbacks(self) -> Vec<Fallback> {
        self.fallbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut diags = Diagnostics::new();
        diags.record(Fallback::UnknownWeekday { value: "funday".into() });
        diags.record(Fallback::UnresolvedCourse { identifier: "x".into() });
        assert_eq!(diags.fallbacks().len(), 2);
        assert!(matches!(diags.fallbacks()[0], Fallback::UnknownWeekday { .. }));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Fallback::DuplicateWeekday {
            value: "monday".into(),
        })
        .unwrap();
        assert_eq!(json["kind"], "duplicate_weekday");
        assert_eq!(json["value"], "monday");
    }
}
