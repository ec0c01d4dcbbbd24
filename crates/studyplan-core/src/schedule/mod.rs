//! Weekly schedule types.
//!
//! A [`Schedule`] maps each available weekday to its chronologically ordered
//! study sessions. It serializes as a plain JSON object keyed by the
//! capitalized day name, e.g. `{"Monday": [...]}`.

mod session;
mod weekday;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

pub use session::StudySession;
pub use weekday::Weekday;

/// Weekly study schedule. Day order is the order days were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: IndexMap<Weekday, Vec<StudySession>>,
}

/// One place a course is studied during the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Occurrence {
    pub day: Weekday,
    pub start: ClockTime,
    pub slot: usize,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a day with no sessions. Existing days are left untouched.
    pub fn add_day(&mut self, day: Weekday) {
        self.days.entry(day).or_default();
    }

    pub fn push(&mut self, day: Weekday, session: StudySession) {
        self.days.entry(day).or_default().push(session);
    }

    pub fn day(&self, day: Weekday) -> Option<&[StudySession]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    pub fn day_mut(&mut self, day: Weekday) -> Option<&mut Vec<StudySession>> {
        self.days.get_mut(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[StudySession])> {
        self.days.iter().map(|(d, s)| (*d, s.as_slice()))
    }

    pub fn sessions(&self) -> impl Iterator<Item = (Weekday, &StudySession)> {
        self.days
            .iter()
            .flat_map(|(d, sessions)| sessions.iter().map(move |s| (*d, s)))
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn session_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn contains_day(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }

    /// Every slot where `course_id` is studied, sorted by weekday then time.
    pub fn occurrences(&self, course_id: &str) -> Vec<Occurrence> {
        let mut found: Vec<Occurrence> = self
            .days
            .iter()
            .flat_map(|(day, sessions)| {
                sessions
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.course_id == course_id)
                    .map(move |(slot, s)| Occurrence {
                        day: *day,
                        start: s.start().unwrap_or_default(),
                        slot,
                    })
            })
            .collect();
        found.sort();
        found
    }

    /// Distinct course identifiers in first-seen order.
    pub fn course_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for (_, session) in self.sessions() {
            if !ids.contains(&session.course_id) {
                ids.push(session.course_id.clone());
            }
        }
        ids
    }

    /// Plain-text agenda, one block per day.
    pub fn render_text(&self) -> String {
        let mut output = String::new();
        for (day, sessions) in self.iter() {
            output.push_str(day.name());
            output.push('\n');
            output.push_str(&"─".repeat(40));
            output.push('\n');
            if sessions.is_empty() {
                output.push_str("  (no sessions)\n");
            }
            for session in sessions {
                output.push_str(&format!(
                    "  {:>8} - {:<8}  {}",
                    session.start_time, session.end_time, session.course
                ));
                if let Some(technique) = &session.technique {
                    output.push_str(&format!("  [{technique}]"));
                }
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }
}
