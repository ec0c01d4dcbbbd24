use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// One scheduled study block for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    /// Display name, never the raw identifier.
    pub course: String,
    pub course_id: String,
    pub start_time: String,
    pub end_time: String,
    pub completed: bool,
    /// Set by editors downstream.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub session_type: Option<String>,
    /// Set by editors downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Advisory length for this course; the slot itself is not resized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
}

impl StudySession {
    /// Create a session occupying `start .. start + minutes`.
    pub fn new(
        course_id: impl Into<String>,
        course: impl Into<String>,
        start: ClockTime,
        minutes: u32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            course: course.into(),
            course_id: course_id.into(),
            start_time: start.format_12h(),
            end_time: start.advance(minutes).format_12h(),
            completed: false,
            session_type: None,
            difficulty: None,
            suggested_minutes: None,
            technique: None,
        }
    }

    pub fn start(&self) -> Option<ClockTime> {
        ClockTime::parse_12h(&self.start_time).ok()
    }

    pub fn end(&self) -> Option<ClockTime> {
        ClockTime::parse_12h(&self.end_time).ok()
    }

    /// Slot length in minutes, mod 24h.
    pub fn duration_minutes(&self) -> Option<u32> {
        Some(self.start()?.minutes_until(self.end()?))
    }

    /// Exchange what two sessions contain while each keeps its time slot.
    pub fn exchange_contents(a: &mut StudySession, b: &mut StudySession) {
        std::mem::swap(a, b);
        std::mem::swap(&mut a.start_time, &mut b.start_time);
        std::mem::swap(&mut a.end_time, &mut b.end_time);
    }
}
