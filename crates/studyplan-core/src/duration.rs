//! Per-course session length suggestions.

use crate::preferences::LearningStyle;

pub const MIN_SESSION_MINUTES: u32 = 30;
pub const MAX_SESSION_MINUTES: u32 = 120;

/// Relative difficulty by course keyword. First match wins.
static DIFFICULTY: &[(&str, f64)] = &[
    ("calculus", 1.3),
    ("physics", 1.25),
    ("chemistry", 1.2),
    ("algorithms", 1.2),
    ("programming", 1.15),
    ("trigonometry", 1.1),
    ("statistics", 1.1),
    ("geometry", 1.1),
    ("algebra", 1.0),
    ("grammar", 0.9),
    ("literature", 0.9),
    ("drawing", 0.85),
];

pub fn style_multiplier(style: Option<LearningStyle>) -> f64 {
    match style {
        Some(LearningStyle::Visual) => 1.0,
        Some(LearningStyle::Auditory) => 0.9,
        Some(LearningStyle::Reading) => 1.1,
        Some(LearningStyle::Kinesthetic) => 0.75,
        None => 1.0,
    }
}

/// Difficulty multiplier for a course identifier, 1.0 when unknown.
pub fn course_difficulty(course_id: &str) -> f64 {
    DIFFICULTY
        .iter()
        .find(|(keyword, _)| course_id.contains(keyword))
        .map(|(_, m)| *m)
        .unwrap_or(1.0)
}

/// `base x style x difficulty`, rounded and clamped to 30..=120 minutes.
pub fn calculate_optimal_duration(
    base_minutes: u32,
    course_id: &str,
    style: Option<LearningStyle>,
) -> u32 {
    let minutes = f64::from(base_minutes) * style_multiplier(style) * course_difficulty(course_id);
    (minutes.round() as u32).clamp(MIN_SESSION_MINUTES, MAX_SESSION_MINUTES)
}
