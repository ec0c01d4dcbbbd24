//! Annotate sessions with style-specific study guidance.

use crate::duration::calculate_optimal_duration;
use crate::ordering::has_affinity;
use crate::preferences::{LearningStyle, ResolvedPreferences};
use crate::schedule::Schedule;

use super::SchedulePass;

/// Suggested technique for a style. Courses the style favours get the
/// stronger variant.
pub fn technique_for(style: LearningStyle, affine: bool) -> &'static str {
    match (style, affine) {
        (LearningStyle::Visual, true) => "diagram walkthrough",
        (LearningStyle::Visual, false) => "mind map and color-coded notes",
        (LearningStyle::Auditory, true) => "listen and repeat aloud",
        (LearningStyle::Auditory, false) => "explain it out loud",
        (LearningStyle::Reading, true) => "close reading with summaries",
        (LearningStyle::Reading, false) => "outline notes",
        (LearningStyle::Kinesthetic, true) => "hands-on practice",
        (LearningStyle::Kinesthetic, false) => "short blocks with movement breaks",
    }
}

/// Adds `technique` and `suggestedMinutes` to every session. Slot times,
/// session counts and days are not touched.
#[derive(Debug, Clone, Default)]
pub struct LearningStylePass;

impl LearningStylePass {
    pub fn new() -> Self {
        Self
    }
}

impl SchedulePass for LearningStylePass {
    fn name(&self) -> &'static str {
        "learning_style"
    }

    fn apply(&self, schedule: &Schedule, prefs: &ResolvedPreferences) -> Schedule {
        let mut out = schedule.clone();
        let Some(style) = prefs.learning_style else {
            return out;
        };

        let days: Vec<_> = out.days().collect();
        for day in days {
            let Some(sessions) = out.day_mut(day) else {
                continue;
            };
            for session in sessions.iter_mut() {
                let affine = has_affinity(&session.course_id, style);
                session.technique = Some(technique_for(style, affine).to_string());
                session.suggested_minutes = Some(calculate_optimal_duration(
                    prefs.session_minutes,
                    &session.course_id,
                    Some(style),
                ));
            }
        }

        out
    }
}
