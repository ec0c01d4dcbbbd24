//! Spread repeated courses across the week.

use crate::preferences::ResolvedPreferences;
use crate::schedule::{Schedule, StudySession, Weekday};

use super::SchedulePass;

/// Number of same-course pairs that sit on the same or adjacent weekdays.
pub fn repetition_conflicts(schedule: &Schedule) -> usize {
    schedule
        .course_ids()
        .iter()
        .map(|id| {
            let occ = schedule.occurrences(id);
            let mut conflicts = 0;
            for (i, a) in occ.iter().enumerate() {
                for b in &occ[i + 1..] {
                    if a.day == b.day || a.day.is_adjacent(b.day) {
                        conflicts += 1;
                    }
                }
            }
            conflicts
        })
        .sum()
}

/// Swaps course assignments between days until no swap lowers the number of
/// repeated courses on neighbouring days.
#[derive(Debug, Clone)]
pub struct SpacedRepetitionPass {
    max_rounds: usize,
}

impl SpacedRepetitionPass {
    pub fn new() -> Self {
        Self { max_rounds: 16 }
    }

    pub fn with_max_rounds(max_rounds: usize) -> Self {
        Self { max_rounds }
    }
}

impl Default for SpacedRepetitionPass {
    fn default() -> Self {
        Self::new()
    }
}

type Slot = (Weekday, usize);

fn session_at(schedule: &Schedule, (day, index): Slot) -> Option<&StudySession> {
    schedule.day(day)?.get(index)
}

fn swap_slots(schedule: &mut Schedule, a: Slot, b: Slot) {
    let (Some(mut first), Some(mut second)) = (
        session_at(schedule, a).cloned(),
        session_at(schedule, b).cloned(),
    ) else {
        return;
    };

    StudySession::exchange_contents(&mut first, &mut second);

    if let Some(day) = schedule.day_mut(a.0) {
        day[a.1] = first;
    }
    if let Some(day) = schedule.day_mut(b.0) {
        day[b.1] = second;
    }
}

impl SchedulePass for SpacedRepetitionPass {
    fn name(&self) -> &'static str {
        "spaced_repetition"
    }

    fn apply(&self, schedule: &Schedule, _prefs: &ResolvedPreferences) -> Schedule {
        let mut out = schedule.clone();
        let mut score = repetition_conflicts(&out);
        if score == 0 {
            return out;
        }

        let slots: Vec<Slot> = out
            .iter()
            .flat_map(|(day, sessions)| (0..sessions.len()).map(move |i| (day, i)))
            .collect();

        for _ in 0..self.max_rounds {
            let mut improved = false;

            for (i, &a) in slots.iter().enumerate() {
                for &b in &slots[i + 1..] {
                    if a.0 == b.0 {
                        continue;
                    }
                    let same_course = match (session_at(&out, a), session_at(&out, b)) {
                        (Some(x), Some(y)) => x.course_id == y.course_id,
                        _ => true,
                    };
                    if same_course {
                        continue;
                    }

                    swap_slots(&mut out, a, b);
                    let candidate = repetition_conflicts(&out);
                    if candidate < score {
                        score = candidate;
                        improved = true;
                    } else {
                        swap_slots(&mut out, a, b);
                    }
                }
            }

            if !improved || score == 0 {
                break;
            }
        }

        tracing::debug!(remaining_conflicts = score, "spaced repetition applied");
        out
    }
}
