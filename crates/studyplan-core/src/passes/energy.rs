//! Put harder courses where energy peaks.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::duration::course_difficulty;
use crate::preferences::{PreferredTime, ResolvedPreferences};
use crate::schedule::{Schedule, StudySession};

use super::SchedulePass;

/// Clock landmarks for a time-of-day preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLandmarks {
    pub peak: ClockTime,
    pub decline: ClockTime,
}

impl EnergyLandmarks {
    pub fn for_time(time: Option<PreferredTime>) -> Self {
        let (peak, decline) = match time {
            Some(PreferredTime::Morning) | None => ((10, 0), (14, 0)),
            Some(PreferredTime::Afternoon) => ((15, 0), (18, 0)),
            Some(PreferredTime::Evening) => ((19, 0), (22, 0)),
            Some(PreferredTime::Night) => ((22, 0), (1, 0)),
        };
        Self {
            peak: ClockTime::new(peak.0, peak.1),
            decline: ClockTime::new(decline.0, decline.1),
        }
    }

    /// Whether `t` falls between the decline and the next peak, wrapping past
    /// midnight. Slots before the peak count as low as well as late ones.
    pub fn is_low(&self, t: ClockTime) -> bool {
        self.decline.minutes_until(t) < self.decline.minutes_until(self.peak)
    }

    /// Sort key for a slot: high-energy slots first, then nearest the peak.
    fn rank(&self, t: ClockTime) -> (bool, u32) {
        (self.is_low(t), t.circular_distance(self.peak))
    }
}

/// Reassigns each day's courses so the hardest ones sit nearest the peak.
#[derive(Debug, Clone, Default)]
pub struct EnergyPass;

impl EnergyPass {
    pub fn new() -> Self {
        Self
    }

    fn reorder_day(&self, sessions: &[StudySession], landmarks: &EnergyLandmarks) -> Vec<StudySession> {
        let n = sessions.len();
        if n < 2 {
            return sessions.to_vec();
        }

        let starts: Vec<ClockTime> = sessions.iter().map(|s| s.start().unwrap_or_default()).collect();
        let difficulty: Vec<f64> = sessions.iter().map(|s| course_difficulty(&s.course_id)).collect();

        let mut slots_by_energy: Vec<usize> = (0..n).collect();
        slots_by_energy.sort_by_key(|&i| landmarks.rank(starts[i]));

        let mut contents_by_difficulty: Vec<usize> = (0..n).collect();
        contents_by_difficulty.sort_by(|&a, &b| difficulty[b].total_cmp(&difficulty[a]));

        // Slot taken by each content index.
        let mut target = vec![0usize; n];
        for (slot, content) in slots_by_energy.iter().zip(&contents_by_difficulty) {
            target[*content] = *slot;
        }

        // Courses of equal difficulty keep their relative order.
        let mut i = 0;
        while i < n {
            let level = difficulty[contents_by_difficulty[i]];
            let mut j = i;
            while j < n && difficulty[contents_by_difficulty[j]].total_cmp(&level) == Ordering::Equal {
                j += 1;
            }
            let mut tier: Vec<usize> = contents_by_difficulty[i..j].to_vec();
            tier.sort_unstable();
            let mut tier_slots: Vec<usize> = tier.iter().map(|c| target[*c]).collect();
            tier_slots.sort_unstable();
            for (content, slot) in tier.iter().zip(tier_slots) {
                target[*content] = slot;
            }
            i = j;
        }

        let mut out = sessions.to_vec();
        for (content, slot) in target.iter().enumerate() {
            let mut moved = sessions[content].clone();
            moved.start_time = sessions[*slot].start_time.clone();
            moved.end_time = sessions[*slot].end_time.clone();
            out[*slot] = moved;
        }
        out
    }
}

impl SchedulePass for EnergyPass {
    fn name(&self) -> &'static str {
        "energy"
    }

    fn apply(&self, schedule: &Schedule, prefs: &ResolvedPreferences) -> Schedule {
        let landmarks = EnergyLandmarks::for_time(prefs.preferred_time);
        let mut out = schedule.clone();

        for (day, sessions) in schedule.iter() {
            let reordered = self.reorder_day(sessions, &landmarks);
            if let Some(slot) = out.day_mut(day) {
                *slot = reordered;
            }
        }

        tracing::debug!(
            peak = %landmarks.peak,
            decline = %landmarks.decline,
            "energy ordering applied"
        );
        out
    }
}
