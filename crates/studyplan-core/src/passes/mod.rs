//! Post-processing passes over a generated schedule.
//!
//! Each pass returns a new schedule and leaves its input untouched. Passes
//! never move a time slot or change which days exist; they only change which
//! course occupies a slot, or annotate sessions.

mod energy;
mod learning_style;
mod spaced_repetition;

use crate::preferences::ResolvedPreferences;
use crate::schedule::Schedule;

pub use energy::{EnergyLandmarks, EnergyPass};
pub use learning_style::{technique_for, LearningStylePass};
pub use spaced_repetition::{repetition_conflicts, SpacedRepetitionPass};

/// A schedule-to-schedule transformation.
pub trait SchedulePass {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Produce a transformed copy of `schedule`.
    fn apply(&self, schedule: &Schedule, prefs: &ResolvedPreferences) -> Schedule;
}
