use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::Serialize;

use crate::diagnostics::{Diagnostics, Fallback};
use crate::error::Result;
use crate::ordering::order_courses;
use crate::passes::{EnergyPass, LearningStylePass, SchedulePass, SpacedRepetitionPass};
use crate::preferences::{ResolvedPreferences, UserPreferences};
use crate::schedule::Schedule;

use super::{DayDistributor, GeneratorConfig, SlotPlan};

/// Schedule plus everything that fell back to a default along the way.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub schedule: Schedule,
    pub preferences: ResolvedPreferences,
    pub fallbacks: Vec<Fallback>,
    pub passes: Vec<&'static str>,
}

/// Preferences-to-schedule pipeline.
///
/// Stages run in a fixed order: resolve preferences, order courses,
/// distribute across days, spaced repetition, energy, learning style.
#[derive(Debug, Clone)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
    distributor: DayDistributor,
}

impl ScheduleGenerator {
    /// Create a generator with default config
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: GeneratorConfig) -> Self {
        let distributor = DayDistributor::with_max_sessions(config.max_sessions_per_day);
        Self {
            config,
            distributor,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a schedule, discarding diagnostics.
    pub fn generate(&self, prefs: &UserPreferences) -> Schedule {
        self.generate_with_report(prefs).schedule
    }

    /// Generate a schedule using the configured seed, or entropy if unset.
    pub fn generate_with_report(&self, prefs: &UserPreferences) -> GenerationReport {
        let mut rng = match self.config.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        self.generate_with_rng(prefs, &mut rng)
    }

    /// Parse a JSON preferences record and generate from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is malformed.
    pub fn generate_from_json(&self, json: &str) -> Result<GenerationReport> {
        let prefs = UserPreferences::from_json(json)?;
        Ok(self.generate_with_report(&prefs))
    }

    /// Generate a schedule drawing shuffle randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        prefs: &UserPreferences,
        rng: &mut R,
    ) -> GenerationReport {
        let (resolved, mut diags) = prefs.resolve(&self.config);

        let ordered = order_courses(&resolved.courses, resolved.learning_style, rng);
        tracing::debug!(courses = ordered.len(), "courses ordered");

        let slots = SlotPlan {
            start_hour: resolved.start_hour,
            session_minutes: resolved.session_minutes,
            break_minutes: resolved.break_minutes,
        };
        let mut schedule = self.distributor.distribute(
            &ordered,
            &resolved.available_days,
            slots,
            resolved.scheduling_style,
            &resolved.custom_courses,
            &mut diags,
        );
        tracing::debug!(
            days = schedule.day_count(),
            sessions = schedule.session_count(),
            "courses distributed"
        );

        let mut applied = Vec::new();
        for pass in self.passes() {
            schedule = pass.apply(&schedule, &resolved);
            applied.push(pass.name());
        }

        GenerationReport {
            schedule,
            preferences: resolved,
            fallbacks: finish(diags),
            passes: applied,
        }
    }

    /// Enabled passes in pipeline order.
    fn passes(&self) -> Vec<Box<dyn SchedulePass>> {
        let toggles = &self.config.passes;
        let mut passes: Vec<Box<dyn SchedulePass>> = Vec::new();
        if toggles.spaced_repetition {
            passes.push(Box::new(SpacedRepetitionPass::new()));
        }
        if toggles.energy {
            passes.push(Box::new(EnergyPass::new()));
        }
        if toggles.learning_style {
            passes.push(Box::new(LearningStylePass::new()));
        }
        passes
    }
}

impl Default for ScheduleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(diags: Diagnostics) -> Vec<Fallback> {
    if !diags.is_empty() {
        tracing::info!(count = diags.fallbacks().len(), "schedule generated with fallbacks");
    }
    diags.into_fallbacks()
}
