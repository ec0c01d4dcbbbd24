//! # studyplan Core Library
//!
//! This library turns a student's onboarding preferences into a weekly study
//! schedule. It is a pure, synchronous, in-process library; the CLI binary
//! is a thin layer over the same API.
//!
//! ## Architecture
//!
//! - **Catalog**: Single static subject/course table and identifier resolution
//! - **Ordering**: Learning-style course promotion, seeded shuffle otherwise
//! - **Scheduler**: Day distribution and the fixed generation pipeline
//! - **Passes**: Spaced repetition, energy ordering, learning-style annotation
//! - **Storage**: TOML configuration and timestamped JSON snapshots
//!
//! ## Key Components
//!
//! - [`ScheduleGenerator`]: Preferences-to-schedule pipeline
//! - [`DayDistributor`]: Slot placement engine
//! - [`Catalog`]: Course display-name resolution
//! - [`SchedulePass`]: Trait for post-processing passes
//! - [`Config`]: Application configuration management

pub mod catalog;
pub mod clock;
pub mod diagnostics;
pub mod duration;
pub mod error;
pub mod ordering;
pub mod passes;
pub mod preferences;
pub mod schedule;
pub mod scheduler;
pub mod storage;

pub use catalog::{Catalog, CustomCourses, CATALOG_VERSION};
pub use clock::{format_time, ClockTime};
pub use diagnostics::{Diagnostics, Fallback};
pub use duration::{calculate_optimal_duration, course_difficulty};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use ordering::order_courses;
pub use passes::{EnergyLandmarks, EnergyPass, LearningStylePass, SchedulePass, SpacedRepetitionPass};
pub use preferences::{LearningStyle, PreferredTime, ResolvedPreferences, SchedulingStyle, UserPreferences};
pub use schedule::{Schedule, StudySession, Weekday};
pub use scheduler::{DayDistributor, GenerationReport, GeneratorConfig, PassToggles, ScheduleGenerator, SlotPlan};
pub use storage::{Config, ScheduleSnapshot};
