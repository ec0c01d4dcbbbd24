//! Weekly study schedule generation.
//!
//! This module places courses into daily time slots and runs the result
//! through the optimization passes:
//! - [`DayDistributor`] assigns ordered courses to days and clock slots
//! - [`ScheduleGenerator`] runs the full preferences-to-schedule pipeline

mod generator;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CustomCourses};
use crate::clock::ClockTime;
use crate::diagnostics::{Diagnostics, Fallback};
use crate::preferences::SchedulingStyle;
use crate::schedule::{Schedule, StudySession, Weekday};

pub use generator::{GenerationReport, ScheduleGenerator};

/// Which optimization passes run. Order is fixed regardless of which are on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassToggles {
    #[serde(default = "default_true")]
    pub spaced_repetition: bool,
    #[serde(default = "default_true")]
    pub energy: bool,
    #[serde(default = "default_true")]
    pub learning_style: bool,
}

impl Default for PassToggles {
    fn default() -> Self {
        Self {
            spaced_repetition: true,
            energy: true,
            learning_style: true,
        }
    }
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Start hour when no preferred time is given (24h)
    #[serde(default = "default_start_hour")]
    pub default_start_hour: u32,
    /// Session length when studyDuration is missing or invalid (minutes)
    #[serde(default = "default_study_minutes")]
    pub default_study_minutes: u32,
    /// Break length when breakFrequency is missing or invalid (minutes)
    #[serde(default = "default_break_minutes")]
    pub default_break_minutes: u32,
    /// Cap on sessions placed on a single day
    #[serde(default = "default_max_sessions_per_day")]
    pub max_sessions_per_day: usize,
    /// Seed for the course shuffle (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub passes: PassToggles,
}

fn default_true() -> bool {
    true
}
fn default_start_hour() -> u32 {
    9
}
fn default_study_minutes() -> u32 {
    60
}
fn default_break_minutes() -> u32 {
    15
}
fn default_max_sessions_per_day() -> usize {
    3
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_start_hour: default_start_hour(),
            default_study_minutes: default_study_minutes(),
            default_break_minutes: default_break_minutes(),
            max_sessions_per_day: default_max_sessions_per_day(),
            seed: None,
            passes: PassToggles::default(),
        }
    }
}

/// Clock layout shared by every day of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlan {
    pub start_hour: u32,
    pub session_minutes: u32,
    pub break_minutes: u32,
}

/// Places ordered courses into per-day clock slots.
#[derive(Debug, Clone)]
pub struct DayDistributor {
    max_sessions_per_day: usize,
    catalog: Catalog,
}

impl DayDistributor {
    pub fn new() -> Self {
        Self::with_max_sessions(default_max_sessions_per_day())
    }

    pub fn with_max_sessions(max_sessions_per_day: usize) -> Self {
        Self {
            max_sessions_per_day,
            catalog: Catalog::new(),
        }
    }

    /// Assign courses to days and slots.
    ///
    /// # Arguments
    /// * `courses` - Course identifiers, highest priority first
    /// * `days` - Available days in declared order
    /// * `slots` - Start hour, session and break lengths
    /// * `style` - Focused repeats the first half of `courses`
    /// * `custom` - Custom course names keyed by subject
    ///
    /// # Returns
    /// A schedule holding exactly `days`, each with its sessions in
    /// chronological order.
    pub fn distribute(
        &self,
        courses: &[String],
        days: &[Weekday],
        slots: SlotPlan,
        style: SchedulingStyle,
        custom: &CustomCourses,
        diags: &mut Diagnostics,
    ) -> Schedule {
        let mut schedule = Schedule::new();
        for day in days {
            schedule.add_day(*day);
        }

        let expanded = expand_for_style(courses, days.len(), style);
        if expanded.is_empty() || days.is_empty() {
            return schedule;
        }

        let total = expanded.len();
        let per_day = total.div_ceil(days.len());
        let max_per_day = self.max_sessions_per_day.min(per_day);
        let mut unresolved: Vec<&str> = Vec::new();

        for (day_index, day) in days.iter().enumerate() {
            let start = (day_index * per_day) % total;
            let end = (start + per_day).min(total);
            let mut window = &expanded[start..end];
            if window.is_empty() {
                let only = day_index % total;
                window = &expanded[only..=only];
            }

            let mut clock = ClockTime::new(slots.start_hour, 0);
            for course_id in window.iter().take(max_per_day) {
                let name = match self.catalog.lookup(course_id, custom) {
                    Some(name) => name,
                    None => {
                        if !unresolved.contains(&course_id.as_str()) {
                            unresolved.push(course_id.as_str());
                            diags.record(Fallback::UnresolvedCourse {
                                identifier: course_id.clone(),
                            });
                        }
                        course_id.clone()
                    }
                };

                schedule.push(
                    *day,
                    StudySession::new(course_id.clone(), name, clock, slots.session_minutes),
                );
                clock = clock
                    .advance(slots.session_minutes)
                    .advance(slots.break_minutes);
            }

            tracing::debug!(day = %day, window_start = start, window_end = end, "placed day");
        }

        schedule
    }
}

impl Default for DayDistributor {
    fn default() -> Self {
        Self::new()
    }
}

/// Focused scheduling appends the first half (rounded up) of the list when
/// there are fewer than two courses per available day.
fn expand_for_style(courses: &[String], day_count: usize, style: SchedulingStyle) -> Vec<String> {
    let mut expanded = courses.to_vec();
    if style == SchedulingStyle::Focused && courses.len() < day_count * 2 {
        let half = courses.len().div_ceil(2);
        expanded.extend_from_slice(&courses[..half]);
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn slots() -> SlotPlan {
        SlotPlan {
            start_hour: 8,
            session_minutes: 60,
            break_minutes: 15,
        }
    }

    fn distribute(courses: &[String], days: &[Weekday], style: SchedulingStyle) -> Schedule {
        DayDistributor::new().distribute(
            courses,
            days,
            slots(),
            style,
            &CustomCourses::new(),
            &mut Diagnostics::new(),
        )
    }

    #[test]
    fn single_course_single_day() {
        let schedule = distribute(&ids(&["math-algebra"]), &[Weekday::Monday], SchedulingStyle::Casual);
        let monday = schedule.day(Weekday::Monday).unwrap();
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].course, "Algebra");
        assert_eq!(monday[0].start_time, "8:00 AM");
        assert_eq!(monday[0].end_time, "9:00 AM");
    }

    #[test]
    fn huge_slot_lengths_wrap_without_overflow() {
        let huge = SlotPlan {
            start_hour: 8,
            session_minutes: u32::MAX,
            break_minutes: u32::MAX,
        };
        let schedule = DayDistributor::new().distribute(
            &ids(&["math-algebra", "science-physics"]),
            &[Weekday::Monday],
            huge,
            SchedulingStyle::Casual,
            &CustomCourses::new(),
            &mut Diagnostics::new(),
        );
        let monday = schedule.day(Weekday::Monday).unwrap();
        // u32::MAX minutes wraps to 4h15m
        assert_eq!(monday[0].end_time, "12:15 PM");
        assert_eq!(monday[1].start_time, "4:30 PM");
    }

    #[test]
    fn sessions_are_separated_by_break() {
        let courses = ids(&["math-algebra", "science-physics", "cs-programming"]);
        let schedule = distribute(&courses, &[Weekday::Monday], SchedulingStyle::Casual);
        let monday = schedule.day(Weekday::Monday).unwrap();
        let times: Vec<_> = monday.iter().map(|s| (s.start_time.as_str(), s.end_time.as_str())).collect();
        assert_eq!(
            times,
            vec![("8:00 AM", "9:00 AM"), ("9:15 AM", "10:15 AM"), ("10:30 AM", "11:30 AM")]
        );
    }

    #[test]
    fn caps_sessions_per_day() {
        let courses = ids(&["a-1", "a-2", "a-3", "a-4", "a-5"]);
        let schedule = distribute(&courses, &[Weekday::Monday], SchedulingStyle::Casual);
        assert_eq!(schedule.day(Weekday::Monday).unwrap().len(), 3);
    }

    #[test]
    fn round_robin_windows() {
        let courses = ids(&["a-1", "a-2", "a-3", "a-4"]);
        let days = [Weekday::Monday, Weekday::Wednesday];
        let schedule = distribute(&courses, &days, SchedulingStyle::Casual);
        let mon: Vec<_> = schedule.day(Weekday::Monday).unwrap().iter().map(|s| s.course_id.as_str()).collect();
        let wed: Vec<_> = schedule.day(Weekday::Wednesday).unwrap().iter().map(|s| s.course_id.as_str()).collect();
        assert_eq!(mon, vec!["a-1", "a-2"]);
        assert_eq!(wed, vec!["a-3", "a-4"]);
    }

    #[test]
    fn windows_wrap_when_days_outnumber_courses() {
        let courses = ids(&["a-1", "a-2"]);
        let days = [Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday];
        let schedule = distribute(&courses, &days, SchedulingStyle::Casual);
        let firsts: Vec<_> = days
            .iter()
            .map(|d| schedule.day(*d).unwrap()[0].course_id.clone())
            .collect();
        assert_eq!(firsts, ids(&["a-1", "a-2", "a-1"]));
    }

    #[test]
    fn focused_duplicates_first_half() {
        let courses = ids(&["a-1", "a-2", "a-3"]);
        let expanded = expand_for_style(&courses, 5, SchedulingStyle::Focused);
        assert_eq!(expanded, ids(&["a-1", "a-2", "a-3", "a-1", "a-2"]));

        let untouched = expand_for_style(&courses, 1, SchedulingStyle::Focused);
        assert_eq!(untouched, courses);
        assert_eq!(expand_for_style(&courses, 5, SchedulingStyle::Casual), courses);
    }

    #[test]
    fn empty_inputs() {
        let none = distribute(&[], &[], SchedulingStyle::Casual);
        assert!(none.is_empty());

        let blank = distribute(&[], &[Weekday::Monday, Weekday::Tuesday], SchedulingStyle::Focused);
        assert_eq!(blank.day_count(), 2);
        assert_eq!(blank.session_count(), 0);
    }

    #[test]
    fn unresolved_course_reported_once() {
        let mut diags = Diagnostics::new();
        let courses = ids(&["mystery", "mystery"]);
        let schedule = DayDistributor::new().distribute(
            &courses,
            &[Weekday::Monday],
            slots(),
            SchedulingStyle::Casual,
            &CustomCourses::new(),
            &mut diags,
        );
        assert_eq!(schedule.day(Weekday::Monday).unwrap()[0].course, "mystery");
        assert_eq!(diags.fallbacks().len(), 1);
    }
}
