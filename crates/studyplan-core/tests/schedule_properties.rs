//! Property tests for schedule invariants.

use proptest::prelude::*;
use studyplan_core::{
    Catalog, ClockTime, GeneratorConfig, ScheduleGenerator, UserPreferences, Weekday,
};

fn catalog_ids() -> Vec<String> {
    Catalog::new().identifiers()
}

fn arb_prefs() -> impl Strategy<Value = UserPreferences> {
    let ids = catalog_ids();
    (
        proptest::sample::subsequence(ids.clone(), 0..8),
        proptest::sample::subsequence(Weekday::ALL.to_vec(), 0..=7),
        prop_oneof![
            Just(None),
            Just(Some("visual")),
            Just(Some("auditory")),
            Just(Some("reading")),
            Just(Some("kinesthetic")),
        ],
        prop_oneof![Just("casual"), Just("focused")],
        prop_oneof![Just("morning"), Just("afternoon"), Just("evening"), Just("night")],
        1u32..1440,
        0u32..1440,
    )
        .prop_map(|(courses, days, learning, scheduling, time, study, brk)| UserPreferences {
            learning_style: learning.map(String::from),
            scheduling_style: Some(scheduling.into()),
            preferred_time: Some(time.into()),
            courses,
            available_days: days.iter().map(|d| d.id().to_string()).collect(),
            study_duration: Some(study.into()),
            break_frequency: Some(brk.to_string().as_str().into()),
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn day_keys_match_available_days(prefs in arb_prefs(), seed in any::<u64>()) {
        let generator = ScheduleGenerator::with_config(GeneratorConfig { seed: Some(seed), ..Default::default() });
        let schedule = generator.generate(&prefs);

        let declared: Vec<Weekday> = prefs.available_days.iter().filter_map(|d| Weekday::parse(d)).collect();
        let keys: Vec<Weekday> = schedule.days().collect();
        prop_assert_eq!(keys, declared);
    }

    #[test]
    fn slots_have_uniform_length_and_gaps(prefs in arb_prefs(), seed in any::<u64>()) {
        let generator = ScheduleGenerator::with_config(GeneratorConfig { seed: Some(seed), ..Default::default() });
        let report = generator.generate_with_report(&prefs);
        let session_minutes = report.preferences.session_minutes;
        let break_minutes = report.preferences.break_minutes;

        for (_, sessions) in report.schedule.iter() {
            prop_assert!(sessions.len() <= 3);
            for s in sessions {
                prop_assert_eq!(s.duration_minutes(), Some(session_minutes));
                prop_assert!(!s.completed);
            }
            for pair in sessions.windows(2) {
                let end = pair[0].end().unwrap();
                let next = pair[1].start().unwrap();
                prop_assert_eq!(end.minutes_until(next), break_minutes);
            }
        }
    }

    #[test]
    fn every_session_course_is_resolved(prefs in arb_prefs(), seed in any::<u64>()) {
        let generator = ScheduleGenerator::with_config(GeneratorConfig { seed: Some(seed), ..Default::default() });
        let report = generator.generate_with_report(&prefs);
        let catalog = Catalog::new();

        prop_assert!(report.fallbacks.is_empty());
        for (_, s) in report.schedule.sessions() {
            prop_assert!(prefs.courses.contains(&s.course_id));
            prop_assert_eq!(&s.course, &catalog.resolve(&s.course_id, &prefs.custom_courses));
        }
    }

    #[test]
    fn oversized_minutes_never_overflow(study in any::<u32>(), brk in any::<u32>(), seed in any::<u64>()) {
        let prefs = UserPreferences {
            courses: vec!["math-algebra".into(), "science-physics".into(), "cs-algorithms".into()],
            available_days: vec!["monday".into()],
            preferred_time: Some("night".into()),
            study_duration: Some(study.to_string().as_str().into()),
            break_frequency: Some(brk.into()),
            ..Default::default()
        };
        let generator = ScheduleGenerator::with_config(GeneratorConfig { seed: Some(seed), ..Default::default() });
        let report = generator.generate_with_report(&prefs);

        prop_assert!(report.preferences.session_minutes <= 24 * 60);
        prop_assert!(report.preferences.break_minutes <= 24 * 60);
        prop_assert_eq!(report.schedule.session_count(), 3);
    }

    #[test]
    fn clock_format_round_trips(hour in 0u32..24, minute in 0u32..60) {
        let t = ClockTime::new(hour, minute);
        prop_assert_eq!(ClockTime::parse_12h(&t.format_12h()).unwrap(), t);
    }

    #[test]
    fn advance_matches_minute_arithmetic(hour in 0u32..24, minute in 0u32..60, step in any::<u32>()) {
        let t = ClockTime::new(hour, minute).advance(step);
        let expected = (u64::from(hour * 60 + minute) + u64::from(step)) % (24 * 60);
        prop_assert_eq!(u64::from(t.minutes()), expected);
    }
}
