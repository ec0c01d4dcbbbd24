//! User preferences: the onboarding record as received, and its resolved form.
//!
//! Enumerated fields arrive as free strings. Anything unrecognized resolves to
//! a documented default and is recorded as a [`Fallback`]. Only a wrong shape
//! (e.g. `availableDays` given as a string) is an error.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::CustomCourses;
use crate::clock::MINUTES_PER_DAY;
use crate::diagnostics::{Diagnostics, Fallback};
use crate::error::{Result, ValidationError};
use crate::schedule::Weekday;
use crate::scheduler::GeneratorConfig;

/// Declared cognitive preference used to bias course ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Reading,
    Kinesthetic,
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 4] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Reading,
        LearningStyle::Kinesthetic,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "visual" => Some(LearningStyle::Visual),
            "auditory" => Some(LearningStyle::Auditory),
            "reading" => Some(LearningStyle::Reading),
            "kinesthetic" => Some(LearningStyle::Kinesthetic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Reading => "reading",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Casual spreads courses once; focused repeats the prioritized half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingStyle {
    #[default]
    Casual,
    Focused,
}

impl SchedulingStyle {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "casual" => Some(SchedulingStyle::Casual),
            "focused" => Some(SchedulingStyle::Focused),
            _ => None,
        }
    }
}

/// Time of day the user prefers to start studying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl PreferredTime {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "morning" => Some(PreferredTime::Morning),
            "afternoon" => Some(PreferredTime::Afternoon),
            "evening" => Some(PreferredTime::Evening),
            "night" => Some(PreferredTime::Night),
            _ => None,
        }
    }

    /// First session start hour (24h clock).
    pub fn start_hour(&self) -> u32 {
        match self {
            PreferredTime::Morning => 8,
            PreferredTime::Afternoon => 13,
            PreferredTime::Evening => 18,
            PreferredTime::Night => 21,
        }
    }
}

/// A minutes field that may arrive as `"45"` or `45`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinutesInput {
    Number(serde_json::Number),
    Text(String),
}

impl MinutesInput {
    fn parse(&self) -> Option<u32> {
        match self {
            MinutesInput::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            MinutesInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for MinutesInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinutesInput::Number(n) => write!(f, "{n}"),
            MinutesInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for MinutesInput {
    fn from(value: u32) -> Self {
        MinutesInput::Number(value.into())
    }
}

impl From<&str> for MinutesInput {
    fn from(value: &str) -> Self {
        MinutesInput::Text(value.to_string())
    }
}

/// Onboarding record as stored by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub learning_style: Option<String>,
    #[serde(default)]
    pub scheduling_style: Option<String>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub custom_courses: CustomCourses,
    #[serde(default)]
    pub available_days: Vec<String>,
    #[serde(default)]
    pub study_duration: Option<MinutesInput>,
    #[serde(default)]
    pub break_frequency: Option<MinutesInput>,
}

/// Preferences with every field typed and defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPreferences {
    pub learning_style: Option<LearningStyle>,
    pub scheduling_style: SchedulingStyle,
    pub preferred_time: Option<PreferredTime>,
    pub start_hour: u32,
    pub subjects: Vec<String>,
    pub courses: Vec<String>,
    pub custom_courses: CustomCourses,
    pub available_days: Vec<Weekday>,
    pub session_minutes: u32,
    pub break_minutes: u32,
}

impl ResolvedPreferences {
    /// Every field at its default, as if resolved from an empty record.
    pub fn defaults() -> Self {
        UserPreferences::default()
            .resolve(&GeneratorConfig::default())
            .0
    }
}

impl UserPreferences {
    /// Parse a JSON onboarding record.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a JSON object or a field has
    /// the wrong shape. Unrecognized values are not errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// See [`UserPreferences::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            ValidationError::MalformedPreferences("expected a JSON object".into())
        })?;

        for field in ["subjects", "courses", "availableDays"] {
            if let Some(v) = obj.get(field) {
                if !v.is_array() {
                    return Err(ValidationError::InvalidValue {
                        field: field.into(),
                        message: "expected a list of strings".into(),
                    }
                    .into());
                }
            }
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Resolve to typed preferences, recording every fallback taken.
    pub fn resolve(&self, config: &GeneratorConfig) -> (ResolvedPreferences, Diagnostics) {
        let mut diags = Diagnostics::new();

        let learning_style = self.learning_style.as_deref().and_then(|raw| {
            let parsed = LearningStyle::parse(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                diags.record(Fallback::UnknownLearningStyle { value: raw.into() });
            }
            parsed
        });

        let scheduling_style = match self.scheduling_style.as_deref() {
            Some(raw) => SchedulingStyle::parse(raw).unwrap_or_else(|| {
                if !raw.trim().is_empty() {
                    diags.record(Fallback::UnknownSchedulingStyle { value: raw.into() });
                }
                SchedulingStyle::default()
            }),
            None => SchedulingStyle::default(),
        };

        let preferred_time = self.preferred_time.as_deref().and_then(PreferredTime::parse);
        let start_hour = match preferred_time {
            Some(time) => time.start_hour(),
            None => {
                let fallback = config.default_start_hour % 24;
                if let Some(raw) = &self.preferred_time {
                    diags.record(Fallback::UnknownPreferredTime {
                        value: raw.clone(),
                        start_hour: fallback,
                    });
                }
                fallback
            }
        };

        let mut available_days = Vec::with_capacity(self.available_days.len());
        for raw in &self.available_days {
            match Weekday::parse(raw) {
                Some(day) if available_days.contains(&day) => {
                    diags.record(Fallback::DuplicateWeekday { value: raw.clone() });
                }
                Some(day) => available_days.push(day),
                None => diags.record(Fallback::UnknownWeekday { value: raw.clone() }),
            }
        }

        let session_minutes = resolve_minutes(
            "studyDuration",
            self.study_duration.as_ref(),
            config.default_study_minutes,
            false,
            &mut diags,
        );
        let break_minutes = resolve_minutes(
            "breakFrequency",
            self.break_frequency.as_ref(),
            config.default_break_minutes,
            true,
            &mut diags,
        );

        let resolved = ResolvedPreferences {
            learning_style,
            scheduling_style,
            preferred_time,
            start_hour,
            subjects: self.subjects.clone(),
            courses: self.courses.clone(),
            custom_courses: self.custom_courses.clone(),
            available_days,
            session_minutes,
            break_minutes,
        };

        (resolved, diags)
    }
}

fn resolve_minutes(
    field: &str,
    input: Option<&MinutesInput>,
    fallback: u32,
    allow_zero: bool,
    diags: &mut Diagnostics,
) -> u32 {
    let Some(input) = input else {
        return fallback;
    };

    match input.parse() {
        Some(0) if !allow_zero => {}
        Some(minutes) if minutes > MINUTES_PER_DAY => {}
        Some(minutes) => return minutes,
        None => {}
    }

    diags.record(Fallback::InvalidMinutes {
        field: field.into(),
        value: input.to_string(),
        fallback,
    });
    fallback
}
