//! Static course catalog and identifier resolution.
//!
//! Course identifiers are `"{subject}-{course}"` composites. The catalog is
//! the single lookup table shared by the distributor, the optimization
//! passes and any display layer.

use std::collections::HashMap;

use serde::Serialize;

/// Bumped whenever a label or course id changes.
pub const CATALOG_VERSION: u32 = 1;

/// Sentinel course id for user-entered courses.
pub const CUSTOM_COURSE_ID: &str = "other";

const SEPARATOR: char = '-';

/// One course entry within a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CourseEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// A subject and its courses.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Subject {
    pub id: &'static str,
    pub label: &'static str,
    pub courses: &'static [CourseEntry],
}

const fn course(id: &'static str, label: &'static str) -> CourseEntry {
    CourseEntry { id, label }
}

static SUBJECTS: &[Subject] = &[
    Subject {
        id: "math",
        label: "Mathematics",
        courses: &[
            course("algebra", "Algebra"),
            course("geometry", "Geometry"),
            course("trigonometry", "Trigonometry"),
            course("calculus", "Calculus"),
            course("statistics", "Statistics"),
        ],
    },
    Subject {
        id: "science",
        label: "Science",
        courses: &[
            course("physics", "Physics"),
            course("chemistry", "Chemistry"),
            course("biology", "Biology"),
            course("astronomy", "Astronomy"),
        ],
    },
    Subject {
        id: "english",
        label: "English",
        courses: &[
            course("literature", "Literature"),
            course("grammar", "Grammar"),
            course("writing", "Creative Writing"),
            course("reading", "Reading Comprehension"),
        ],
    },
    Subject {
        id: "history",
        label: "History",
        courses: &[
            course("world", "World History"),
            course("us", "US History"),
            course("european", "European History"),
            course("ancient", "Ancient Civilizations"),
        ],
    },
    Subject {
        id: "cs",
        label: "Computer Science",
        courses: &[
            course("programming", "Programming"),
            course("algorithms", "Algorithms"),
            course("databases", "Databases"),
            course("webdev", "Web Development"),
        ],
    },
    Subject {
        id: "languages",
        label: "Languages",
        courses: &[
            course("spanish", "Spanish"),
            course("french", "French"),
            course("german", "German"),
            course("mandarin", "Mandarin"),
        ],
    },
    Subject {
        id: "art",
        label: "Arts",
        courses: &[
            course("drawing", "Drawing"),
            course("painting", "Painting"),
            course("music", "Music Theory"),
            course("design", "Graphic Design"),
        ],
    },
];

/// Custom course names keyed by subject id.
pub type CustomCourses = HashMap<String, String>;

/// Read-only view over the static catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    pub fn version(&self) -> u32 {
        CATALOG_VERSION
    }

    pub fn subjects(&self) -> &'static [Subject] {
        SUBJECTS
    }

    pub fn subject(&self, subject_id: &str) -> Option<&'static Subject> {
        SUBJECTS.iter().find(|s| s.id == subject_id)
    }

    pub fn courses(&self, subject_id: &str) -> &'static [CourseEntry] {
        self.subject(subject_id).map(|s| s.courses).unwrap_or(&[])
    }

    /// Resolve an identifier to its display name, if it names anything.
    ///
    /// Returns `None` when the identifier has no separator, names an unknown
    /// subject/course, or is `{subject}-other` without a custom name.
    pub fn lookup(&self, identifier: &str, custom: &CustomCourses) -> Option<String> {
        let (subject_id, course_id) = identifier.split_once(SEPARATOR)?;

        if course_id == CUSTOM_COURSE_ID {
            if let Some(name) = custom.get(subject_id) {
                return Some(name.clone());
            }
        }

        self.courses(subject_id)
            .iter()
            .find(|c| c.id == course_id)
            .map(|c| c.label.to_string())
    }

    /// Resolve an identifier to its display name, falling back to the raw
    /// identifier when nothing matches.
    pub fn resolve(&self, identifier: &str, custom: &CustomCourses) -> String {
        self.lookup(identifier, custom)
            .unwrap_or_else(|| identifier.to_string())
    }

    /// All composite identifiers in catalog order.
    pub fn identifiers(&self) -> Vec<String> {
        SUBJECTS
            .iter()
            .flat_map(|s| s.courses.iter().map(move |c| format!("{}-{}", s.id, c.id)))
            .collect()
    }
}
