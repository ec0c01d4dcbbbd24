//! Course ordering by learning-style affinity.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::preferences::LearningStyle;

/// Course keywords each style favours, in promotion order.
pub fn style_keywords(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &["geometry", "physics", "programming"],
        LearningStyle::Auditory => &["spanish", "music", "literature"],
        LearningStyle::Reading => &["literature", "history", "writing"],
        LearningStyle::Kinesthetic => &["chemistry", "biology", "drawing"],
    }
}

/// Whether a course identifier matches any keyword of `style`.
pub fn has_affinity(course_id: &str, style: LearningStyle) -> bool {
    style_keywords(style).iter().any(|k| course_id.contains(k))
}

/// Reorder courses for a learning style, returning a new list.
///
/// With a style, each keyword in turn promotes the first course containing
/// it to the front, so the last matched keyword ends up first. Without a
/// style the list is shuffled uniformly using `rng`.
pub fn order_courses<R: Rng + ?Sized>(
    courses: &[String],
    style: Option<LearningStyle>,
    rng: &mut R,
) -> Vec<String> {
    let mut ordered = courses.to_vec();

    let Some(style) = style else {
        ordered.shuffle(rng);
        return ordered;
    };

    for keyword in style_keywords(style) {
        if let Some(pos) = ordered.iter().position(|c| c.contains(keyword)) {
            let course = ordered.remove(pos);
            ordered.insert(0, course);
        }
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;
    use std::collections::HashMap;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn visual_promotes_in_reverse_keyword_order() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let courses = ids(&["math-algebra", "cs-programming", "science-physics", "math-geometry"]);
        let ordered = order_courses(&courses, Some(LearningStyle::Visual), &mut rng);
        assert_eq!(
            ordered,
            ids(&["cs-programming", "science-physics", "math-geometry", "math-algebra"])
        );
    }

    #[test]
    fn styled_order_is_deterministic() {
        let courses = ids(&["english-grammar", "history-world", "english-literature"]);
        let a = order_courses(&courses, Some(LearningStyle::Reading), &mut Mcg128Xsl64::seed_from_u64(1));
        let b = order_courses(&courses, Some(LearningStyle::Reading), &mut Mcg128Xsl64::seed_from_u64(99));
        assert_eq!(a, b);
        assert_eq!(a, ids(&["history-world", "english-literature", "english-grammar"]));
    }

    #[test]
    fn only_first_match_is_promoted() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let courses = ids(&["math-algebra", "science-chemistry", "lab-chemistry"]);
        let ordered = order_courses(&courses, Some(LearningStyle::Kinesthetic), &mut rng);
        assert_eq!(ordered, ids(&["science-chemistry", "math-algebra", "lab-chemistry"]));
    }

    #[test]
    fn unmatched_keywords_leave_order_alone() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let courses = ids(&["math-algebra", "history-us"]);
        let ordered = order_courses(&courses, Some(LearningStyle::Visual), &mut rng);
        assert_eq!(ordered, courses);
    }

    #[test]
    fn input_is_not_mutated() {
        let courses = ids(&["a", "b", "c"]);
        let snapshot = courses.clone();
        let _ = order_courses(&courses, None, &mut Mcg128Xsl64::seed_from_u64(3));
        assert_eq!(courses, snapshot);
    }

    #[test]
    fn shuffle_is_reproducible_with_seed() {
        let courses = ids(&["a", "b", "c", "d", "e"]);
        let a = order_courses(&courses, None, &mut Mcg128Xsl64::seed_from_u64(42));
        let b = order_courses(&courses, None, &mut Mcg128Xsl64::seed_from_u64(42));
        assert_eq!(a, b);
        let mut sorted = a.clone();
        sorted.sort();
        assert_eq!(sorted, courses);
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        let courses = ids(&["a", "b", "c"]);
        let mut rng = Mcg128Xsl64::seed_from_u64(7);
        let trials = 6000;
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(order_courses(&courses, None, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "every permutation should appear");
        let expected = trials / 6;
        for (perm, count) in counts {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "permutation {perm:?} seen {count} times, expected about {expected}"
            );
        }
    }
}
