//! Completion statistics.

use serde::Serialize;

use crate::curriculum::Curriculum;
use crate::gate::CompletedSet;

/// Rounded completion percentage; 0 when there is nothing to complete.
pub fn completion_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Coarse progress band, used to colour progress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressTier {
    /// Below 30%.
    Low,
    /// 30% up to 69%.
    Medium,
    /// 70% and above.
    High,
}

impl ProgressTier {
    /// Band for a percentage.
    pub fn from_percent(percent: u32) -> Self {
        if percent < 30 {
            Self::Low
        } else if percent < 70 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Progress within one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemesterProgress {
    pub name: String,
    pub total: usize,
    pub completed: usize,
    pub percent: u32,
}

/// Overall and per-semester progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_courses: usize,
    /// Size of the completed set, including ids the curriculum does not define.
    pub completed_count: usize,
    pub completion_percent: u32,
    pub total_credits: u32,
    pub completed_credits: u32,
    pub tier: ProgressTier,
    pub semesters: Vec<SemesterProgress>,
}

impl Statistics {
    /// Compute statistics for a completed set.
    pub fn compute(curriculum: &Curriculum, completed: &CompletedSet) -> Self {
        let total_courses = curriculum.len();
        let completed_count = completed.len();
        let percent = completion_percent(completed_count, total_courses);

        let completed_credits = curriculum
            .courses()
            .iter()
            .filter(|c| completed.contains(&c.id))
            .map(|c| c.credits)
            .sum();

        let semesters = curriculum
            .semesters()
            .iter()
            .map(|semester| {
                let total = semester.course_ids.len();
                let done = semester
                    .course_ids
                    .iter()
                    .filter(|id| completed.contains(id))
                    .count();
                SemesterProgress {
                    name: semester.name.clone(),
                    total,
                    completed: done,
                    percent: completion_percent(done, total),
                }
            })
            .collect();

        Self {
            total_courses,
            completed_count,
            completion_percent: percent,
            total_credits: curriculum.total_credits(),
            completed_credits,
            tier: ProgressTier::from_percent(percent),
            semesters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Course;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(1, 8), 13);
        assert_eq!(completion_percent(0, 5), 0);
        assert_eq!(completion_percent(5, 5), 100);
    }

    #[test]
    fn percent_of_empty_total_is_zero() {
        assert_eq!(completion_percent(0, 0), 0);
        assert_eq!(completion_percent(3, 0), 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(ProgressTier::from_percent(0), ProgressTier::Low);
        assert_eq!(ProgressTier::from_percent(29), ProgressTier::Low);
        assert_eq!(ProgressTier::from_percent(30), ProgressTier::Medium);
        assert_eq!(ProgressTier::from_percent(69), ProgressTier::Medium);
        assert_eq!(ProgressTier::from_percent(70), ProgressTier::High);
    }

    #[test]
    fn compute_counts_per_semester_and_credits() {
        let curriculum = Curriculum::new(vec![
            Course::new("a", "S1").with_credits(4),
            Course::new("b", "S1").with_credits(6),
            Course::new("c", "S2").with_credits(5),
        ]);
        let completed: CompletedSet = ["a", "c"].into_iter().collect();

        let stats = Statistics::compute(&curriculum, &completed);

        assert_eq!(stats.total_courses, 3);
        assert_eq!(stats.completed_count, 2);
        assert_eq!(stats.completion_percent, 67);
        assert_eq!(stats.total_credits, 15);
        assert_eq!(stats.completed_credits, 9);
        assert_eq!(stats.tier, ProgressTier::Medium);
        assert_eq!(
            stats.semesters,
            vec![
                SemesterProgress {
                    name: "S1".into(),
                    total: 2,
                    completed: 1,
                    percent: 50
                },
                SemesterProgress {
                    name: "S2".into(),
                    total: 1,
                    completed: 1,
                    percent: 100
                },
            ]
        );
    }

    #[test]
    fn unknown_ids_count_overall_but_not_per_semester() {
        let curriculum = Curriculum::new(vec![Course::new("a", "S1")]);
        let completed: CompletedSet = ["ghost"].into_iter().collect();

        let stats = Statistics::compute(&curriculum, &completed);
        assert_eq!(stats.completed_count, 1);
        assert_eq!(stats.semesters[0].completed, 0);
        assert_eq!(stats.completed_credits, 0);
    }
}
