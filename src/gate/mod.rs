//! Prerequisite gating.
//!
//! A course is satisfied when every one of its *direct* prerequisites is in
//! the [`CompletedSet`]. The check is a single shallow pass: whether a
//! prerequisite is itself locked does not matter, only whether it is passed.
//! Because lock state never depends on other courses' lock state, cycles in
//! the prerequisite mapping need no special handling here.
//!
//! # Example
//!
//! ```
//! use malla::curriculum::{Course, Curriculum};
//! use malla::gate::{CompletedSet, CourseStatus, PrerequisiteGate};
//!
//! let curriculum = Curriculum::new(vec![
//!     Course::new("a", "S1"),
//!     Course::new("b", "S2").with_prerequisites(["a"]),
//! ]);
//! let completed = CompletedSet::new();
//! let gate = PrerequisiteGate::new(&curriculum, &completed);
//! assert_eq!(gate.status("b"), CourseStatus::Locked);
//!
//! let completed = gate.toggle("a").unwrap();
//! let gate = PrerequisiteGate::new(&curriculum, &completed);
//! assert_eq!(gate.status("b"), CourseStatus::Available);
//! ```

pub mod completed;
pub mod status;

pub use completed::CompletedSet;
pub use status::CourseStatus;

use thiserror::Error;

use crate::curriculum::Curriculum;

/// A toggle was rejected because the course is locked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Course '{course}' is locked; missing prerequisites: {}", .missing.join(", "))]
pub struct Blocked {
    /// The course that could not be toggled.
    pub course: String,
    /// Its unmet prerequisites, in declared order.
    pub missing: Vec<String>,
}

/// Read-only view combining the prerequisite mapping with a completed set.
#[derive(Debug, Clone, Copy)]
pub struct PrerequisiteGate<'a> {
    curriculum: &'a Curriculum,
    completed: &'a CompletedSet,
}

impl<'a> PrerequisiteGate<'a> {
    /// Create a gate over a curriculum and a completed set.
    pub fn new(curriculum: &'a Curriculum, completed: &'a CompletedSet) -> Self {
        Self {
            curriculum,
            completed,
        }
    }

    /// True iff the course is in the completed set.
    pub fn is_completed(&self, course_id: &str) -> bool {
        self.completed.contains(course_id)
    }

    /// True iff the course has an unmet prerequisite and is not itself completed.
    ///
    /// Completion wins even when the set is inconsistent (for example after an
    /// import that marked a course passed without its prerequisites).
    pub fn is_locked(&self, course_id: &str) -> bool {
        if self.is_completed(course_id) {
            return false;
        }

        self.curriculum
            .prerequisites(course_id)
            .iter()
            .any(|p| !self.completed.contains(p))
    }

    /// Derived status of a course.
    pub fn status(&self, course_id: &str) -> CourseStatus {
        if self.is_completed(course_id) {
            CourseStatus::Completed
        } else if self.is_locked(course_id) {
            CourseStatus::Locked
        } else {
            CourseStatus::Available
        }
    }

    /// Prerequisites of the course not in the completed set, in declared order.
    pub fn missing_prerequisites(&self, course_id: &str) -> Vec<String> {
        self.curriculum
            .prerequisites(course_id)
            .iter()
            .filter(|p| !self.completed.contains(p))
            .cloned()
            .collect()
    }

    /// Flip membership of a course, returning the new set.
    ///
    /// The current set is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Blocked`] if the course is locked.
    pub fn toggle(&self, course_id: &str) -> Result<CompletedSet, Blocked> {
        if self.is_locked(course_id) {
            return Err(Blocked {
                course: course_id.to_string(),
                missing: self.missing_prerequisites(course_id),
            });
        }

        Ok(self.completed.toggled(course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::Course;

    fn curriculum() -> Curriculum {
        Curriculum::new(vec![
            Course::new("a", "S1"),
            Course::new("b", "S1"),
            Course::new("c", "S2").with_prerequisites(["a", "b"]),
        ])
    }

    fn set(ids: &[&str]) -> CompletedSet {
        ids.iter().copied().collect()
    }

    #[test]
    fn course_without_prerequisites_is_never_locked() {
        let curriculum = curriculum();
        for completed in [set(&[]), set(&["b"]), set(&["a", "b", "c"])] {
            let gate = PrerequisiteGate::new(&curriculum, &completed);
            assert_ne!(gate.status("a"), CourseStatus::Locked);
        }
    }

    #[test]
    fn completion_overrides_unmet_prerequisites() {
        let curriculum = curriculum();
        let completed = set(&["c"]);
        let gate = PrerequisiteGate::new(&curriculum, &completed);

        assert!(!gate.is_locked("c"));
        assert_eq!(gate.status("c"), CourseStatus::Completed);
        // Still reported, for diagnostics.
        assert_eq!(gate.missing_prerequisites("c"), vec!["a", "b"]);
    }

    #[test]
    fn missing_prerequisites_keep_declared_order() {
        let curriculum = curriculum();
        let completed = set(&["a"]);
        let gate = PrerequisiteGate::new(&curriculum, &completed);
        assert_eq!(gate.missing_prerequisites("c"), vec!["b"]);
    }

    #[test]
    fn toggle_locked_is_blocked_and_set_unchanged() {
        let curriculum = curriculum();
        let completed = set(&["a"]);
        let gate = PrerequisiteGate::new(&curriculum, &completed);

        let err = gate.toggle("c").unwrap_err();
        assert_eq!(err.course, "c");
        assert_eq!(err.missing, vec!["b"]);
        assert_eq!(completed, set(&["a"]));
    }

    #[test]
    fn double_toggle_restores_set() {
        let curriculum = curriculum();
        let original = set(&["b"]);

        let once = PrerequisiteGate::new(&curriculum, &original)
            .toggle("a")
            .unwrap();
        let twice = PrerequisiteGate::new(&curriculum, &once)
            .toggle("a")
            .unwrap();

        assert_eq!(twice, original);
    }

    #[test]
    fn unknown_course_behaves_as_unconstrained() {
        let curriculum = curriculum();
        let completed = set(&[]);
        let gate = PrerequisiteGate::new(&curriculum, &completed);

        assert_eq!(gate.status("zzz"), CourseStatus::Available);
        assert!(gate.toggle("zzz").unwrap().contains("zzz"));
    }

    #[test]
    fn shallow_check_ignores_prerequisite_lock_state() {
        // b requires a, c requires b. Marking b passed unlocks c even though
        // b's own prerequisite is unmet.
        let curriculum = Curriculum::new(vec![
            Course::new("a", "S1"),
            Course::new("b", "S2").with_prerequisites(["a"]),
            Course::new("c", "S3").with_prerequisites(["b"]),
        ]);
        let completed = set(&["b"]);
        let gate = PrerequisiteGate::new(&curriculum, &completed);
        assert_eq!(gate.status("c"), CourseStatus::Available);
    }

    #[test]
    fn blocked_message_lists_missing() {
        let err = Blocked {
            course: "c".into(),
            missing: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            err.to_string(),
            "Course 'c' is locked; missing prerequisites: a, b"
        );
    }
}
