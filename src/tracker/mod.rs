//! The tracker: single owner of the completed set.
//!
//! Every mutation goes through the [`PrerequisiteGate`] transition and is then
//! announced to subscribed [`StateObserver`]s (for example the on-disk
//! [`ProgressStore`](crate::state::ProgressStore)). There is no global state:
//! each tracker instance carries its own curriculum and completed set.
//!
//! # Example
//!
//! ```
//! use malla::curriculum::{Course, Curriculum};
//! use malla::gate::{CompletedSet, CourseStatus};
//! use malla::tracker::Tracker;
//!
//! let curriculum = Curriculum::new(vec![
//!     Course::new("a", "S1"),
//!     Course::new("b", "S2").with_prerequisites(["a"]),
//! ]);
//! let mut tracker = Tracker::new(curriculum, CompletedSet::new());
//!
//! assert!(tracker.toggle("b").is_err());
//! tracker.toggle("a").unwrap();
//! assert_eq!(tracker.status("b"), CourseStatus::Available);
//! ```

pub mod observer;

pub use observer::{ChangeKind, RecordingObserver, StateChange, StateObserver};

use chrono::NaiveDate;

use crate::curriculum::{Course, Curriculum};
use crate::error::{MallaError, Result};
use crate::exchange::{parse_import, ExportDocument};
use crate::gate::{CompletedSet, CourseStatus, PrerequisiteGate};
use crate::progress::{available_courses, course_reports, CourseReport, Statistics};

/// Result of a successful toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Course id.
    pub course: String,
    /// Display name.
    pub name: String,
    /// Whether the course is now completed.
    pub completed: bool,
}

impl ToggleOutcome {
    /// User-facing notice for this toggle.
    pub fn notice(&self) -> String {
        if self.completed {
            format!("{} passed!", self.name)
        } else {
            format!("{} marked as not passed", self.name)
        }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of ids in the new set.
    pub imported: usize,
    /// Imported ids that the curriculum does not define.
    pub unknown: Vec<String>,
}

/// Controller owning the curriculum, the completed set, and its subscribers.
pub struct Tracker {
    curriculum: Curriculum,
    completed: CompletedSet,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("courses", &self.curriculum.len())
            .field("completed", &self.completed)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Tracker {
    /// Create a tracker with an initial completed set.
    pub fn new(curriculum: Curriculum, completed: CompletedSet) -> Self {
        Self {
            curriculum,
            completed,
            observers: Vec::new(),
        }
    }

    /// Subscribe an observer to future changes.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// The static curriculum.
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    /// The current completed set.
    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    /// Gate view over the current state.
    pub fn gate(&self) -> PrerequisiteGate<'_> {
        PrerequisiteGate::new(&self.curriculum, &self.completed)
    }

    /// Whether the course is marked passed.
    pub fn is_completed(&self, course_id: &str) -> bool {
        self.gate().is_completed(course_id)
    }

    /// Whether the course has an unmet prerequisite and is not passed.
    pub fn is_locked(&self, course_id: &str) -> bool {
        self.gate().is_locked(course_id)
    }

    /// Derived status of a course.
    pub fn status(&self, course_id: &str) -> CourseStatus {
        self.gate().status(course_id)
    }

    /// Unmet prerequisites of a course, in declared order.
    pub fn missing_prerequisites(&self, course_id: &str) -> Vec<String> {
        self.gate().missing_prerequisites(course_id)
    }

    /// Look up a course, failing for ids the curriculum does not define.
    pub fn require_course(&self, course_id: &str) -> Result<&Course> {
        self.curriculum
            .course(course_id)
            .ok_or_else(|| MallaError::UnknownCourse {
                id: course_id.to_string(),
            })
    }

    /// Flip a course between passed and not passed.
    ///
    /// # Errors
    ///
    /// - `UnknownCourse` if the id is not in the curriculum
    /// - `Blocked` if the course is locked; the set is unchanged and no
    ///   observer is notified
    /// - any error raised by an observer while persisting
    pub fn toggle(&mut self, course_id: &str) -> Result<ToggleOutcome> {
        let name = self.require_course(course_id)?.name.clone();

        let next = self.gate().toggle(course_id).map_err(|blocked| {
            tracing::debug!("Toggle rejected: {}", blocked);
            MallaError::from(blocked)
        })?;
        self.completed = next;

        let completed = self.completed.contains(course_id);
        tracing::info!(
            course = course_id,
            completed,
            "Course {}",
            if completed { "passed" } else { "unpassed" }
        );

        self.notify(ChangeKind::Toggled {
            course: course_id.to_string(),
            completed,
        })?;

        Ok(ToggleOutcome {
            course: course_id.to_string(),
            name,
            completed,
        })
    }

    /// Clear every completed course. Returns how many were cleared.
    pub fn reset(&mut self) -> Result<usize> {
        let cleared = self.completed.len();
        self.completed.clear();
        tracing::info!("Progress reset ({} courses cleared)", cleared);

        self.notify(ChangeKind::Reset)?;
        Ok(cleared)
    }

    /// Replace the completed set with the ids from an import payload.
    ///
    /// Ids the curriculum does not define are kept and reported back.
    ///
    /// # Errors
    ///
    /// Returns `ImportParseError` for unusable payloads; the set is unchanged.
    pub fn import(&mut self, payload: &str) -> Result<ImportSummary> {
        let imported = parse_import(payload)?;

        let unknown: Vec<String> = imported
            .iter()
            .filter(|id| !self.curriculum.contains(id))
            .map(String::from)
            .collect();
        if !unknown.is_empty() {
            tracing::warn!(
                "Imported {} ids not in the curriculum: {}",
                unknown.len(),
                unknown.join(", ")
            );
        }

        self.completed = imported;
        let count = self.completed.len();
        tracing::info!("Imported {} completed courses", count);

        self.notify(ChangeKind::Imported { count })?;

        Ok(ImportSummary {
            imported: count,
            unknown,
        })
    }

    /// Export document for the current state.
    pub fn export(&self, date: NaiveDate) -> ExportDocument {
        ExportDocument::build(&self.curriculum, &self.completed, date)
    }

    /// Overall and per-semester statistics.
    pub fn statistics(&self) -> Statistics {
        Statistics::compute(&self.curriculum, &self.completed)
    }

    /// Courses that can be taken now, in declared order.
    pub fn available_courses(&self) -> Vec<&Course> {
        available_courses(&self.curriculum, &self.completed)
    }

    /// Status report for every course.
    pub fn reports(&self) -> Vec<CourseReport> {
        course_reports(&self.curriculum, &self.completed)
    }

    fn notify(&mut self, kind: ChangeKind) -> Result<()> {
        let change = StateChange {
            kind: &kind,
            completed: &self.completed,
        };
        for observer in &mut self.observers {
            observer.on_change(&change)?;
        }
        Ok(())
    }
}
