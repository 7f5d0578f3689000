//! Change notifications for tracker subscribers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::gate::CompletedSet;

/// What kind of mutation just happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// A single course changed membership.
    Toggled {
        /// Course id.
        course: String,
        /// Whether the course is now completed.
        completed: bool,
    },
    /// Every course was cleared.
    Reset,
    /// The set was replaced by an import.
    Imported {
        /// Number of ids in the new set.
        count: usize,
    },
}

/// A mutation together with the resulting set.
#[derive(Debug, Clone, Copy)]
pub struct StateChange<'a> {
    /// The mutation.
    pub kind: &'a ChangeKind,
    /// The completed set after the mutation.
    pub completed: &'a CompletedSet,
}

/// Subscriber to tracker state changes.
///
/// Persistence adapters implement this so the tracker's transitions stay free
/// of storage concerns.
pub trait StateObserver {
    /// Called after every successful mutation.
    fn on_change(&mut self, change: &StateChange<'_>) -> Result<()>;
}

/// Observer that records every change, for tests.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    changes: Rc<RefCell<Vec<(ChangeKind, CompletedSet)>>>,
}

impl RecordingObserver {
    /// Create a recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same change log.
    ///
    /// The tracker takes ownership of its observers; keep a handle to inspect
    /// what it was sent.
    pub fn handle(&self) -> Self {
        Self {
            changes: Rc::clone(&self.changes),
        }
    }

    /// Changes received so far.
    pub fn changes(&self) -> Vec<(ChangeKind, CompletedSet)> {
        self.changes.borrow().clone()
    }
}

impl StateObserver for RecordingObserver {
    fn on_change(&mut self, change: &StateChange<'_>) -> Result<()> {
        self.changes
            .borrow_mut()
            .push((change.kind.clone(), change.completed.clone()));
        Ok(())
    }
}
