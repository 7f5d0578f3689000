//! Progress persistence.
//!
//! The [`ProgressStore`] adapter keeps the completed set on disk and is
//! subscribed to the tracker as a [`StateObserver`](crate::tracker::StateObserver).

pub mod store;

pub use store::ProgressStore;
