//! Derived course status.

use serde::Serialize;
use std::fmt;

/// Status of a course, recomputed on every query and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Marked as passed.
    Completed,
    /// At least one direct prerequisite is not passed.
    Locked,
    /// Can be taken now.
    Available,
}

impl CourseStatus {
    /// Icon for TTY output.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Completed => "✓",
            Self::Locked => "✗",
            Self::Available => "◌",
        }
    }

    /// Bracketed symbol for plain output.
    pub fn bracketed(&self) -> &'static str {
        match self {
            Self::Completed => "[done]",
            Self::Locked => "[locked]",
            Self::Available => "[open]",
        }
    }

    /// Short explanation used in legends.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Completed => "passed",
            Self::Locked => "prerequisites missing",
            Self::Available => "can be taken",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Completed => "completed",
            Self::Locked => "locked",
            Self::Available => "available",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CourseStatus::Locked).unwrap(),
            "\"locked\""
        );
    }

    #[test]
    fn display_matches_serialized_name() {
        for status in [
            CourseStatus::Completed,
            CourseStatus::Locked,
            CourseStatus::Available,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.to_string());
        }
    }

    #[test]
    fn symbols_are_distinct() {
        assert_eq!(CourseStatus::Completed.bracketed(), "[done]");
        assert_eq!(CourseStatus::Locked.bracketed(), "[locked]");
        assert_eq!(CourseStatus::Available.bracketed(), "[open]");
    }
}
