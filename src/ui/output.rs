//! Output mode and progress bar rendering.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Include course ids and credits in listings.
    Verbose,
    /// Standard listings and notices.
    #[default]
    Normal,
    /// Only warnings, errors, and data output.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode adds detail to listings.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows informational messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Width of the progress bar, in cells.
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// Render an unstyled progress bar such as `[█████░░░░░]`.
pub fn progress_bar(percent: u32) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * PROGRESS_BAR_WIDTH) / 100;
    let empty = PROGRESS_BAR_WIDTH - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("invalid".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0), format!("[{}]", "░".repeat(20)));
        assert_eq!(progress_bar(100), format!("[{}]", "█".repeat(20)));
        assert_eq!(
            progress_bar(50),
            format!("[{}{}]", "█".repeat(10), "░".repeat(10))
        );
    }

    #[test]
    fn progress_bar_clamps_overflow() {
        assert_eq!(progress_bar(250), progress_bar(100));
    }
}
