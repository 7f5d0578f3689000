//! Visual theme and styling.

use console::Style;

use crate::gate::CourseStatus;
use crate::progress::ProgressTier;

/// Malla's visual theme.
#[derive(Debug, Clone)]
pub struct MallaTheme {
    /// Style for success messages and completed courses (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for available courses (cyan).
    pub available: Style,
    /// Style for locked courses (dim).
    pub locked: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for semester titles (bold underline).
    pub semester: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
}

impl Default for MallaTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MallaTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            available: Style::new().cyan(),
            locked: Style::new().dim(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            semester: Style::new().bold().underlined(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            available: Style::new(),
            locked: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            semester: Style::new(),
            hint: Style::new(),
        }
    }

    /// Style for a course status.
    pub fn status_style(&self, status: CourseStatus) -> &Style {
        match status {
            CourseStatus::Completed => &self.success,
            CourseStatus::Available => &self.available,
            CourseStatus::Locked => &self.locked,
        }
    }

    /// Style for a progress tier: red below 30%, orange below 70%, green above.
    pub fn tier_style(&self, tier: ProgressTier) -> &Style {
        match tier {
            ProgressTier::Low => &self.error,
            ProgressTier::Medium => &self.warning,
            ProgressTier::High => &self.success,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▦"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
