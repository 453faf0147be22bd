use colored::*;

/// Terminal styles for search output. Disabling colors flips the global
/// override, so every style renders as plain text.
pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    /// Intermediate articles along a path
    pub fn page_title(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    /// Start and goal articles
    pub fn endpoint(&self, text: &str) -> ColoredString {
        text.yellow().bold()
    }

    /// Separator between consecutive articles of a path
    pub fn link_arrow(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn url(&self, text: &str) -> ColoredString {
        text.bright_blue().underline()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn hint(&self, text: &str) -> ColoredString {
        text.italic()
    }

    pub fn step_number(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }
}
