//! Terminal color support detection and formatting.
//!
//! Provides automatic color detection that respects NO_COLOR environment variable
//! and TTY detection for consistent output across different environments.

use std::env;
use std::io::{self, IsTerminal};

/// Color support detection and formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically for stdout
    pub fn detect() -> Self {
        let enabled = Self::should_use_colors(io::stdout().is_terminal());
        Self { enabled }
    }

    /// Detect color support for stdout unless the user turned colors off
    pub fn for_run(color: bool) -> Self {
        if color {
            Self::detect()
        } else {
            Self::disabled()
        }
    }

    /// Detect color support for stderr unless the user turned colors off
    pub fn for_stderr(color: bool) -> Self {
        Self {
            enabled: color && Self::should_use_colors(io::stderr().is_terminal()),
        }
    }

    /// Force enable colors
    #[cfg(test)]
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if colors should be used
    fn should_use_colors(is_terminal: bool) -> bool {
        // Respect NO_COLOR environment variable
        if env::var("NO_COLOR").is_ok() {
            return false;
        }

        is_terminal
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

impl ColorSupport {
    /// Format text in cyan (package highlight)
    pub fn cyan(&self, text: &str) -> String {
        self.paint("36", text)
    }

    /// Format text in dark gray (package details)
    pub fn gray(&self, text: &str) -> String {
        self.paint("90", text)
    }

    /// Format text in red
    pub fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }
}
