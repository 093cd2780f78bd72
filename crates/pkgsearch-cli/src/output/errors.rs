//! Error message formatting.
//!
//! A failed run reports exactly one line on stderr.

use pkgsearch_core::error::SearchError;

use super::colors::ColorSupport;

/// Single-line error formatter
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error as `error: <message>`
    pub fn format_error(&self, error: &SearchError) -> String {
        self.format_simple(&error.to_string())
    }

    /// Format a simple error message
    pub fn format_simple(&self, message: &str) -> String {
        let message = message.lines().collect::<Vec<_>>().join(" ");
        format!("{}: {}", self.colors.red("error"), message)
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new(ColorSupport::disabled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fetch_error() {
        let error = SearchError::Fetch {
            url: "https://x/Packages.md".to_string(),
            message: "registry returned status 404 Not Found".to_string(),
            source: None,
        };
        assert_eq!(
            ErrorFormatter::default().format_error(&error),
            "error: Failed to fetch registry https://x/Packages.md: registry returned status 404 Not Found"
        );
    }

    #[test]
    fn test_format_is_single_line() {
        let formatted = ErrorFormatter::default().format_simple("first\nsecond");
        assert_eq!(formatted, "error: first second");
        assert!(!formatted.contains('\n'));
    }
}
