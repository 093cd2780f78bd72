//! Per-run options.

/// Options fixed once from the parsed command line and passed by reference
/// into the registry client, matcher and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Colorize text output
    pub color: bool,
    /// Read the search cache before fetching
    pub use_cache: bool,
    /// Emit a JSON array instead of text blocks
    pub json: bool,
}

impl RunOptions {
    /// Build options from the three command line switches
    pub fn from_flags(no_color: bool, skip_cache: bool, json: bool) -> Self {
        Self {
            color: !no_color,
            use_cache: !skip_cache,
            json,
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            color: true,
            use_cache: true,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RunOptions::default();
        assert!(opts.color);
        assert!(opts.use_cache);
        assert!(!opts.json);
    }

    #[test]
    fn test_from_flags_inverts_negative_switches() {
        let opts = RunOptions::from_flags(true, true, true);
        assert!(!opts.color);
        assert!(!opts.use_cache);
        assert!(opts.json);

        assert_eq!(RunOptions::from_flags(false, false, false), RunOptions::default());
    }
}
