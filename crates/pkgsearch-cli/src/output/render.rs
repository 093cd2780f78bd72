//! Package rendering as text blocks or a JSON array.
//!
//! The mode is chosen once per run. Text blocks are written as records
//! arrive; JSON objects are collected and serialized in one piece by
//! [`Renderer::finish`].

use std::io::Write;

use pkgsearch_core::error::{SearchError, SearchResult};
use pkgsearch_core::{PackageRecord, RunOptions};
use serde::Serialize;

use super::colors::ColorSupport;

/// Output format for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_options(options: &RunOptions) -> Self {
        if options.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

/// JSON shape of a matched package; absent fields become empty strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonPackage {
    pub repo: String,
    pub href: String,
    pub description: String,
    pub category: String,
}

impl From<&PackageRecord> for JsonPackage {
    fn from(pkg: &PackageRecord) -> Self {
        Self {
            repo: pkg.repo_or_empty().to_string(),
            href: pkg.href_or_empty().to_string(),
            description: pkg.description_or_empty().to_string(),
            category: pkg.category_or_empty().to_string(),
        }
    }
}

/// Streams matched packages to a writer
pub struct Renderer<W: Write> {
    out: W,
    mode: OutputMode,
    colors: ColorSupport,
    collected: Vec<JsonPackage>,
    count: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, mode: OutputMode, colors: ColorSupport) -> Self {
        Self {
            out,
            mode,
            colors,
            collected: Vec::new(),
            count: 0,
        }
    }

    /// Write anything that precedes the first package
    pub fn begin(&mut self) -> SearchResult<()> {
        match self.mode {
            OutputMode::Text => writeln!(self.out).map_err(write_error),
            OutputMode::Json => Ok(()),
        }
    }

    /// Render one matched package
    pub fn push(&mut self, pkg: &PackageRecord) -> SearchResult<()> {
        self.count += 1;
        match self.mode {
            OutputMode::Text => self.write_block(pkg),
            OutputMode::Json => {
                self.collected.push(JsonPackage::from(pkg));
                Ok(())
            }
        }
    }

    /// Flush the JSON array, if any, and return the number of packages rendered
    pub fn finish(mut self) -> SearchResult<usize> {
        if self.mode == OutputMode::Json {
            serde_json::to_writer_pretty(&mut self.out, &self.collected)
                .map_err(|e| write_error(e.into()))?;
            writeln!(self.out).map_err(write_error)?;
        }
        self.out.flush().map_err(write_error)?;
        Ok(self.count)
    }

    fn write_block(&mut self, pkg: &PackageRecord) -> SearchResult<()> {
        let colors = self.colors;
        write!(
            self.out,
            "  {}\n  url: {}\n  desc: {}\n\n",
            colors.cyan(pkg.repo_or_empty()),
            colors.gray(pkg.href_or_empty()),
            colors.gray(pkg.description_or_empty()),
        )
        .map_err(write_error)
    }
}

fn write_error(e: std::io::Error) -> SearchError {
    SearchError::io("Failed to write output".to_string(), e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: OutputMode, packages: &[PackageRecord]) -> (String, usize) {
        let mut out = Vec::new();
        let mut renderer = Renderer::new(&mut out, mode, ColorSupport::disabled());
        renderer.begin().unwrap();
        for pkg in packages {
            renderer.push(pkg).unwrap();
        }
        let count = renderer.finish().unwrap();
        (String::from_utf8(out).unwrap(), count)
    }

    #[test]
    fn test_mode_from_options() {
        let mut options = RunOptions::default();
        assert_eq!(OutputMode::from_options(&options), OutputMode::Text);
        options.json = true;
        assert_eq!(OutputMode::from_options(&options), OutputMode::Json);
    }

    #[test]
    fn test_text_blocks() {
        let packages = vec![
            PackageRecord::new("foo/bar", "https://x/bar", "A bar tool", "tools"),
            PackageRecord::new("foo/baz", "https://x/baz", "", "tools"),
        ];
        let (text, count) = render(OutputMode::Text, &packages);

        assert_eq!(count, 2);
        assert_eq!(
            text,
            "\n  foo/bar\n  url: https://x/bar\n  desc: A bar tool\n\n  foo/baz\n  url: https://x/baz\n  desc: \n\n"
        );
    }

    #[test]
    fn test_text_no_matches_is_blank_line() {
        let (text, count) = render(OutputMode::Text, &[]);
        assert_eq!(count, 0);
        assert_eq!(text, "\n");
    }

    #[test]
    fn test_text_colors() {
        let mut out = Vec::new();
        let mut renderer = Renderer::new(&mut out, OutputMode::Text, ColorSupport::enabled());
        renderer
            .push(&PackageRecord::new("foo/bar", "https://x/bar", "A bar tool", "tools"))
            .unwrap();
        renderer.finish().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("  \x1b[36mfoo/bar\x1b[0m\n"));
        assert!(text.contains("  url: \x1b[90mhttps://x/bar\x1b[0m\n"));
    }

    #[test]
    fn test_json_zero_matches() {
        let (json, count) = render(OutputMode::Json, &[]);
        assert_eq!(count, 0);
        assert_eq!(json, "[]\n");
    }

    #[test]
    fn test_json_keeps_original_values() {
        let packages = vec![PackageRecord::new(
            "Foo/Bar",
            "https://X/Bar",
            "A BAR tool",
            "Tools",
        )];
        let (json, _) = render(OutputMode::Json, &packages);

        assert!(json.ends_with("]\n"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "repo": "Foo/Bar",
                "href": "https://X/Bar",
                "description": "A BAR tool",
                "category": "Tools"
            }])
        );
    }

    #[test]
    fn test_json_absent_fields_are_empty_strings() {
        let pkg = PackageRecord {
            repo: Some("foo/bar".to_string()),
            ..Default::default()
        };
        let (json, _) = render(OutputMode::Json, &[pkg]);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "repo": "foo/bar",
                "href": "",
                "description": "",
                "category": ""
            }])
        );
    }

    #[test]
    fn test_json_is_pretty_printed_in_order() {
        let packages = vec![
            PackageRecord::new("b/two", "u2", "d2", "c"),
            PackageRecord::new("a/one", "u1", "d1", "c"),
        ];
        let (json, count) = render(OutputMode::Json, &packages);

        assert_eq!(count, 2);
        assert!(json.starts_with("[\n  {\n    \"repo\": \"b/two\""));
        assert!(json.find("b/two").unwrap() < json.find("a/one").unwrap());
    }
}
