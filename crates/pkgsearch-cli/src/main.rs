//! # pkgsearch-cli
//!
//! Search the package registry from the command line.
//!
//! This is the entry point for the `pkgsearch` binary. It parses the command
//! line, sets up logging, runs the search on a single-threaded runtime and
//! turns the outcome into an exit code.

use std::collections::HashMap;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use pkgsearch_core::error::{SearchError, SearchResult};
use pkgsearch_core::{QuerySpec, RunOptions};
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::CommandContext;
use output::{ColorSupport, ErrorFormatter};

/// Search the package registry
#[derive(Parser, Debug)]
#[command(
    name = "pkgsearch",
    version,
    about = "Search the package registry",
    override_usage = "pkgsearch [OPTIONS] [QUERY]..."
)]
pub struct Cli {
    /// Don't colorize output
    #[arg(short = 'n', long)]
    pub no_color: bool,

    /// Skip the search cache
    #[arg(short = 'c', long)]
    pub skip_cache: bool,

    /// Generate a serialized JSON output
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Registry listing URL
    #[arg(long, value_name = "URL")]
    pub registry: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Terms to look for in package names, descriptions and URLs
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions::from_flags(self.no_color, self.skip_cache, self.json)
    }

    fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(url) = &self.registry {
            overrides.insert("registry".to_string(), url.clone());
        }
        overrides
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    let formatter = ErrorFormatter::new(ColorSupport::for_stderr(cli.run_options().color));
    let status = report(run_cli(cli), &formatter, &mut io::stderr().lock());
    ExitCode::from(status)
}

/// Exit status for a run; a failure is reported as one line on `stderr`.
fn report<W: Write>(result: SearchResult<()>, formatter: &ErrorFormatter, stderr: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            // Nothing left to report to if stderr itself fails
            let _ = writeln!(stderr, "{}", formatter.format_error(&e));
            1
        }
    }
}

fn run_cli(cli: Cli) -> SearchResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SearchError::io("Failed to create async runtime".to_string(), e))?;

    let options = cli.run_options();
    let overrides = cli.config_overrides();
    let query = QuerySpec::new(&cli.query);

    rt.block_on(async {
        let ctx = CommandContext::new(options, overrides).await?;
        commands::search::execute(query, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pkgsearch={level},pkgsearch_core={level},pkgsearch_config={level},pkgsearch_registry={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("pkgsearch encountered an unexpected error: {}", panic_info);
        eprintln!("pkgsearch crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/pkgsearch/pkgsearch/issues");
    }));
}
