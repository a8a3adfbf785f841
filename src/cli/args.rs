//! Command-line argument parsing for Stencil
//!
//! This module defines the CLI structure using clap derive macros: a root
//! command that works as a no-op landing page, plus the two demo
//! subcommands.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::constants;
use crate::progress::ProgressConfig;

/// Stencil - a lean CLI starter template
#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    version,
    long_version = long_version(),
    about = "A lean starter template for Rust command-line tools",
    long_about = "A lean CLI template that demonstrates how to combine clap with animated
progress rendering and interactive prompts.

Run subcommands like `stencil progress` or `stencil prompt` to explore the building blocks."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands; without one the root command prints a readiness message
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Demonstrate a styled progress bar
    Progress(ProgressArgs),

    /// Capture interactive input with a short survey form
    Prompt(PromptArgs),
}

/// Arguments for the progress command
#[derive(Args, Debug, Clone)]
pub struct ProgressArgs {
    /// Total units of simulated work
    #[arg(long, default_value_t = constants::DEFAULT_TOTAL)]
    pub total: u64,

    /// Amount added to the bar per iteration
    #[arg(long, default_value_t = constants::DEFAULT_CHUNK)]
    pub chunk: u64,

    /// Delay between progress updates (e.g. "65ms", "1s")
    #[arg(long, default_value = "65ms", value_parser = humantime::parse_duration)]
    pub delay: Duration,
}

impl ProgressArgs {
    /// Build the run configuration from the parsed flags
    pub fn config(&self) -> ProgressConfig {
        ProgressConfig {
            total: self.total,
            chunk: self.chunk,
            delay: self.delay,
        }
    }
}

/// Arguments for the prompt command
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    /// Render the form with accessible line-based prompts instead of TUI output
    #[arg(long)]
    pub accessible: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }
}

/// Long version string including the injected build commit
fn long_version() -> &'static str {
    Box::leak(
        format!(
            "{} (commit {})",
            env!("CARGO_PKG_VERSION"),
            constants::BUILD_COMMIT
        )
        .into_boxed_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_defaults() {
        let cli = Cli::try_parse_from(["stencil", "progress"]).unwrap();

        match cli.command {
            Some(Commands::Progress(args)) => {
                assert_eq!(args.total, 40);
                assert_eq!(args.chunk, 4);
                assert_eq!(args.delay, constants::DEFAULT_DELAY);
            }
            other => panic!("expected progress command, got {other:?}"),
        }
    }

    #[test]
    fn test_progress_flag_overrides() {
        let cli = Cli::try_parse_from([
            "stencil", "progress", "--total", "100", "--chunk", "10", "--delay", "250ms",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Progress(args)) => {
                assert_eq!(args.total, 100);
                assert_eq!(args.chunk, 10);
                assert_eq!(args.delay, Duration::from_millis(250));
                assert_eq!(args.config().total, 100);
            }
            other => panic!("expected progress command, got {other:?}"),
        }
    }

    #[test]
    fn test_prompt_accessible_flag() {
        let cli = Cli::try_parse_from(["stencil", "prompt"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Prompt(PromptArgs { accessible: false }))
        ));

        let cli = Cli::try_parse_from(["stencil", "prompt", "--accessible"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Prompt(PromptArgs { accessible: true }))
        ));
    }

    #[test]
    fn test_root_without_subcommand() {
        let cli = Cli::try_parse_from(["stencil"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_log_level_mapping() {
        let cli = Cli::try_parse_from(["stencil", "--quiet", "progress"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::ERROR);

        let cli = Cli::try_parse_from(["stencil", "--verbose", "progress"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::INFO);

        let cli = Cli::try_parse_from(["stencil", "--very-verbose", "progress"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        let cli = Cli::try_parse_from(["stencil", "progress"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_invalid_delay_rejected() {
        assert!(Cli::try_parse_from(["stencil", "progress", "--delay", "soon"]).is_err());
    }
}
