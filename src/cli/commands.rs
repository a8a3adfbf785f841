//! Command handlers for the Stencil CLI
//!
//! Thin handlers that coordinate between parsed CLI arguments and the demo
//! flows. User-facing summaries go to stdout; the progress bar renders on
//! stderr so piped stdout stays clean.

use std::io;

use console::style;
use tracing::info;

use crate::cli::args::{ProgressArgs, PromptArgs};
use crate::errors::Result;
use crate::progress;
use crate::shutdown::ShutdownToken;
use crate::survey;

/// Handle the progress command
pub async fn handle_progress(shutdown: &ShutdownToken, args: ProgressArgs) -> Result<()> {
    info!(
        "starting progress simulation: total={} chunk={} delay={:?}",
        args.total, args.chunk, args.delay
    );

    progress::run(shutdown, Some(io::stderr()), args.config()).await?;
    Ok(())
}

/// Handle the prompt command
pub async fn handle_prompt(shutdown: &ShutdownToken, args: PromptArgs) -> Result<()> {
    // Line-based prompts when stdin is not a terminal, whatever the flag says.
    let accessible = args.accessible || !atty::is(atty::Stream::Stdin);
    if accessible && !args.accessible {
        info!("stdin is not a terminal, falling back to accessible prompts");
    }

    let result = survey::run_survey(shutdown, accessible).await?;

    println!(
        "Nice to meet you, {}! We'll remember that you enjoy working with {}.",
        result.name, result.favorite_language
    );
    Ok(())
}

/// Handle an invocation with no subcommand
pub fn handle_root() -> Result<()> {
    println!(
        "{} Your CLI is ready. Add your own commands when you are!",
        style("[ok]").green().bold()
    );
    Ok(())
}
