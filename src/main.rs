//! Stencil CLI application
//!
//! A lean starter template that demonstrates how to combine clap argument
//! parsing, animated progress rendering, and interactive prompts into a
//! working command-line tool.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use stencil::cli::{handle_progress, handle_prompt, handle_root, Cli, Commands};
use stencil::errors::Result;
use stencil::shutdown::{self, ShutdownToken};

#[tokio::main]
async fn main() {
    let result = run().await;

    // Handle any errors that occurred
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!(
        "Stencil v{} starting (commit {})",
        env!("CARGO_PKG_VERSION"),
        stencil::constants::BUILD_COMMIT
    );

    // One token shared by every flow; CTRL-C and SIGTERM cancel it
    let token = ShutdownToken::new();
    let _signals = shutdown::install_signal_handler(&token);

    // Execute the appropriate command
    match cli.command {
        Some(Commands::Progress(args)) => handle_progress(&token, args).await,
        Some(Commands::Prompt(args)) => handle_prompt(&token, args).await,
        None => handle_root(),
    }
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    // Create environment filter
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("stencil={}", log_level).parse().unwrap());

    // Initialize subscriber
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .init();
}
