//! Command-line interface components
//!
//! This module contains CLI-specific code for Stencil: argument parsing and
//! the handlers behind each subcommand.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, GlobalArgs, ProgressArgs, PromptArgs};
pub use commands::{handle_progress, handle_prompt, handle_root};
