//! Application constants for Stencil
//!
//! This module centralizes the defaults and display strings used throughout
//! the template, organized by functional domain so derived tools know where
//! to put their own.

use std::time::Duration;

/// Build identity injected at compile time
pub mod build {
    /// Commit hash baked in by the release pipeline via `STENCIL_COMMIT`
    pub const COMMIT: &str = match option_env!("STENCIL_COMMIT") {
        Some(commit) => commit,
        None => "none",
    };
}

/// Progress demo defaults and bar styling
pub mod progress {
    use super::Duration;

    /// Default total units of simulated work
    pub const DEFAULT_TOTAL: u64 = 40;

    /// Default amount added to the bar per iteration
    pub const DEFAULT_CHUNK: u64 = 4;

    /// Default delay between progress updates
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(65);

    /// indicatif template for the demo bar
    pub const BAR_TEMPLATE: &str =
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

    /// Fill, head, and empty characters for the bar
    pub const BAR_PROGRESS_CHARS: &str = "##-";

    /// Message shown next to the bar while the simulation runs
    pub const BAR_MESSAGE: &str = "processing";
}

/// Survey prompts and the fixed choice list
pub mod survey {
    /// Prompt for the free-text name field
    pub const NAME_PROMPT: &str = "What is your name?";

    /// Prompt for the single-choice language field
    pub const LANGUAGE_PROMPT: &str = "Favorite programming language";

    /// Prompt for the newsletter confirmation field
    pub const NEWSLETTER_PROMPT: &str = "Subscribe to release updates?";

    /// The fixed language options, in display order
    pub const LANGUAGES: [&str; 4] = ["Go", "Rust", "Python", "JavaScript"];

    /// Validation message for an empty or whitespace-only name
    pub const NAME_REQUIRED: &str = "name is required";
}

// Re-export commonly used constants for convenience
pub use build::COMMIT as BUILD_COMMIT;
pub use progress::{DEFAULT_CHUNK, DEFAULT_DELAY, DEFAULT_TOTAL};
pub use survey::LANGUAGES;
