//! Configuration for the progress simulation

use std::time::Duration;

use crate::constants::progress as defaults;
use crate::errors::{ProgressError, ProgressResult};

/// Drives the simulated progress workload
///
/// Constructed from CLI flags, validated once, consumed by a single run.
/// `delay` is a [`Duration`] and therefore cannot be negative; only `total`
/// and `chunk` need runtime validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Total units of simulated work
    pub total: u64,
    /// Amount added to the bar per iteration
    pub chunk: u64,
    /// Delay between progress updates
    pub delay: Duration,
}

impl ProgressConfig {
    /// Check configuration values against safe bounds
    pub fn validate(&self) -> ProgressResult<()> {
        if self.total == 0 {
            return Err(ProgressError::InvalidTotal);
        }
        if self.chunk == 0 {
            return Err(ProgressError::InvalidChunk);
        }
        Ok(())
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            total: defaults::DEFAULT_TOTAL,
            chunk: defaults::DEFAULT_CHUNK,
            delay: defaults::DEFAULT_DELAY,
        }
    }
}
