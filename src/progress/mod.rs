//! Animated progress simulation
//!
//! This module implements the `progress` demo: a step planner that splits a
//! total workload into bounded increments, and a runner that advances an
//! indicatif bar per increment with a fixed delay in between, respecting
//! cancellation at every iteration boundary.

pub mod config;
pub mod runner;
pub mod steps;

pub use config::ProgressConfig;
pub use runner::run;
pub use steps::build_steps;
