//! culprit - regression hunter for git
//!
//! Given a failing test suite, walks back through history with growing
//! steps to the last passing revision, bisects between it and the tip, and
//! reports who committed the first failing revision.
//!
//! This library provides:
//! - [`config`]: Run configuration
//! - [`error`]: Failure taxonomy
//! - [`git`]: git command execution and parsing
//! - [`hunt`]: Baseline search, bisection and culprit identification
//! - [`model`]: Domain models
//! - [`oracle`]: Test command invocation
//! - [`report`]: Status output

pub mod config;
pub mod error;
pub mod git;
pub mod hunt;
pub mod model;
pub mod oracle;
pub mod report;
