//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands that
//! query releases borrow a [`ReleaseUpdateChecker`] built by the dispatcher,
//! so tests can hand them one backed by a mock transport.
//!
//! [`ReleaseUpdateChecker`]: crate::updates::ReleaseUpdateChecker

pub mod cache;
pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod info;
pub mod post_install;
pub mod status;
pub mod token;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_UNAVAILABLE};
