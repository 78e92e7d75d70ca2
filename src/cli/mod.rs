//! Command-line interface.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`context`] - Config, settings and cache locations resolved from flags
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;
pub mod context;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, InfoArgs, PostInstallArgs, StatusArgs, TokenArgs,
    TokenSubcommand,
};
pub use commands::{Command, CommandDispatcher, CommandResult, EXIT_UNAVAILABLE};
pub use context::AppContext;
