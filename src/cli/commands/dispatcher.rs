//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code used when the latest release could not be fetched.
pub const EXIT_UNAVAILABLE: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// The release API could not provide a release.
    pub fn unavailable() -> Self {
        Self::failure(EXIT_UNAVAILABLE)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: AppContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given context.
    pub fn new(context: AppContext) -> Self {
        Self { context }
    }

    /// Get the resolved context.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let checker = self.context.checker()?;
                super::check::CheckCommand::new(&checker, args.clone()).execute(ui)
            }
            Commands::Info(args) => {
                let checker = self.context.checker()?;
                super::info::InfoCommand::new(&checker, args.clone()).execute(ui)
            }
            Commands::Status(args) => {
                let checker = self.context.checker()?;
                super::status::StatusCommand::new(&checker, args.clone()).execute(ui)
            }
            Commands::ClearCache => {
                let checker = self.context.checker()?;
                super::cache::ClearCacheCommand::new(&checker).execute(ui)
            }
            Commands::Token(args) => {
                super::token::TokenCommand::new(&self.context.settings_path, args.clone())
                    .execute(ui)
            }
            Commands::PostInstall(args) => {
                let checker = self.context.checker()?;
                super::post_install::PostInstallCommand::new(&checker, args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpdaterConfig;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_unavailable() {
        assert_eq!(CommandResult::unavailable().exit_code, EXIT_UNAVAILABLE);
    }

    #[test]
    fn dispatches_token_command_without_network() {
        let temp = TempDir::new().unwrap();
        let context = AppContext {
            config: UpdaterConfig::default(),
            cache_dir: temp.path().join("cache"),
            settings_path: temp.path().join("settings.yml"),
            token_override: None,
        };
        let dispatcher = CommandDispatcher::new(context);
        let cli = Cli::try_parse_from(["plugin-updater", "token", "set", "ghp_abcdef123"]).unwrap();
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(dispatcher.context().settings_path.exists());
    }
}
