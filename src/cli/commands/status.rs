//! Status command implementation.
//!
//! The `plugin-updater status` command shows debug information about the
//! update system: versions, access token, repository and cache state.

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{CacheState, ReleaseUpdateChecker, TokenStatus};

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand<'a> {
    checker: &'a ReleaseUpdateChecker,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(checker: &'a ReleaseUpdateChecker, args: StatusArgs) -> Self {
        Self { checker, args }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let status = self.checker.status();

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&status).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        ui.show_header("Update System");
        ui.field("Current version", &status.current_version);

        match &status.latest_version {
            Some(latest) => {
                let verdict = if status.update_available {
                    "update available"
                } else {
                    "up to date"
                };
                ui.field("Latest version", &format!("{} ({})", latest, verdict));
                if !status.package_available {
                    ui.warning("Latest release has no installable package");
                }
            }
            None => ui.field("Latest version", "could not fetch latest release"),
        }

        let token = match &status.token {
            TokenStatus::Set { preview } => format!("set ({})", preview),
            TokenStatus::NotSet => "not set".to_string(),
        };
        ui.field("Access token", &token);
        ui.field("Repository", &status.repository);

        let cache = match &status.cache {
            CacheState::Populated { expires_at, .. } => {
                format!("cached until {}", expires_at.format("%Y-%m-%d %H:%M UTC"))
            }
            CacheState::Empty => "empty".to_string(),
        };
        ui.field("Cache", &cache);

        Ok(CommandResult::success())
    }
}
