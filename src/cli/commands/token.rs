//! Token command implementation.
//!
//! Provides `plugin-updater token set|clear|show` for the saved release API
//! access token.

use std::path::{Path, PathBuf};

use crate::cli::args::{TokenArgs, TokenSubcommand};
use crate::config::{token_preview, Settings};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The token command implementation.
pub struct TokenCommand {
    settings_path: PathBuf,
    args: TokenArgs,
}

impl TokenCommand {
    /// Create a new token command operating on the settings file at `settings_path`.
    pub fn new(settings_path: &Path, args: TokenArgs) -> Self {
        Self {
            settings_path: settings_path.to_path_buf(),
            args,
        }
    }
}

impl Command for TokenCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut settings = Settings::load(&self.settings_path)?;

        match &self.args.command {
            TokenSubcommand::Set { token } => {
                let token = token.trim();
                if token.is_empty() {
                    ui.error("Token must not be empty");
                    return Ok(CommandResult::failure(1));
                }
                settings.access_token = Some(token.to_string());
                settings.save(&self.settings_path)?;
                ui.success(&format!("Access token saved ({})", token_preview(token)));
            }
            TokenSubcommand::Clear => {
                settings.access_token = None;
                settings.save(&self.settings_path)?;
                ui.success("Access token removed");
            }
            TokenSubcommand::Show => match settings.token() {
                Some(token) => ui.field("Access token", &token_preview(token)),
                None => ui.field("Access token", "not set"),
            },
        }

        Ok(CommandResult::success())
    }
}
