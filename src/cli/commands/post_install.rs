//! Post-install command implementation.
//!
//! The `plugin-updater post-install <plugin>` command tells the checker an
//! installation finished, so a stale release is not served afterwards.

use crate::cli::args::PostInstallArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::ReleaseUpdateChecker;

use super::dispatcher::{Command, CommandResult};

/// The post-install command implementation.
pub struct PostInstallCommand<'a> {
    checker: &'a ReleaseUpdateChecker,
    args: PostInstallArgs,
}

impl<'a> PostInstallCommand<'a> {
    /// Create a new post-install command.
    pub fn new(checker: &'a ReleaseUpdateChecker, args: PostInstallArgs) -> Self {
        Self { checker, args }
    }
}

impl Command for PostInstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.checker.on_post_install(&self.args.plugin) {
            ui.success(&format!(
                "Update cache cleared after installing {}",
                self.args.plugin
            ));
        } else {
            ui.message(&format!(
                "{} is not {}; cache kept",
                self.args.plugin,
                self.checker.config().plugin_id()
            ));
        }
        Ok(CommandResult::success())
    }
}
