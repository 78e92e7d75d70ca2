//! Cache command implementation.
//!
//! Provides `plugin-updater clear-cache`.

use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::ReleaseUpdateChecker;

use super::dispatcher::{Command, CommandResult};

/// The clear-cache command implementation.
pub struct ClearCacheCommand<'a> {
    checker: &'a ReleaseUpdateChecker,
}

impl<'a> ClearCacheCommand<'a> {
    /// Create a new clear-cache command.
    pub fn new(checker: &'a ReleaseUpdateChecker) -> Self {
        Self { checker }
    }
}

impl Command for ClearCacheCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.checker.clear_update_cache();
        ui.success("Update cache cleared");
        Ok(CommandResult::success())
    }
}
