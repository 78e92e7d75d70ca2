//! Info command implementation.
//!
//! The `plugin-updater info` command answers the host's package information
//! query for the latest release.

use crate::cli::args::InfoArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::ReleaseUpdateChecker;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand<'a> {
    checker: &'a ReleaseUpdateChecker,
    args: InfoArgs,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command.
    pub fn new(checker: &'a ReleaseUpdateChecker, args: InfoArgs) -> Self {
        Self { checker, args }
    }
}

impl Command for InfoCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let own_slug = &self.checker.config().plugin.slug;
        let slug = self.args.slug.as_ref().unwrap_or(own_slug);

        if slug != own_slug {
            ui.error(&format!("No package information for '{}'", slug));
            return Ok(CommandResult::failure(1));
        }

        let Some(info) = self.checker.plugin_information(slug) else {
            ui.error("Could not fetch latest release");
            return Ok(CommandResult::unavailable());
        };

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&info).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&info.name);
        ui.field("Version", &info.version);
        ui.field("Author", &format!("{} ({})", info.author, info.author_profile));
        ui.field("Homepage", &info.homepage);
        ui.field("Last updated", &info.last_updated);
        ui.field("Requires", &info.requires);
        ui.field("Requires runtime", &info.requires_runtime);
        ui.field("Tested up to", &info.tested);
        if info.download_link.is_empty() {
            ui.field("Download", "(no package attached)");
        } else {
            ui.field("Download", &info.download_link);
        }

        if !info.sections.changelog.trim().is_empty() {
            ui.message("");
            ui.message("Changelog:");
            for line in info.sections.changelog.lines() {
                ui.message(&format!("  {}", line));
            }
        }

        Ok(CommandResult::success())
    }
}
