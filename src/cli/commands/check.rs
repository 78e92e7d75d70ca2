//! Check command implementation.
//!
//! The `plugin-updater check` command runs the host update check and reports
//! whether a newer release can be installed.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{ReleaseUpdateChecker, UpdateOffer};

use super::dispatcher::{Command, CommandResult};

/// JSON output of the check command.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    current_version: &'a str,
    latest_version: &'a str,
    update_available: bool,
    offer: Option<UpdateOffer>,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    checker: &'a ReleaseUpdateChecker,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(checker: &'a ReleaseUpdateChecker, args: CheckArgs) -> Self {
        Self { checker, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.checker.config();

        if self.args.fresh {
            self.checker.invalidate_cache();
        }

        let mut spinner = ui.start_spinner(&format!("Checking {} for updates...", config.repository));
        let Some(release) = self.checker.get_latest_release() else {
            spinner.clear();
            ui.error(&format!("Could not fetch latest release of {}", config.repository));
            return Ok(CommandResult::unavailable());
        };
        spinner.clear();

        let offer = self.checker.offer_for(&release);

        if self.args.json {
            let report = CheckReport {
                current_version: &config.current_version,
                latest_version: &release.version,
                update_available: offer.is_some(),
                offer,
            };
            ui.message(&serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        match offer {
            Some(offer) => {
                ui.success(&format!(
                    "Update available: {} → {}",
                    config.current_version, offer.new_version
                ));
                if offer.is_installable() {
                    ui.field("Package", &offer.package);
                } else {
                    ui.warning(&format!(
                        "Release {} has no asset named {}",
                        offer.new_version, config.asset_name
                    ));
                }
                if !offer.last_updated.is_empty() {
                    ui.field("Published", &offer.last_updated);
                }
            }
            None => ui.success(&format!(
                "Up to date ({}, latest {})",
                config.current_version, release.version
            )),
        }

        Ok(CommandResult::success())
    }
}
