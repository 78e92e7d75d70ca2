//! Host update pipeline integration.
//!
//! The host drives the checker by sending it [`HostEvent`]s through
//! [`UpdatePipeline::handle`], one per point in its lifecycle where update
//! information is needed. Nothing is registered globally; the host owns the
//! pipeline and decides when to call it.

use serde::{Deserialize, Serialize};

use crate::updates::{PluginInformation, ReleaseUpdateChecker, UpdateOffer};

/// A point in the host lifecycle that needs the update checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// Periodic check for available updates.
    UpdateCheck,
    /// The host is showing package details for `slug`.
    PluginInformation { slug: String },
    /// The host finished installing `plugin`.
    PostInstall { plugin: String },
    /// An administrator asked to clear the update cache.
    ClearCache,
}

/// Answer to a [`HostEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "response", content = "data", rename_all = "snake_case")]
pub enum HostResponse {
    /// The update to offer, if any.
    UpdateOffer(Option<UpdateOffer>),
    /// Package details, or `None` when the query is not ours or no release is known.
    PluginInformation(Option<PluginInformation>),
    /// Whether the installation concerned this plugin and the cache was dropped.
    Invalidated(bool),
    /// The cache was cleared.
    Cleared,
}

/// Something that can answer host lifecycle events.
pub trait UpdatePipeline {
    /// Handle one event.
    fn handle(&self, event: HostEvent) -> HostResponse;

    /// Handle events in order, collecting the responses.
    fn handle_all(&self, events: impl IntoIterator<Item = HostEvent>) -> Vec<HostResponse>
    where
        Self: Sized,
    {
        events.into_iter().map(|event| self.handle(event)).collect()
    }
}

impl UpdatePipeline for ReleaseUpdateChecker {
    fn handle(&self, event: HostEvent) -> HostResponse {
        tracing::debug!("Handling host event {:?}", event);

        match event {
            HostEvent::UpdateCheck => HostResponse::UpdateOffer(self.update_offer()),
            HostEvent::PluginInformation { slug } => {
                HostResponse::PluginInformation(self.plugin_information(&slug))
            }
            HostEvent::PostInstall { plugin } => {
                HostResponse::Invalidated(self.on_post_install(&plugin))
            }
            HostEvent::ClearCache => {
                self.clear_update_cache();
                HostResponse::Cleared
            }
        }
    }
}
