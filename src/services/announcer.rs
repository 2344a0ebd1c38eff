use colored::Colorize;
use log::{info, warn};

use crate::domain::SharedSnapshot;
use crate::notify::DiscordWebhook;
use crate::notify::discord::status_label;

/// Announces ranked transitions of the shared snapshot
pub struct RankAnnouncer {
    webhook: DiscordWebhook,
}

impl RankAnnouncer {
    pub fn new(webhook: DiscordWebhook) -> Self {
        Self { webhook }
    }

    /// Returns whether a transition was found and announced.
    /// Webhook failures are logged; the transition still counts as announced.
    pub async fn check(&self, state: &SharedSnapshot) -> bool {
        let change = state.lock().await.take_rank_change();
        let Some(change) = change else {
            return false;
        };

        let status = status_label(change.ranked);
        let status = if change.ranked { status.green() } else { status.red() };
        info!("Server {} is now {}", change.name, status.bold());

        if let Err(e) = self.webhook.send(&change).await {
            warn!("Failed to send rank change notification: {:#}", e);
        }
        true
    }
}
