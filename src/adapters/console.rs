use async_trait::async_trait;

use crate::domain::ports::{Notification, NotificationService};
use crate::utils::error::Result;

/// Writes notifications to the log instead of delivering them.
#[derive(Debug, Clone)]
pub struct ConsoleNotificationService {
    enabled: bool,
}

impl ConsoleNotificationService {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// A sink that accepts and drops every notification.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ConsoleNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for ConsoleNotificationService {
    async fn notify(&self, notification: &Notification) -> Result<()> {
        if !self.enabled {
            tracing::debug!("Notifications disabled, dropping '{}'", notification.subject);
            return Ok(());
        }

        let json = serde_json::to_string(notification)?;
        tracing::info!("📧 Notification Received: {}", json);
        Ok(())
    }
}
