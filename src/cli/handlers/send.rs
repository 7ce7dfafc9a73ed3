//! Send command handler
//!
//! Sends a single notification through an arbitrary channel.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::models::{ChannelType, NotificationFormat, NotificationKind};
use crate::services::notifications::{ConsoleOutput, NotificationService};

/// Handler for the send command
pub struct SendCommandHandler {
    config: Settings,
    output: ConsoleOutput,
}

impl SendCommandHandler {
    pub fn new(config: Settings, output: ConsoleOutput) -> Self {
        Self { config, output }
    }

    /// Send `message` as a `kind` notification through `channel`
    pub fn execute(
        &self,
        kind: NotificationKind,
        channel: ChannelType,
        message: &str,
        format: NotificationFormat,
    ) -> AppResult<()> {
        let service = NotificationService::new(self.output.clone(), self.config.output.locale);

        tracing::info!(%kind, %channel, %format, "Sending single notification");

        service.send(kind, channel, message, format)
    }
}
