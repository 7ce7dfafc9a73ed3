//! Core notification sender trait.
//!
//! A sender is the implementation side of the bridge: it knows how a message
//! is rendered for one delivery channel and writes the resulting line.

use super::console::ConsoleOutput;
use crate::error::AppResult;
use crate::models::{ChannelType, NotificationFormat};
use std::sync::Arc;

/// Trait for delivery channels (email, SMS, push)
///
/// Implementors provide the per-channel rendering; `send` is shared. All
/// senders are stateless between calls and must be Send + Sync so one
/// instance can back several notifications.
///
/// # Example Implementation
/// ```ignore
/// pub struct FaxSender {
///     output: ConsoleOutput,
/// }
///
/// impl NotificationSender for FaxSender {
///     fn channel(&self) -> ChannelType { ... }
///
///     fn render(&self, message: &str, _format: NotificationFormat) -> String {
///         format!("Sending fax: {}", message)
///     }
///
///     fn output(&self) -> &ConsoleOutput {
///         &self.output
///     }
/// }
/// ```
pub trait NotificationSender: Send + Sync {
    /// Channel this sender delivers through
    fn channel(&self) -> ChannelType;

    /// Renders the delivery line for `message` in `format`
    ///
    /// Must contain `message` verbatim. Channels that cannot express a
    /// format are free to ignore it.
    fn render(&self, message: &str, format: NotificationFormat) -> String;

    /// Sink the delivery line is written to
    fn output(&self) -> &ConsoleOutput;

    /// Returns the sender name for logging/debugging
    fn name(&self) -> &'static str {
        self.channel().as_str()
    }

    /// Sends a message: renders it and writes exactly one line
    ///
    /// # Arguments
    /// * `message` - Message text, any string including empty
    /// * `format` - Requested rendering mode
    ///
    /// # Returns
    /// Ok(()) once the line is written; an output error only if the sink fails
    fn send(&self, message: &str, format: NotificationFormat) -> AppResult<()> {
        let line = self.render(message, format);
        tracing::debug!(
            channel = self.name(),
            format = %format,
            message_len = message.len(),
            "Sending message"
        );
        self.output().write_line(&line)
    }
}

impl<S: NotificationSender + ?Sized> NotificationSender for Box<S> {
    fn channel(&self) -> ChannelType {
        (**self).channel()
    }

    fn render(&self, message: &str, format: NotificationFormat) -> String {
        (**self).render(message, format)
    }

    fn output(&self) -> &ConsoleOutput {
        (**self).output()
    }

    fn send(&self, message: &str, format: NotificationFormat) -> AppResult<()> {
        (**self).send(message, format)
    }
}

impl<S: NotificationSender + ?Sized> NotificationSender for Arc<S> {
    fn channel(&self) -> ChannelType {
        (**self).channel()
    }

    fn render(&self, message: &str, format: NotificationFormat) -> String {
        (**self).render(message, format)
    }

    fn output(&self) -> &ConsoleOutput {
        (**self).output()
    }

    fn send(&self, message: &str, format: NotificationFormat) -> AppResult<()> {
        (**self).send(message, format)
    }
}
