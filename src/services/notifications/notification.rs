//! Notification categories, the abstraction side of the bridge.
//!
//! Each notification holds exactly one sender, injected at construction and
//! never reassigned. Sending writes the category label, then hands the
//! message to the sender unchanged.

use super::console::ConsoleOutput;
use super::messages::MessageCatalog;
use super::sender::NotificationSender;
use crate::error::AppResult;
use crate::models::{Locale, NotificationFormat, NotificationKind};

/// Trait for notification categories (order, reminder, alert)
pub trait Notification: Send + Sync {
    /// Category of this notification
    fn kind(&self) -> NotificationKind;

    /// Label line written before every delivery
    fn label(&self) -> &str;

    /// Sender this notification is bound to
    fn sender(&self) -> &dyn NotificationSender;

    /// Sink the label line is written to
    fn output(&self) -> &ConsoleOutput;

    /// Sends a notification: one label line, then the sender's delivery line
    ///
    /// # Arguments
    /// * `message` - Message text, passed to the sender unchanged
    /// * `format` - Requested rendering mode, passed to the sender unchanged
    fn send_notification(&self, message: &str, format: NotificationFormat) -> AppResult<()> {
        tracing::debug!(
            kind = %self.kind(),
            channel = self.sender().name(),
            format = %format,
            "Sending notification"
        );
        self.output().write_line(self.label())?;
        self.sender().send(message, format)
    }
}

/// Order status notification
pub struct OrderNotification {
    sender: Box<dyn NotificationSender>,
    output: ConsoleOutput,
    catalog: &'static MessageCatalog,
}

impl OrderNotification {
    pub fn new<S: NotificationSender + 'static>(sender: S, output: ConsoleOutput) -> Self {
        Self::with_locale(sender, output, Locale::default())
    }

    pub fn with_locale<S: NotificationSender + 'static>(
        sender: S,
        output: ConsoleOutput,
        locale: Locale,
    ) -> Self {
        Self {
            sender: Box::new(sender),
            output,
            catalog: MessageCatalog::for_locale(locale),
        }
    }
}

impl Notification for OrderNotification {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Order
    }

    fn label(&self) -> &str {
        self.catalog.order_label
    }

    fn sender(&self) -> &dyn NotificationSender {
        self.sender.as_ref()
    }

    fn output(&self) -> &ConsoleOutput {
        &self.output
    }
}

/// Reminder notification
pub struct ReminderNotification {
    sender: Box<dyn NotificationSender>,
    output: ConsoleOutput,
    catalog: &'static MessageCatalog,
}

impl ReminderNotification {
    pub fn new<S: NotificationSender + 'static>(sender: S, output: ConsoleOutput) -> Self {
        Self::with_locale(sender, output, Locale::default())
    }

    pub fn with_locale<S: NotificationSender + 'static>(
        sender: S,
        output: ConsoleOutput,
        locale: Locale,
    ) -> Self {
        Self {
            sender: Box::new(sender),
            output,
            catalog: MessageCatalog::for_locale(locale),
        }
    }
}

impl Notification for ReminderNotification {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Reminder
    }

    fn label(&self) -> &str {
        self.catalog.reminder_label
    }

    fn sender(&self) -> &dyn NotificationSender {
        self.sender.as_ref()
    }

    fn output(&self) -> &ConsoleOutput {
        &self.output
    }
}

/// Alert notification
///
/// The label reads "Push notification:" whichever channel the alert is bound
/// to. Existing consumers match on that text, so it has not been renamed.
pub struct AlertNotification {
    sender: Box<dyn NotificationSender>,
    output: ConsoleOutput,
    catalog: &'static MessageCatalog,
}

impl AlertNotification {
    pub fn new<S: NotificationSender + 'static>(sender: S, output: ConsoleOutput) -> Self {
        Self::with_locale(sender, output, Locale::default())
    }

    pub fn with_locale<S: NotificationSender + 'static>(
        sender: S,
        output: ConsoleOutput,
        locale: Locale,
    ) -> Self {
        Self {
            sender: Box::new(sender),
            output,
            catalog: MessageCatalog::for_locale(locale),
        }
    }
}

impl Notification for AlertNotification {
    fn kind(&self) -> NotificationKind {
        NotificationKind::Alert
    }

    fn label(&self) -> &str {
        self.catalog.alert_label
    }

    fn sender(&self) -> &dyn NotificationSender {
        self.sender.as_ref()
    }

    fn output(&self) -> &ConsoleOutput {
        &self.output
    }
}
