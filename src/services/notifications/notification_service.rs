//! Notification service: builds bridge pairings from type tags and dispatches.

use super::console::ConsoleOutput;
use super::email_sender::EmailSender;
use super::notification::{
    AlertNotification, Notification, OrderNotification, ReminderNotification,
};
use super::push_sender::PushSender;
use super::sender::NotificationSender;
use super::sms_sender::SmsSender;
use crate::error::AppResult;
use crate::models::{ChannelType, Locale, NotificationFormat, NotificationKind};
use crate::scenario::Scenario;

/// Notification service wiring kinds to channels
///
/// Any kind may be bound to any channel; neither side knows about the other.
#[derive(Debug, Clone)]
pub struct NotificationService {
    output: ConsoleOutput,
    locale: Locale,
}

impl NotificationService {
    /// Creates a new NotificationService
    ///
    /// # Arguments
    /// * `output` - Sink shared by every sender and notification it creates
    /// * `locale` - String set for labels and delivery lines
    pub fn new(output: ConsoleOutput, locale: Locale) -> Self {
        Self { output, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    // ========================================================================
    // Factories
    // ========================================================================

    /// Creates a sender for a channel
    pub fn create_sender(&self, channel: ChannelType) -> Box<dyn NotificationSender> {
        let output = self.output.clone();
        match channel {
            ChannelType::Email => Box::new(EmailSender::with_locale(output, self.locale)),
            ChannelType::Sms => Box::new(SmsSender::with_locale(output, self.locale)),
            ChannelType::Push => Box::new(PushSender::with_locale(output, self.locale)),
        }
    }

    /// Creates a notification of `kind` bound to `sender`
    pub fn create_notification(
        &self,
        kind: NotificationKind,
        sender: Box<dyn NotificationSender>,
    ) -> Box<dyn Notification> {
        let output = self.output.clone();
        match kind {
            NotificationKind::Order => {
                Box::new(OrderNotification::with_locale(sender, output, self.locale))
            }
            NotificationKind::Reminder => {
                Box::new(ReminderNotification::with_locale(sender, output, self.locale))
            }
            NotificationKind::Alert => {
                Box::new(AlertNotification::with_locale(sender, output, self.locale))
            }
        }
    }

    // ========================================================================
    // Message Sending
    // ========================================================================

    /// Sends one notification of `kind` through `channel`
    ///
    /// Writes two lines: the kind's label, then the channel's delivery line.
    pub fn send(
        &self,
        kind: NotificationKind,
        channel: ChannelType,
        message: &str,
        format: NotificationFormat,
    ) -> AppResult<()> {
        let notification = self.create_notification(kind, self.create_sender(channel));
        notification.send_notification(message, format)
    }

    /// Runs every delivery of a scenario in order
    ///
    /// All pairings are constructed before the first delivery is sent.
    ///
    /// # Returns
    /// Number of deliveries dispatched
    pub fn run_scenario(&self, scenario: &Scenario) -> AppResult<usize> {
        let bound: Vec<_> = scenario
            .deliveries()
            .iter()
            .map(|delivery| {
                let sender = self.create_sender(delivery.channel);
                (self.create_notification(delivery.kind, sender), delivery)
            })
            .collect();

        for (notification, delivery) in &bound {
            notification.send_notification(&delivery.message, delivery.format)?;
        }

        tracing::info!(deliveries = bound.len(), locale = %self.locale, "Scenario complete");
        Ok(bound.len())
    }
}
