//! SMS sender.

use super::console::ConsoleOutput;
use super::messages::MessageCatalog;
use super::sender::NotificationSender;
use crate::models::{ChannelType, Locale, NotificationFormat};

/// SMS delivery channel
///
/// SMS carries plain text only, so the requested format is ignored.
#[derive(Debug, Clone)]
pub struct SmsSender {
    output: ConsoleOutput,
    catalog: &'static MessageCatalog,
}

impl SmsSender {
    /// Creates an SMS sender with the default (English) strings
    pub fn new(output: ConsoleOutput) -> Self {
        Self::with_locale(output, Locale::default())
    }

    pub fn with_locale(output: ConsoleOutput, locale: Locale) -> Self {
        Self {
            output,
            catalog: MessageCatalog::for_locale(locale),
        }
    }
}

impl NotificationSender for SmsSender {
    fn channel(&self) -> ChannelType {
        ChannelType::Sms
    }

    fn render(&self, message: &str, _format: NotificationFormat) -> String {
        format!("{}{}", self.catalog.sms, message)
    }

    fn output(&self) -> &ConsoleOutput {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_is_ignored() {
        let (output, captured) = ConsoleOutput::capture();
        let sender = SmsSender::new(output);
        sender.send("Reminder: meeting at 15:00.", NotificationFormat::Html).unwrap();
        sender.send("Reminder: meeting at 15:00.", NotificationFormat::Text).unwrap();
        assert_eq!(
            captured.lines(),
            vec![
                "Sending SMS: Reminder: meeting at 15:00.",
                "Sending SMS: Reminder: meeting at 15:00.",
            ]
        );
    }

    #[test]
    fn test_empty_message() {
        let (output, _) = ConsoleOutput::capture();
        let sender = SmsSender::new(output);
        assert_eq!(sender.render("", NotificationFormat::Text), "Sending SMS: ");
    }

    #[test]
    fn test_render_russian() {
        let (output, _) = ConsoleOutput::capture();
        let sender = SmsSender::with_locale(output, Locale::Ru);
        assert_eq!(
            sender.render("Напоминание о встрече в 15:00.", NotificationFormat::Text),
            "Отправка SMS: Напоминание о встрече в 15:00."
        );
    }
}
