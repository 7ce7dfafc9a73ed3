//! Email sender.

use super::console::ConsoleOutput;
use super::messages::MessageCatalog;
use super::sender::NotificationSender;
use crate::models::{ChannelType, Locale, NotificationFormat};

/// Email delivery channel
///
/// Distinguishes HTML from plain text in the delivery line.
#[derive(Debug, Clone)]
pub struct EmailSender {
    output: ConsoleOutput,
    catalog: &'static MessageCatalog,
}

impl EmailSender {
    /// Creates an email sender with the default (English) strings
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

impl NotificationSender for EmailSender {
    fn channel(&self) -> ChannelType {
        ChannelType::Email
    }

    fn render(&self, message: &str, format: NotificationFormat) -> String {
        match format {
            NotificationFormat::Html => format!("{}{}", self.catalog.email_html, message),
            NotificationFormat::Text => format!("{}{}", self.catalog.email_text, message),
        }
    }

    fn output(&self) -> &ConsoleOutput {
        &self.output
    }
}
