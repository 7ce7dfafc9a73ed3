//! Push notification sender.

use super::console::ConsoleOutput;
use super::messages::MessageCatalog;
use super::sender::NotificationSender;
use crate::models::{ChannelType, Locale, NotificationFormat};

/// Push delivery channel
#[derive(Debug, Clone)]
pub struct PushSender {
    output: ConsoleOutput,
    catalog: &'static MessageCatalog,
}

impl PushSender {
    /// Creates a push sender with the default (English) strings
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

impl NotificationSender for PushSender {
    fn channel(&self) -> ChannelType {
        ChannelType::Push
    }

    fn render(&self, message: &str, format: NotificationFormat) -> String {
        match format {
            NotificationFormat::Html => format!("{}{}", self.catalog.push_html, message),
            NotificationFormat::Text => format!("{}{}", self.catalog.push_text, message),
        }
    }

    fn output(&self) -> &ConsoleOutput {
        &self.output
    }
}
