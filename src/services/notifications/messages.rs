//! Literal console strings per locale.

use crate::models::{Locale, NotificationKind};

/// Every string the senders and notifications print, for one locale
///
/// Sender prefixes are followed directly by the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageCatalog {
    pub email_html: &'static str,
    pub email_text: &'static str,
    pub sms: &'static str,
    pub push_html: &'static str,
    pub push_text: &'static str,
    pub order_label: &'static str,
    pub reminder_label: &'static str,
    pub alert_label: &'static str,
}

const EN: MessageCatalog = MessageCatalog {
    email_html: "Sending Email in HTML format: ",
    email_text: "Sending Email in text format: ",
    sms: "Sending SMS: ",
    push_html: "Sending Push notification in HTML format: ",
    push_text: "Sending Push notification in text format: ",
    order_label: "Order notification:",
    reminder_label: "Reminder notification:",
    // Reads "Push" rather than "Alert"; kept for output compatibility
    alert_label: "Push notification:",
};

const RU: MessageCatalog = MessageCatalog {
    email_html: "Отправка Email в формате HTML: ",
    email_text: "Отправка Email в текстовом формате: ",
    sms: "Отправка SMS: ",
    push_html: "Отправка Push-уведомления в формате HTML: ",
    push_text: "Отправка Push-уведомления в текстовом формате: ",
    order_label: "Уведомление о заказе:",
    reminder_label: "Уведомление-напоминание:",
    alert_label: "Push-уведомление:",
};

impl MessageCatalog {
    pub fn for_locale(locale: Locale) -> &'static MessageCatalog {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    /// Category label line for a notification kind
    pub fn label(&self, kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::Order => self.order_label,
            NotificationKind::Reminder => self.reminder_label,
            NotificationKind::Alert => self.alert_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_labels() {
        let catalog = MessageCatalog::for_locale(Locale::En);
        assert_eq!(catalog.label(NotificationKind::Order), "Order notification:");
        assert_eq!(catalog.label(NotificationKind::Reminder), "Reminder notification:");
        assert_eq!(catalog.label(NotificationKind::Alert), "Push notification:");
    }

    #[test]
    fn test_russian_labels() {
        let catalog = MessageCatalog::for_locale(Locale::Ru);
        assert_eq!(catalog.label(NotificationKind::Order), "Уведомление о заказе:");
        assert_eq!(catalog.label(NotificationKind::Alert), "Push-уведомление:");
    }

    #[test]
    fn test_locales_share_branching_shape() {
        for locale in [Locale::En, Locale::Ru] {
            let catalog = MessageCatalog::for_locale(locale);
            assert_ne!(catalog.email_html, catalog.email_text);
            assert_ne!(catalog.push_html, catalog.push_text);
            assert!(catalog.sms.ends_with(": "));
        }
    }
}
