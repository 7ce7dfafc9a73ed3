//! Delivery scenarios: fixed sequences of (kind, channel, message, format).

use serde::{Deserialize, Serialize};

use crate::models::{ChannelType, Locale, NotificationFormat, NotificationKind};

/// One notification to send through one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub kind: NotificationKind,
    pub channel: ChannelType,
    pub message: String,
    #[serde(default)]
    pub format: NotificationFormat,
}

impl Delivery {
    pub fn new(
        kind: NotificationKind,
        channel: ChannelType,
        message: impl Into<String>,
        format: NotificationFormat,
    ) -> Self {
        Self {
            kind,
            channel,
            message: message.into(),
            format,
        }
    }
}

/// Ordered list of deliveries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    deliveries: Vec<Delivery>,
}

impl Scenario {
    pub fn new(deliveries: Vec<Delivery>) -> Self {
        Self { deliveries }
    }

    /// The standard demonstration: order by email (HTML), reminder by SMS
    /// (text), alert by push (text)
    pub fn standard(locale: Locale) -> Self {
        let (order, reminder, alert) = match locale {
            Locale::En => (
                "Your order has been successfully processed.",
                "Reminder: meeting at 15:00.",
                "Warning! High server load.",
            ),
            Locale::Ru => (
                "Ваш заказ был успешно обработан.",
                "Напоминание о встрече в 15:00.",
                "Внимание! Высокая загрузка сервера.",
            ),
        };

        Self::new(vec![
            Delivery::new(
                NotificationKind::Order,
                ChannelType::Email,
                order,
                NotificationFormat::Html,
            ),
            Delivery::new(
                NotificationKind::Reminder,
                ChannelType::Sms,
                reminder,
                NotificationFormat::Text,
            ),
            Delivery::new(
                NotificationKind::Alert,
                ChannelType::Push,
                alert,
                NotificationFormat::Text,
            ),
        ])
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pairings() {
        let scenario = Scenario::standard(Locale::En);
        let pairs: Vec<_> = scenario
            .deliveries()
            .iter()
            .map(|d| (d.kind, d.channel, d.format))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (NotificationKind::Order, ChannelType::Email, NotificationFormat::Html),
                (NotificationKind::Reminder, ChannelType::Sms, NotificationFormat::Text),
                (NotificationKind::Alert, ChannelType::Push, NotificationFormat::Text),
            ]
        );
    }

    #[test]
    fn test_locales_differ_only_in_messages() {
        let en = Scenario::standard(Locale::En);
        let ru = Scenario::standard(Locale::Ru);
        assert_eq!(en.len(), ru.len());
        for (a, b) in en.deliveries().iter().zip(ru.deliveries()) {
            assert_eq!((a.kind, a.channel, a.format), (b.kind, b.channel, b.format));
            assert_ne!(a.message, b.message);
        }
    }

    #[test]
    fn test_delivery_format_defaults_to_text() {
        let delivery: Delivery =
            serde_json::from_str(r#"{"kind":"alert","channel":"sms","message":"hi"}"#).unwrap();
        assert_eq!(delivery.format, NotificationFormat::Text);
    }
}
