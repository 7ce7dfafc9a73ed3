//! Notification models shared by senders, notifications and configuration.
//!
//! Every type here is a closed tag: the bridge composes one value from each
//! axis (`NotificationKind` x `ChannelType`) and passes a `NotificationFormat`
//! through to the sender.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

// ============================================================================
// Enums
// ============================================================================

/// Rendering mode passed through to a sender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFormat {
    #[default]
    Text,
    Html,
}

impl NotificationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFormat::Text => "text",
            NotificationFormat::Html => "html",
        }
    }
}

/// Delivery channel (the implementation side of the bridge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Sms,
    Push,
}

impl ChannelType {
    pub const ALL: [ChannelType; 3] = [ChannelType::Email, ChannelType::Sms, ChannelType::Push];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Sms => "sms",
            ChannelType::Push => "push",
        }
    }
}

/// Notification category (the abstraction side of the bridge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Order,
    Reminder,
    Alert,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::Order,
        NotificationKind::Reminder,
        NotificationKind::Alert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Order => "order",
            NotificationKind::Reminder => "reminder",
            NotificationKind::Alert => "alert",
        }
    }
}

/// Literal string set used for labels and delivery lines
///
/// Configuration values and `--locale` both parse through `FromStr`, so
/// `RU`, ` ru ` and `ru` are accepted alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

// ============================================================================
// Parsing and display
// ============================================================================

fn invalid(field: &str, value: &str, expected: &str) -> AppError {
    AppError::Validation {
        field: field.to_string(),
        reason: format!("Invalid value '{}'. Valid values are: {}", value, expected),
    }
}

impl FromStr for NotificationFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(NotificationFormat::Text),
            "html" => Ok(NotificationFormat::Html),
            _ => Err(invalid("format", s, "text, html")),
        }
    }
}

impl FromStr for ChannelType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(ChannelType::Email),
            "sms" => Ok(ChannelType::Sms),
            "push" => Ok(ChannelType::Push),
            _ => Err(invalid("channel", s, "email, sms, push")),
        }
    }
}

impl FromStr for NotificationKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "order" => Ok(NotificationKind::Order),
            "reminder" => Ok(NotificationKind::Reminder),
            "alert" => Ok(NotificationKind::Alert),
            _ => Err(invalid("kind", s, "order, reminder, alert")),
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(invalid("locale", s, "en, ru")),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for NotificationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
