//! Notification bridge: notification kinds composed with delivery channels.
//!
//! `Notification` (order, reminder, alert) holds a `NotificationSender`
//! (email, SMS, push). Either side can gain variants without touching the
//! other.

mod console;
mod email_sender;
mod messages;
mod notification;
mod push_sender;
mod sender;
mod sms_sender;

pub mod notification_service;


pub use console::{CapturedOutput, ConsoleOutput};
pub use email_sender::EmailSender;
pub use messages::MessageCatalog;
pub use notification::{AlertNotification, Notification, OrderNotification, ReminderNotification};
pub use notification_service::NotificationService;
pub use push_sender::PushSender;
pub use sender::NotificationSender;
pub use sms_sender::SmsSender;
