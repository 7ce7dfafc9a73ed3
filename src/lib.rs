//! Notify-Bridge Library
//!
//! Notification kinds (order, reminder, alert) composed with delivery
//! channels (email, SMS, push) at runtime. Either side can grow without
//! touching the other.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod scenario;
pub mod services;

pub use error::{AppError, AppResult};
pub use scenario::{Delivery, Scenario};
pub use services::NotificationService;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
