mod notification;

pub use notification::{ChannelType, Locale, NotificationFormat, NotificationKind};
