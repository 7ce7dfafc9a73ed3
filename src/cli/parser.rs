//! CLI argument parsing with clap
//!
//! Defines the command-line interface: global options, the `run` and `send`
//! commands, and the value enums they accept.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::{ChannelType, Locale, NotificationFormat, NotificationKind};

/// Notification kinds bridged onto delivery channels
#[derive(Parser, Debug)]
#[command(name = "notify-bridge")]
#[command(about = "Notification kinds bridged onto delivery channels")]
#[command(long_about = "
notify-bridge composes a notification kind (order, reminder, alert) with a
delivery channel (email, SMS, push). Either side varies independently: every
kind can be sent through every channel, and each channel decides how to render
the requested format.

Notification lines are written to stdout; log events go to stderr.

EXAMPLES:
    # Run the standard scenario (default)
    notify-bridge

    # Same scenario with the Russian string set
    notify-bridge --locale ru run

    # Send one alert through email as HTML
    notify-bridge send --kind alert --channel email --format html \"Disk almost full\"

    # Use a custom configuration file with verbose logging
    notify-bridge --config /etc/notify-bridge/local.toml --verbose run
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Use a single TOML file instead of the layered `config/` directory.
    /// The file must exist and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Selects which `config/{environment}.toml` layer is loaded.
    ///
    /// Available values: development (dev), staging (stage), production (prod), test
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level, on stderr)
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log errors only
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// String set for labels and delivery lines: en, ru
    ///
    /// Overrides `output.locale` from configuration. Case-insensitive.
    #[arg(long, global = true, value_name = "LOCALE", value_parser = super::validation::parse_locale)]
    pub locale: Option<Locale>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the standard scenario (default)
    ///
    /// Sends an order notification by email (HTML), a reminder by SMS (text)
    /// and an alert by push (text).
    Run,

    /// Send one notification through one channel
    ///
    /// Examples:
    ///   notify-bridge send -k order -C sms "Order shipped"
    ///   notify-bridge send -k reminder -C push -f html "Standup in 5 minutes"
    Send {
        /// Notification kind
        #[arg(short, long, value_enum)]
        kind: KindArg,

        /// Delivery channel
        #[arg(short = 'C', long, value_enum)]
        channel: ChannelArg,

        /// Rendering format (SMS ignores it)
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,

        /// Log level override for this command
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Message text, sent verbatim
        #[arg(value_name = "MESSAGE", allow_hyphen_values = true)]
        message: String,
    },
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "staging", alias = "stage")]
    Staging,
    #[value(name = "production", alias = "prod")]
    Production,
    #[value(name = "test")]
    Test,
}

/// Log level options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    #[value(name = "error")]
    Error,
    #[value(name = "warn", alias = "warning")]
    Warn,
    #[value(name = "info")]
    Info,
    #[value(name = "debug")]
    Debug,
    #[value(name = "trace")]
    Trace,
}

/// Notification kind options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Order,
    Reminder,
    Alert,
}

/// Delivery channel options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelArg {
    Email,
    Sms,
    Push,
}

/// Format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Html,
}

impl Cli {
    /// Validate argument combinations clap cannot express
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use --verbose and --quiet together".to_string());
        }

        if let Some(Commands::Send { message, .. }) = &self.command
            && message.contains(['\n', '\r'])
        {
            return Err("Message must be a single line".to_string());
        }

        Ok(())
    }

    /// Command to run, defaulting to `run`
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => "error".to_string(),
            LogLevel::Warn => "warn".to_string(),
            LogLevel::Info => "info".to_string(),
            LogLevel::Debug => "debug".to_string(),
            LogLevel::Trace => "trace".to_string(),
        }
    }
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
            Environment::Test => crate::config::Environment::Test,
        }
    }
}

impl From<KindArg> for NotificationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Order => NotificationKind::Order,
            KindArg::Reminder => NotificationKind::Reminder,
            KindArg::Alert => NotificationKind::Alert,
        }
    }
}

impl From<ChannelArg> for ChannelType {
    fn from(channel: ChannelArg) -> Self {
        match channel {
            ChannelArg::Email => ChannelType::Email,
            ChannelArg::Sms => ChannelType::Sms,
            ChannelArg::Push => ChannelType::Push,
        }
    }
}

impl From<FormatArg> for NotificationFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => NotificationFormat::Text,
            FormatArg::Html => NotificationFormat::Html,
        }
    }
}
