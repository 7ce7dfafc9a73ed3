//! Run command handler
//!
//! Executes the standard scenario: the fixed composition of three senders
//! and three notifications.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::scenario::Scenario;
use crate::services::notifications::{ConsoleOutput, NotificationService};

/// Handler for the run command
pub struct RunCommandHandler {
    config: Settings,
    output: ConsoleOutput,
}

impl RunCommandHandler {
    pub fn new(config: Settings, output: ConsoleOutput) -> Self {
        Self { config, output }
    }

    /// Execute the standard scenario
    ///
    /// # Returns
    /// Number of notifications sent
    pub fn execute(&self) -> AppResult<usize> {
        let locale = self.config.output.locale;
        let service = NotificationService::new(self.output.clone(), locale);

        tracing::info!(
            app = %self.config.application.name,
            locale = %locale,
            "Running standard scenario"
        );

        service.run_scenario(&Scenario::standard(locale))
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
