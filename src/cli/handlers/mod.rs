//! Command handlers for CLI operations
//!
//! Handlers hold the merged settings and the console sink, keeping command
//! execution separate from parsing and validation.

pub mod run;
pub mod send;

pub use run::RunCommandHandler;
pub use send::SendCommandHandler;
