//! Presentation layer with command handlers and text output.

/// Command dispatch.
pub mod commands;
/// Text rendering of results.
pub mod render;

pub use commands::CommandRunner;
