//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AiConfig, AppConfig, LogLevel, RegenerationConfig};
pub use args::{CliArgs, Command, DraftCommand, NoteArgs};
pub use storage::{ConfigError, StorageManager};
