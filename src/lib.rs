//! ainote - Note pad helpers with AI summaries.
//!
//! This crate provides input validation, relative date formatting, auth error
//! classification, per-user draft recovery and a quota-gated AI regeneration
//! flow, organized in clean architecture layers.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing command handlers.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "ainote";
