//! Core types shared across the fileforge crates.
//!
//! Provides the application configuration loaded from the environment and the
//! unified error taxonomy used by every other crate.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
