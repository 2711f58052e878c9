//! litmap-common — Shared errors and configuration used across all litmap crates.

pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::{LitmapError, Result};
