//! Configuration management for the Compose CLI.
//!
//! This crate resolves the Compose API connection settings (base URL,
//! bearer token, request timeout) from `.env` files, environment variables
//! and explicit overrides supplied by the caller.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{Config, ConnectionConfig};
