//! Infrastructure - configuration
//!
//! This module contains infrastructure concerns:
//! - `config` - Application configuration (TOML loading, defaults)

pub mod config;

// Re-export commonly used types
pub use config::{Config, ProbeMode};
