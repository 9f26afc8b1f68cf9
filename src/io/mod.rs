//! IO modules - external system interfaces
//!
//! This module contains all external IO operations:
//! - `console` - Interactive attendant menu (entry, exit, quit)
//! - `http_probe` - Identity probe backed by an external detector HTTP endpoint

pub mod console;
pub mod http_probe;

// Re-export commonly used types
pub use console::Console;
pub use http_probe::HttpProbe;
