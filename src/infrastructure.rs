//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - Store traits and their in-memory and file-backed implementations
//! - Configuration and CLI parsing
//! - The terminal foundation

pub mod cli;
pub mod config;
pub mod memory;
pub mod preference;
pub mod store;
pub mod tui;
