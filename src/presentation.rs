//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - The comment card component
//! - Reusable widgets
//! - The scroll sentinel observer

pub mod components;
pub mod sentinel;
pub mod widgets;
