//! Reusable widgets
//!
//! This module contains widgets composed by the comment card.

pub mod comment_item;
pub mod reaction_stats;
pub mod sort_toggle;
pub mod status_bar;
