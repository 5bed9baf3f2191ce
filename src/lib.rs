//! # Threadline - a terminal comment feed
//!
//! Shows the comments of one piece of content a page at a time, keeps the
//! reaction counts of the loaded comments in sync, and lets the viewer
//! switch between newest, best and controversial ordering.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** ([`core::state`]): application state, owned by the runtime
//! - **Message** ([`core::msg`]): user intents and store completions
//! - **Update** ([`core::update`]): folds a message into the state
//! - **Command** ([`core::cmd`]): side effects against the stores
//! - **View** ([`presentation`]): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use threadline::{
//!     core::{msg::{feed::FeedMsg, Msg}, state::feed::FeedPhase},
//!     domain::{ContentRef, SortMode},
//!     update, AppState, Cmd,
//! };
//!
//! let content_ref = ContentRef::new("lbry://video").unwrap();
//! let (state, commands) = update(
//!     Msg::Feed(FeedMsg::Initialize { content_ref, sort_mode: SortMode::Newest }),
//!     AppState::default(),
//! );
//!
//! assert_eq!(state.feed.phase(), FeedPhase::LoadingPage);
//! assert!(commands.iter().any(|cmd| matches!(cmd, Cmd::FetchPage { .. })));
//! ```

#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, Stores};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
