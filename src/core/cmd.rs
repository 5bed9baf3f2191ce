use serde::{Deserialize, Serialize};

use crate::{
    core::state::feed::RequestToken,
    domain::{ChannelId, CommentId, ContentRef, SortMode},
};

/// Parameters of one comment page request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub content_ref: ContentRef,
    pub page: u32,
    pub page_size: u32,
    pub sort_mode: SortMode,
}

/// Elm-like command definitions
/// Represents side effects (store access, persistence, rendering)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Comment store
    ResetComments {
        content_ref: ContentRef,
    },
    FetchPage {
        token: RequestToken,
        request: PageRequest,
    },

    // Reaction store
    FetchReactions {
        token: RequestToken,
        comment_ids: Vec<CommentId>,
        channel_id: Option<ChannelId>,
    },

    // Preferences
    PersistSortMode {
        sort_mode: SortMode,
    },

    /// Request a render; coalesced by the app runner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchPage { .. } | Cmd::FetchReactions { .. } | Cmd::PersistSortMode { .. } => {
                true
            }

            Cmd::ResetComments { .. }
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // A reset must land before the page fetch that follows it
            Cmd::ResetComments { .. } => 0,

            Cmd::RequestRender => 1,

            Cmd::FetchPage { .. } | Cmd::FetchReactions { .. } => 2,

            Cmd::PersistSortMode { .. } => 3,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }
}
