use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    core::{
        cmd::{Cmd, PageRequest},
        msg::{feed::FeedMsg, Msg},
        state::feed::RequestToken,
    },
    domain::{ChannelId, CommentId},
    infrastructure::store::{save_sort_mode, CommentStore, PreferenceStore, ReactionStore},
};

/// Executes commands against the stores and reports completions as messages
///
/// Store calls run on spawned tokio tasks; each completion is sent back on
/// the message channel tagged with the token of the request it answers.
#[derive(Clone)]
pub struct CmdExecutor {
    comments: Arc<dyn CommentStore>,
    reactions: Arc<dyn ReactionStore>,
    preferences: Arc<dyn PreferenceStore>,
    msg_sender: mpsc::UnboundedSender<Msg>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new(
        comments: Arc<dyn CommentStore>,
        reactions: Arc<dyn ReactionStore>,
        preferences: Arc<dyn PreferenceStore>,
        msg_sender: mpsc::UnboundedSender<Msg>,
    ) -> Self {
        Self {
            comments,
            reactions,
            preferences,
            msg_sender,
            render_req_sender: None,
        }
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command, spawning a task for store access
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::ResetComments { content_ref } => {
                self.comments.reset(content_ref);
            }

            Cmd::FetchPage { token, request } => {
                self.spawn_fetch_page(*token, request.clone());
            }

            Cmd::FetchReactions {
                token,
                comment_ids,
                channel_id,
            } => {
                self.spawn_fetch_reactions(*token, comment_ids.clone(), channel_id.clone());
            }

            Cmd::PersistSortMode { sort_mode } => {
                let preferences = Arc::clone(&self.preferences);
                let sort_mode = *sort_mode;
                tokio::spawn(async move {
                    if let Err(e) = save_sort_mode(preferences.as_ref(), sort_mode).await {
                        log::warn!("Failed to persist sort mode {sort_mode}: {e}");
                    }
                });
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands in priority order
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        let mut failures = Vec::new();
        for cmd in ordered {
            if let Err(e) = self.execute_command(cmd) {
                let error_msg = format!("Failed to execute {}: {e}", cmd.name());
                log::error!("{error_msg}");
                failures.push(error_msg);
            }
        }
        failures
    }

    fn spawn_fetch_page(&self, token: RequestToken, request: PageRequest) -> JoinHandle<()> {
        let comments = Arc::clone(&self.comments);
        let sender = self.msg_sender.clone();
        tokio::spawn(async move {
            let result = comments
                .list_page(
                    &request.content_ref,
                    request.page,
                    request.page_size,
                    request.sort_mode,
                )
                .await;
            let msg = match result {
                Ok(page) => FeedMsg::PageFetched { token, page },
                Err(e) => {
                    log::warn!(
                        "Page {} of {} failed: {e}",
                        request.page,
                        request.content_ref
                    );
                    FeedMsg::PageFetchFailed {
                        token,
                        error: e.to_string(),
                    }
                }
            };
            if sender.send(msg.into()).is_err() {
                log::debug!("Message channel closed before page {token:?} was delivered");
            }
        })
    }

    fn spawn_fetch_reactions(
        &self,
        token: RequestToken,
        comment_ids: Vec<CommentId>,
        channel_id: Option<ChannelId>,
    ) -> JoinHandle<()> {
        let reactions = Arc::clone(&self.reactions);
        let sender = self.msg_sender.clone();
        tokio::spawn(async move {
            let result = reactions
                .fetch_reactions(&comment_ids, channel_id.as_ref())
                .await;
            let msg = match result {
                Ok(()) => FeedMsg::ReactionsFetched {
                    token,
                    snapshot: reactions.snapshot(&comment_ids, channel_id.as_ref()),
                },
                Err(e) => {
                    log::warn!("Reactions for {} comments failed: {e}", comment_ids.len());
                    FeedMsg::ReactionsFetchFailed {
                        token,
                        error: e.to_string(),
                    }
                }
            };
            if sender.send(msg.into()).is_err() {
                log::debug!("Message channel closed before reactions {token:?} were delivered");
            }
        })
    }
}

/// Human-readable command names for logs
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::ResetComments { .. } => "ResetComments".to_string(),
            Cmd::FetchPage { request, .. } => format!("FetchPage({})", request.page),
            Cmd::FetchReactions { comment_ids, .. } => {
                format!("FetchReactions({})", comment_ids.len())
            }
            Cmd::PersistSortMode { .. } => "PersistSortMode".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
        }
    }
}
