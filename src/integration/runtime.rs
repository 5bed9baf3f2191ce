use std::{collections::VecDeque, sync::Arc};

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::Cmd, cmd_executor::CmdExecutor, msg::Msg, raw_msg::RawMsg, state::AppState,
        translator::translate_raw_to_domain, update::update,
    },
    infrastructure::store::{CommentStore, PreferenceStore, ReactionStore},
};

/// The stores commands are executed against
#[derive(Clone)]
pub struct Stores {
    pub comments: Arc<dyn CommentStore>,
    pub reactions: Arc<dyn ReactionStore>,
    pub preferences: Arc<dyn PreferenceStore>,
}

/// Owns the state and drives the update cycle
///
/// Raw input is translated to messages, messages are folded into the state,
/// and the resulting commands are handed to the executor. Completions from
/// the executor's tasks arrive on the message channel.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    cmd_executor: Option<CmdExecutor>,
}

impl Runtime {
    /// Create a runtime without an executor; commands only queue up
    pub fn new(initial_state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            cmd_executor: None,
        }
    }

    pub fn new_with_stores(initial_state: AppState, stores: Stores) -> Self {
        let mut runtime = Self::new(initial_state);
        runtime.cmd_executor = Some(CmdExecutor::new(
            stores.comments,
            stores.reactions,
            stores.preferences,
            runtime.msg_tx.clone(),
        ));
        runtime
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(
        &mut self,
        render_sender: mpsc::UnboundedSender<()>,
    ) -> Result<(), String> {
        if let Some(executor) = &mut self.cmd_executor {
            executor.set_render_request_sender(render_sender);
            Ok(())
        } else {
            Err("No executor available. Use new_with_stores() first.".to_string())
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn has_queued_messages(&self) -> bool {
        !self.msg_queue.is_empty() || !self.raw_msg_queue.is_empty()
    }

    /// Wait for the next message from the outside (store completions)
    pub async fn recv_msg(&mut self) -> Option<Msg> {
        self.msg_rx.recv().await
    }

    /// Drain commands produced so far without executing them
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands, returning descriptions of any failures
    pub fn execute_pending_commands(&mut self) -> Result<Vec<String>, String> {
        let Some(executor) = &self.cmd_executor else {
            return Err("No command executor available. Use new_with_stores() first.".to_string());
        };

        let commands: Vec<Cmd> = self.cmd_queue.drain(..).collect();
        if commands.is_empty() {
            return Ok(vec![]);
        }
        Ok(executor.execute_commands(&commands))
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update(msg, state);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all queued raw and domain messages
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::trace!("raw message: {raw_msg:?}");
            }
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        while let Ok(msg) = self.msg_rx.try_recv() {
            self.msg_queue.push_back(msg);
        }

        let mut all_commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }
        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<Vec<String>, String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{feed::FeedMsg, system::SystemMsg, ui::UiMsg},
            state::feed::FeedPhase,
        },
        domain::{ContentRef, SortMode},
        infrastructure::{
            memory::{InMemoryCommentStore, InMemoryReactionStore},
            preference::MemoryPreferenceStore,
        },
    };

    fn content() -> ContentRef {
        ContentRef::new("lbry://abc").expect("valid content ref")
    }

    fn stores(count: usize) -> Stores {
        Stores {
            comments: Arc::new(InMemoryCommentStore::seeded(&content(), count)),
            reactions: Arc::new(InMemoryReactionStore::new()),
            preferences: Arc::new(MemoryPreferenceStore::new()),
        }
    }

    fn initialize() -> Msg {
        Msg::Feed(FeedMsg::Initialize {
            content_ref: content(),
            sort_mode: SortMode::Newest,
        })
    }

    #[test]
    fn test_commands_queue_without_executor() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.send_msg(initialize());
        let commands = runtime.process_all_messages();

        assert_eq!(commands.len(), 2);
        assert_eq!(runtime.pending_commands(), commands);
        assert!(runtime.execute_pending_commands().is_err());
    }

    #[test]
    fn test_raw_messages_are_translated() {
        let mut runtime = Runtime::new(AppState::default());
        runtime.send_raw_msg(RawMsg::Quit);
        assert!(runtime.has_queued_messages());
        runtime.process_all_messages();
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_external_sender_feeds_update() {
        let mut runtime = Runtime::new(AppState::default());
        let sender = runtime.get_sender();
        sender
            .send(Msg::System(SystemMsg::UpdateStatusMessage("hi".to_string())))
            .expect("channel open");
        runtime.process_all_messages();
        assert_eq!(runtime.state().system.status_message.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_update_cycle_loads_first_page() -> Result<(), String> {
        let mut runtime = Runtime::new_with_stores(AppState::default(), stores(3));
        runtime.send_msg(initialize());
        runtime.run_update_cycle()?;

        // Page, then reactions
        for _ in 0..2 {
            let msg = runtime.recv_msg().await.ok_or("channel closed")?;
            runtime.send_msg(msg);
            runtime.run_update_cycle()?;
        }

        let feed = &runtime.state().feed;
        assert_eq!(feed.phase(), FeedPhase::Ready);
        assert_eq!(feed.visible_comments().len(), 3);
        assert!(!feed.has_more());

        runtime.send_msg(Msg::Ui(UiMsg::ScrollToBottom));
        runtime.run_update_cycle()?;
        assert_eq!(runtime.state().ui.selected_index(), Some(2));
        Ok(())
    }
}
