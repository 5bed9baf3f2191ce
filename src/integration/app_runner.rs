use color_eyre::eyre::{Error, Result};
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    core::{msg::Msg, raw_msg::RawMsg, state::AppState},
    infrastructure::tui::{self, TuiLike},
    integration::runtime::{Runtime, Stores},
    presentation::{components::Components, sentinel::SentinelObserver},
};

/// Drives the runtime from terminal input and store completions
///
/// Each turn runs one update cycle, renders when a render was requested,
/// feeds the drawn geometry to the sentinel observer, and then waits for
/// the next terminal event or completion message.
pub struct AppRunner<T: TuiLike> {
    runtime: Runtime,
    tui: T,
    components: Components,
    observer: SentinelObserver,
    render_rx: mpsc::UnboundedReceiver<()>,
    needs_render: bool,
    input_open: bool,
}

impl<T: TuiLike> AppRunner<T> {
    pub fn new(initial_state: AppState, stores: Stores, tui: T) -> Result<Self> {
        let mut runtime = Runtime::new_with_stores(initial_state, stores);
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime
            .add_render_request_sender(render_tx)
            .map_err(Error::msg)?;

        Ok(Self {
            runtime,
            tui,
            components: Components::new(),
            observer: SentinelObserver::new(),
            render_rx,
            needs_render: true,
            input_open: true,
        })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Queue a message to be processed on the next turn
    pub fn dispatch(&mut self, msg: Msg) {
        self.runtime.send_msg(msg);
    }

    /// Run until quit, or until input is exhausted and no request is outstanding
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop().await;
        self.tui.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            self.turn()?;

            if self.runtime.state().system.should_quit {
                break;
            }
            if self.runtime.has_queued_messages() {
                continue;
            }
            if !self.input_open && !self.runtime.state().feed.is_busy() {
                break;
            }

            tokio::select! {
                event = self.tui.next(), if self.input_open => match event {
                    Some(event) => self.handle_event(event)?,
                    None => self.input_open = false,
                },
                msg = self.runtime.recv_msg() => match msg {
                    Some(msg) => self.runtime.send_msg(msg),
                    None => break,
                },
            }
        }
        Ok(())
    }

    /// One update cycle followed by a render if one is due
    fn turn(&mut self) -> Result<()> {
        match self.runtime.run_update_cycle() {
            Ok(failures) => {
                for failure in failures {
                    self.runtime.send_raw_msg(RawMsg::Error(failure));
                }
            }
            Err(e) => {
                log::error!("Runtime error: {e}");
                self.runtime.send_raw_msg(RawMsg::Error(e));
            }
        }

        while self.render_rx.try_recv().is_ok() {
            self.needs_render = true;
        }
        if self.needs_render {
            self.render()?;
        }
        Ok(())
    }

    fn handle_event(&mut self, event: tui::Event) -> Result<()> {
        match event {
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Resize(width, height) => {
                self.tui.resize(Rect::new(0, 0, width, height))?;
                self.runtime.send_raw_msg(RawMsg::Resize(width, height));
                self.needs_render = true;
            }
            tui::Event::Init | tui::Event::FocusGained => self.needs_render = true,
            tui::Event::Error => {
                self.runtime
                    .send_raw_msg(RawMsg::Error("terminal input failed".to_string()));
            }
            tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::FocusLost | tui::Event::Paste(_) | tui::Event::Mouse(_) => {}
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &self.components;
        let mut geometry = None;
        self.tui.draw(&mut |frame| {
            geometry = Some(components.render(frame, state));
        })?;
        self.needs_render = false;

        if let Some(geometry) = geometry {
            if self.observer.observe(&geometry) {
                log::debug!("Sentinel visible at {} items", geometry.item_count);
                self.runtime.send_raw_msg(RawMsg::SentinelVisible);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::feed::FeedMsg,
            state::feed::{FeedPhase, FeedSettings},
        },
        domain::{ContentRef, SortMode},
        infrastructure::{
            memory::{InMemoryCommentStore, InMemoryReactionStore},
            preference::MemoryPreferenceStore,
            tui::test::TestTui,
        },
    };

    fn content() -> ContentRef {
        ContentRef::new("lbry://abc").expect("valid content ref")
    }

    fn runner(count: usize, height: u16, events: Vec<tui::Event>) -> Result<AppRunner<TestTui>> {
        let stores = Stores {
            comments: Arc::new(InMemoryCommentStore::seeded(&content(), count)),
            reactions: Arc::new(InMemoryReactionStore::new()),
            preferences: Arc::new(MemoryPreferenceStore::new()),
        };
        let state = AppState::new(FeedSettings {
            page_size: 5,
            reactions_enabled: true,
        });
        let mut runner = AppRunner::new(state, stores, TestTui::with_events(80, height, events)?)?;
        runner.dispatch(Msg::Feed(FeedMsg::Initialize {
            content_ref: content(),
            sort_mode: SortMode::Newest,
        }));
        Ok(runner)
    }

    #[tokio::test]
    async fn test_runs_until_idle_and_renders() -> Result<()> {
        let mut runner = runner(3, 40, vec![tui::Event::Init])?;
        runner.run().await?;

        assert_eq!(runner.state().feed.phase(), FeedPhase::Ready);
        assert_eq!(runner.state().feed.visible_comments().len(), 3);
        assert!(runner.tui().draw_count() > 0);
        let screen = runner.tui().lines().join("\n");
        assert!(screen.contains("3 comments"));
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_key_stops_loop() -> Result<()> {
        let mut runner = runner(3, 40, vec![TestTui::key(KeyCode::Char('q'))])?;
        runner.run().await?;
        assert!(runner.state().system.should_quit);
        Ok(())
    }

    #[tokio::test]
    async fn test_short_feed_pulls_every_page_through_sentinel() -> Result<()> {
        // Twelve comments fit on a 120 row terminal, so the sentinel stays in view
        let mut runner = runner(12, 120, vec![tui::Event::Init])?;
        runner.run().await?;

        let feed = &runner.state().feed;
        assert_eq!(feed.visible_comments().len(), 12);
        assert_eq!(feed.total_pages(), Some(3));
        assert!(!feed.has_more());
        Ok(())
    }
}
