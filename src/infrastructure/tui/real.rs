use std::{
    future::Future,
    io::{self, Stdout},
    pin::Pin,
    time::Duration,
};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event as CrosstermEvent, EventStream, KeyEventKind,
    },
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, prelude::Rect, Terminal};
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::infrastructure::tui::{Event, Frame, TuiLike};

pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

/// Crossterm-backed terminal with an async event stream and a tick timer
pub struct RealTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: Option<EventStream>,
    tick: Option<Interval>,
    tick_rate: Duration,
    initialized: bool,
    mouse: bool,
}

impl RealTui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            events: None,
            tick: None,
            tick_rate: DEFAULT_TICK_RATE,
            initialized: false,
            mouse: false,
        })
    }

    pub fn tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    fn translate(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            CrosstermEvent::Key(_) => None,
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::FocusGained => Some(Event::FocusGained),
            CrosstermEvent::FocusLost => Some(Event::FocusLost),
            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
        }
    }
}

impl TuiLike for RealTui {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;
        stdout.execute(EnableBracketedPaste)?;
        if self.mouse {
            stdout.execute(EnableMouseCapture)?;
        }
        self.terminal.clear()?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.events = None;
        self.tick = None;
        if terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            let mut stdout = io::stdout();
            if self.mouse {
                stdout.execute(DisableMouseCapture)?;
            }
            stdout.execute(DisableBracketedPaste)?;
            stdout.execute(LeaveAlternateScreen)?;
            stdout.execute(cursor::Show)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(async move {
            if !self.initialized {
                self.initialized = true;
                return Some(Event::Init);
            }

            let tick_rate = self.tick_rate;
            let tick = self.tick.get_or_insert_with(|| {
                let mut tick = interval(tick_rate);
                tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
                tick
            });
            let events = self.events.get_or_insert_with(EventStream::new);

            loop {
                tokio::select! {
                    _ = tick.tick() => return Some(Event::Tick),
                    maybe_event = events.next() => match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(event) = Self::translate(event) {
                                return Some(event);
                            }
                        }
                        Some(Err(err)) => {
                            log::error!("terminal event stream failed: {err}");
                            return Some(Event::Error);
                        }
                        None => return Some(Event::Closed),
                    },
                }
            }
        })
    }
}

impl Drop for RealTui {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            log::error!("failed to restore terminal: {err:?}");
        }
    }
}
