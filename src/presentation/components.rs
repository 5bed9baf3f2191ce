//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{sentinel::FeedGeometry, widgets::status_bar::StatusBarWidget},
};

pub mod feed;

pub use feed::FeedComponent;

/// Collection of all components
pub struct Components {
    pub feed: FeedComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            feed: FeedComponent::new(),
        }
    }

    /// Render the whole screen, returning the geometry of the feed list
    pub fn render(&self, frame: &mut Frame, state: &AppState) -> FeedGeometry {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(frame.area());

        let geometry = self.feed.draw(state, frame, main_area);

        let status_bar = StatusBarWidget::new(
            state.feed.content_ref(),
            state.system.status_message.as_deref(),
        );
        frame.render_widget(status_bar, status_area);

        geometry
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
