use ratatui::{prelude::*, widgets::*};
use tui_widget_list::{ListBuilder, ListState, ListView};

use crate::{
    core::state::{feed::FeedView, AppState},
    infrastructure::tui::Frame,
    presentation::{
        sentinel::FeedGeometry,
        widgets::{comment_item::CommentItem, sort_toggle::SortToggle},
    },
};

pub const EMPTY_STATE_MESSAGE: &str = "That was pretty deep. What do you think?";
pub const SENTINEL_MESSAGE: &str = "Loading comments...";

/// Card title reflecting the number of top-level comments
pub fn card_title(total_count: usize) -> String {
    match total_count {
        0 => "Leave a comment".to_string(),
        1 => "1 comment".to_string(),
        n => format!("{n} comments"),
    }
}

/// Stateless renderer for the comment card
///
/// Draws the title, sort toggles, comment list and the loading sentinel,
/// then reports the geometry it drew so the runner can decide whether the
/// sentinel was seen.
#[derive(Debug, Clone, Default)]
pub struct FeedComponent;

impl FeedComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, area: Rect) -> FeedGeometry {
        let view = state.feed.view();

        let card = Block::default()
            .title(card_title(view.total_count))
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1));
        let inner = card.inner(area);
        f.render_widget(card, area);

        let show_toggles = view.shows_sort_toggles();
        let show_error = view.error.is_some();
        let show_sentinel = view.shows_sentinel();
        let [toggle_area, error_area, list_area, sentinel_area] = Layout::vertical([
            Constraint::Length(u16::from(show_toggles)),
            Constraint::Length(u16::from(show_error)),
            Constraint::Min(0),
            Constraint::Length(u16::from(show_sentinel)),
        ])
        .areas(inner);

        if show_toggles {
            f.render_widget(
                Paragraph::new(Line::from(SortToggle::new(view.sort_mode))),
                toggle_area,
            );
        }
        if let Some(error) = &view.error {
            f.render_widget(
                Paragraph::new(format!("Failed to load comments: {error} (r to retry)"))
                    .style(Style::default().fg(Color::Red)),
                error_area,
            );
        }
        if show_sentinel {
            f.render_widget(
                Paragraph::new(SENTINEL_MESSAGE)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                sentinel_area,
            );
        }

        let selected = state.ui.selected_index();
        let (item_count, content_height) = self.draw_list(&view, selected, f, list_area);

        FeedGeometry {
            item_count,
            content_height,
            viewport_height: list_area.height,
            selected,
            sentinel_drawn: show_sentinel,
            is_loading: view.is_loading,
        }
    }

    fn draw_list(
        &self,
        view: &FeedView,
        selected: Option<usize>,
        f: &mut Frame<'_>,
        area: Rect,
    ) -> (usize, u16) {
        if view.items.is_empty() {
            if view.shows_empty_state() {
                f.render_widget(
                    Paragraph::new(EMPTY_STATE_MESSAGE)
                        .style(Style::default().fg(Color::DarkGray))
                        .alignment(Alignment::Center),
                    area,
                );
            }
            return (0, 0);
        }

        let items: Vec<(CommentItem, u16)> = view
            .items
            .iter()
            .map(|item| {
                let widget = CommentItem::new(item.clone(), Padding::ZERO);
                let height = widget.calculate_height(&area);
                (widget, height)
            })
            .collect();
        let item_count = items.len();
        let content_height = items
            .iter()
            .fold(0u16, |acc, (_, height)| acc.saturating_add(*height));

        let builder = ListBuilder::new(move |context| {
            let (mut widget, height) = items[context.index].clone();
            widget.highlight = context.is_selected;
            (widget, height)
        });

        let mut list_state = ListState::default();
        list_state.select(selected);

        let list = ListView::new(builder, item_count);
        f.render_stateful_widget(list, area, &mut list_state);

        (item_count, content_height)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "Leave a comment")]
    #[case(1, "1 comment")]
    #[case(12, "12 comments")]
    fn test_card_title(#[case] total: usize, #[case] expected: &str) {
        assert_eq!(card_title(total), expected);
    }
}
