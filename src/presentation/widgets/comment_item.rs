use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::feed::FeedItem,
    domain::text::{truncate_lines, wrap_text},
    presentation::widgets::reaction_stats::ReactionStats,
};

/// Bodies longer than this are cut with an ellipsis line
pub const MAX_BODY_LINES: usize = 8;

#[derive(Clone, Debug)]
pub struct CommentItem {
    pub item: FeedItem,
    pub padding: Padding, // Only use to calc width/height
    pub highlight: bool,
}

impl CommentItem {
    pub fn new(item: FeedItem, padding: Padding) -> Self {
        Self {
            item,
            padding,
            highlight: false,
        }
    }

    fn content_width(&self, area_width: u16) -> usize {
        area_width.saturating_sub(self.padding.left + self.padding.right) as usize
    }

    fn header(&self) -> Line<'static> {
        let comment = &self.item.comment;
        let mut name_style = if self.item.is_mine {
            Style::default().fg(Color::LightYellow).bold()
        } else {
            Style::default().fg(Color::Cyan).bold()
        };
        if self.highlight {
            name_style = name_style.reversed();
        }

        let mut spans = vec![Span::styled(comment.author_name.clone(), name_style)];
        if self.item.is_mine {
            spans.push(Span::styled(" (you)", Style::default().fg(Color::LightYellow)));
        }
        if comment.pinned {
            spans.push(Span::styled(" [pinned]", Style::default().fg(Color::Magenta)));
        }
        if self.item.is_linked {
            spans.push(Span::styled(" [linked]", Style::default().fg(Color::LightGreen)));
        }
        Line::from(spans)
    }

    fn body(&self, width: usize) -> Vec<Line<'static>> {
        truncate_lines(wrap_text(&self.item.comment.body, width), MAX_BODY_LINES)
            .into_iter()
            .map(Line::from)
            .collect()
    }

    /// All rows of the item for a given area width
    pub fn lines(&self, area_width: u16) -> Vec<Line<'static>> {
        let width = self.content_width(area_width);
        let comment = &self.item.comment;

        let mut lines = vec![self.header()];
        lines.extend(self.body(width));
        lines.push(Line::styled(
            comment.posted_at_local(),
            Style::default().fg(Color::Gray),
        ));
        lines.push(
            ReactionStats::new(
                self.item.reactions,
                comment.direct_reply_count,
                comment.support_amount,
            )
            .into(),
        );
        lines.push(Line::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        ));
        lines
    }

    pub fn calculate_height(&self, area: &Rect) -> u16 {
        self.lines(area.width).len() as u16
    }
}

impl Widget for CommentItem {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines(area.width);
        Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(
                self.padding.left,
                self.padding.right,
                0,
                0,
            )))
            .render(area, buf);
    }
}
