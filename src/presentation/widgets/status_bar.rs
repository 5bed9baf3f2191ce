use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::ContentRef;

pub const KEY_HINTS: &str = "j/k move  s sort  1-3 pick sort  r refresh  q quit";

/// Two rows under the card: what is being viewed, then the latest status message
pub struct StatusBarWidget<'a> {
    content_ref: Option<&'a ContentRef>,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(content_ref: Option<&'a ContentRef>, message: Option<&'a str>) -> Self {
        Self {
            content_ref,
            message,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [info_area, message_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let content = self
            .content_ref
            .map(ContentRef::to_string)
            .unwrap_or_default();
        Paragraph::new(Line::from(vec![
            Span::styled(content, Style::default().fg(Color::Gray).italic()),
            Span::raw("  "),
            Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        ]))
        .style(Style::default().bg(Color::Black))
        .render(info_area, buf);

        Paragraph::new(self.message.unwrap_or_default()).render(message_area, buf);
    }
}
