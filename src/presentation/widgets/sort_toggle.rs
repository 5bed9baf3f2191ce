use ratatui::prelude::*;

use crate::domain::SortMode;

/// Best / Controversial / New selector, the active mode highlighted
pub struct SortToggle {
    active: SortMode,
}

impl SortToggle {
    pub fn new(active: SortMode) -> Self {
        Self { active }
    }
}

impl From<SortToggle> for Line<'_> {
    fn from(value: SortToggle) -> Self {
        let mut spans = Vec::new();
        for (index, mode) in SortMode::toggle_order().iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            let label = format!("{} {}", index + 1, mode.label());
            let style = if *mode == value.active {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(label, style));
        }
        Line::from(spans)
    }
}
