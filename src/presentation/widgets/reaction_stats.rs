use ratatui::prelude::*;
use thousands::Separable;

use crate::domain::ReactionSummary;

/// One-line footer under a comment: reactions, replies and support
pub struct ReactionStats {
    reactions: Option<ReactionSummary>,
    replies: u32,
    support_amount: f64,
}

impl ReactionStats {
    pub fn new(reactions: Option<ReactionSummary>, replies: u32, support_amount: f64) -> Self {
        Self {
            reactions,
            replies,
            support_amount,
        }
    }
}

impl From<ReactionStats> for Line<'_> {
    fn from(value: ReactionStats) -> Self {
        let mut spans = Vec::new();

        if let Some(reactions) = value.reactions {
            let like_style = if reactions.mine.liked {
                Style::default().fg(Color::LightRed).bold()
            } else {
                Style::default().fg(Color::LightRed)
            };
            let dislike_style = if reactions.mine.disliked {
                Style::default().fg(Color::LightBlue).bold()
            } else {
                Style::default().fg(Color::LightBlue)
            };
            spans.push(Span::styled(
                format!("{}Likes", reactions.likes().separate_with_commas()),
                like_style,
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{}Dislikes", reactions.dislikes().separate_with_commas()),
                dislike_style,
            ));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(
            format!("{}Replies", value.replies.separate_with_commas()),
            Style::default().fg(Color::LightGreen),
        ));

        if value.support_amount > 0.0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{:.2}LBC", value.support_amount),
                Style::default().fg(Color::LightYellow),
            ));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{MyReaction, ReactionCounts};

    fn plain(line: Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_without_reactions() {
        let line: Line = ReactionStats::new(None, 3, 0.0).into();
        assert_eq!(plain(line), "3Replies");
    }

    #[test]
    fn test_with_reactions_and_support() {
        let summary = ReactionSummary {
            counts: ReactionCounts::new(1200, 4),
            mine: MyReaction {
                liked: true,
                disliked: false,
            },
        };
        let line: Line = ReactionStats::new(Some(summary), 0, 1.5).into();
        assert_eq!(plain(line), "1,201Likes 4Dislikes 0Replies 1.50LBC");
    }
}
