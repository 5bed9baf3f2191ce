//! Display ordering for the top-level comment list

use super::comment::CommentRecord;

/// Order top-level comments for display, surfacing a deep-linked comment
///
/// - No linked comment: the list is returned in store order.
/// - Linked root comment: it goes first and any other copy is dropped.
/// - Linked reply: its parent goes first if the parent is in the list;
///   the reply itself is left to the nested thread view.
pub fn order_for_display<'a>(
    comments: &'a [CommentRecord],
    linked: Option<&'a CommentRecord>,
) -> Vec<&'a CommentRecord> {
    let Some(linked) = linked else {
        return comments.iter().collect();
    };

    match &linked.parent_id {
        None => std::iter::once(linked)
            .chain(comments.iter().filter(|c| c.id != linked.id))
            .collect(),
        Some(parent_id) => match comments.iter().find(|c| &c.id == parent_id) {
            Some(parent) => std::iter::once(parent)
                .chain(comments.iter().filter(|c| &c.id != parent_id))
                .collect(),
            None => comments.iter().collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn comments(ids: &[&str]) -> Vec<CommentRecord> {
        ids.iter()
            .map(|id| CommentRecord::new(*id, "author", format!("comment {id}")))
            .collect()
    }

    fn ids(ordered: &[&CommentRecord]) -> Vec<String> {
        ordered.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_without_linked_comment_is_identity() {
        let list = comments(&["1", "2", "3"]);
        let ordered = order_for_display(&list, None);
        assert_eq!(ids(&ordered), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_linked_root_moves_to_front() {
        let list = comments(&["1", "2", "3"]);
        let linked = CommentRecord::new("2", "author", "comment 2");
        let ordered = order_for_display(&list, Some(&linked));
        assert_eq!(ids(&ordered), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_linked_root_not_yet_loaded_is_prepended() {
        let list = comments(&["1", "2"]);
        let linked = CommentRecord::new("9", "author", "comment 9");
        let ordered = order_for_display(&list, Some(&linked));
        assert_eq!(ids(&ordered), vec!["9", "1", "2"]);
    }

    #[test]
    fn test_linked_reply_hoists_parent() {
        let list = vec![
            CommentRecord::new("1", "author", "root"),
            CommentRecord::new("2", "author", "reply").with_parent("1"),
        ];
        let linked = CommentRecord::new("3", "author", "deep reply").with_parent("1");
        let ordered = order_for_display(&list, Some(&linked));
        assert_eq!(ids(&ordered), vec!["1", "2"]);
    }

    #[test]
    fn test_linked_reply_moves_parent_from_middle() {
        let list = comments(&["1", "2", "3"]);
        let linked = CommentRecord::new("7", "author", "reply").with_parent("3");
        let ordered = order_for_display(&list, Some(&linked));
        assert_eq!(ids(&ordered), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_linked_reply_with_missing_parent_is_identity() {
        let list = comments(&["1", "2"]);
        let linked = CommentRecord::new("7", "author", "reply").with_parent("42");
        let ordered = order_for_display(&list, Some(&linked));
        assert_eq!(ids(&ordered), vec!["1", "2"]);
    }
}
