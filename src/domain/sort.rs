use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Ordering requested from the comment store
///
/// The wire names match what the store expects and what is persisted
/// under the sort preference key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum SortMode {
    #[strum(serialize = "new")]
    #[serde(rename = "new")]
    Newest,
    #[strum(serialize = "best")]
    #[serde(rename = "best")]
    Popularity,
    #[strum(serialize = "controversial")]
    #[serde(rename = "controversial")]
    Controversy,
}

impl SortMode {
    /// Best-first only makes sense when reactions are fetched
    pub fn default_for(reactions_enabled: bool) -> Self {
        if reactions_enabled {
            SortMode::Popularity
        } else {
            SortMode::Newest
        }
    }

    /// Label shown on the sort toggle
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "New",
            SortMode::Popularity => "Best",
            SortMode::Controversy => "Controversial",
        }
    }

    /// Order of the toggles on the feed card
    pub fn toggle_order() -> [SortMode; 3] {
        [SortMode::Popularity, SortMode::Controversy, SortMode::Newest]
    }

    /// Next mode in toggle order, wrapping around
    pub fn next(&self) -> Self {
        let order = Self::toggle_order();
        let index = order.iter().position(|mode| mode == self).unwrap_or(0);
        order[(index + 1) % order.len()]
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("new", SortMode::Newest)]
    #[case("best", SortMode::Popularity)]
    #[case("controversial", SortMode::Controversy)]
    #[case("BEST", SortMode::Popularity)]
    fn test_sort_mode_from_str(#[case] input: &str, #[case] expected: SortMode) {
        assert_eq!(SortMode::from_str(input), Ok(expected));
    }

    #[test]
    fn test_sort_mode_display_matches_wire_name() {
        assert_eq!(SortMode::Newest.to_string(), "new");
        assert_eq!(SortMode::Popularity.to_string(), "best");
        assert_eq!(SortMode::Controversy.to_string(), "controversial");
    }

    #[test]
    fn test_sort_mode_serde_uses_wire_name() {
        assert_eq!(
            serde_json::to_string(&SortMode::Controversy).ok(),
            Some("\"controversial\"".to_string())
        );
    }

    #[test]
    fn test_default_depends_on_reactions() {
        assert_eq!(SortMode::default_for(true), SortMode::Popularity);
        assert_eq!(SortMode::default_for(false), SortMode::Newest);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(SortMode::Popularity.next(), SortMode::Controversy);
        assert_eq!(SortMode::Controversy.next(), SortMode::Newest);
        assert_eq!(SortMode::Newest.next(), SortMode::Popularity);
    }
}
