use clap::Parser;

use crate::{
    domain::{ChannelId, CommentId, ContentRef, SortMode},
    utils::version,
};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Content URI whose comments are shown
    #[arg(value_name = "URI", value_parser = parse_content_ref)]
    pub content: ContentRef,

    /// Initial ordering (new, best, controversial); defaults to the saved preference
    #[arg(short, long, value_name = "MODE", value_parser = parse_sort_mode)]
    pub sort: Option<SortMode>,

    /// Top-level comments per page, overriding the config file
    #[arg(short, long, value_name = "COUNT", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Comment to promote to the top of the feed
    #[arg(short, long, value_name = "COMMENT_ID")]
    pub linked_comment: Option<CommentId>,

    /// Channel to react as, overriding the config file
    #[arg(short, long, value_name = "CHANNEL_ID")]
    pub channel: Option<ChannelId>,

    /// Number of generated comments in the demo store
    #[arg(long, value_name = "COUNT", default_value_t = 23)]
    pub seed_comments: usize,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,
}

fn parse_content_ref(raw: &str) -> Result<ContentRef, String> {
    ContentRef::new(raw).map_err(|e| e.to_string())
}

fn parse_sort_mode(raw: &str) -> Result<SortMode, String> {
    raw.parse::<SortMode>()
        .map_err(|_| format!("unknown sort mode '{raw}', expected new, best or controversial"))
}
