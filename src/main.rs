use std::{sync::Arc, time::Duration};

use clap::Parser;
use color_eyre::eyre::Result;

use threadline::{
    core::msg::{feed::FeedMsg, Msg},
    domain::SortMode,
    infrastructure::{
        cli::Cli,
        config::Config,
        memory::{demo_comments, InMemoryCommentStore, InMemoryReactionStore},
        preference::FilePreferenceStore,
        store::load_sort_mode,
        tui::real::RealTui,
    },
    integration::{app_runner::AppRunner, runtime::Stores},
    utils::{get_data_dir, initialize_logging, initialize_panic_handler},
    AppState,
};

const PREFERENCES_FILE: &str = "preferences.json";

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let mut config = Config::new()?;
    if let Some(page_size) = args.page_size {
        config.comments.page_size = page_size;
    }
    if let Some(channel) = args.channel.clone() {
        config.viewer.active_channel_id = Some(channel);
    }

    // The demo store serves generated comments for whatever URI was given
    let seeded = demo_comments(args.seed_comments);
    let stores = Stores {
        comments: Arc::new(InMemoryCommentStore::seeded(&args.content, args.seed_comments)),
        reactions: Arc::new(InMemoryReactionStore::seeded(&seeded)),
        preferences: Arc::new(FilePreferenceStore::new(
            get_data_dir().join(PREFERENCES_FILE),
        )),
    };

    let sort_mode = match args.sort {
        Some(sort_mode) => sort_mode,
        None => {
            let fallback = SortMode::default_for(config.comments.reactions_enabled);
            load_sort_mode(stores.preferences.as_ref(), fallback).await
        }
    };
    let linked = args.linked_comment.as_ref().and_then(|id| {
        let found = seeded.iter().find(|comment| &comment.id == id).cloned();
        if found.is_none() {
            log::warn!("Linked comment {id} not found");
        }
        found
    });

    let tick_rate = Duration::from_secs_f64(1.0 / args.tick_rate.max(0.1));
    let tui = RealTui::new()?.tick_rate(tick_rate);

    let mut runner = AppRunner::new(AppState::new_with_config(&config), stores, tui)?;
    runner.dispatch(Msg::Feed(FeedMsg::ActiveChannelChanged(
        config.viewer.active_channel_id.clone(),
    )));
    runner.dispatch(Msg::Feed(FeedMsg::LinkedCommentSet(linked)));
    runner.dispatch(Msg::Feed(FeedMsg::Initialize {
        content_ref: args.content,
        sort_mode,
    }));
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
