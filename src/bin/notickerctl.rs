//! notickerctl - live notification ticker for the terminal.

use noticker::Feed;
use noticker::config::CtlConfig;
use noticker::{client, render};
use noticker_proto::socket_path;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = CtlConfig::default_path()
        .map(|path| CtlConfig::load(&path))
        .unwrap_or_default();

    let feed = if config.replace_duplicates {
        Arc::new(Feed::with_replacement())
    } else {
        Arc::new(Feed::new())
    };

    tokio::spawn(client::run(socket_path(), feed.clone()));
    render::run(feed).await;
}
