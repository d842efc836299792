//! Reconnecting socket subscriber.
//!
//! The client never gives up on the daemon: a refused connection, a
//! dropped stream and a clean close all land in the same retry loop.

use crate::feed::Feed;
use log::{debug, info, warn};
use noticker_proto::wire;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixStream;
use tokio::time::sleep;

/// Delay between reconnect attempts once the stream is gone.
const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Keep the feed fed from the daemon socket, retrying forever.
pub async fn run(path: PathBuf, feed: Arc<Feed>) {
    loop {
        match read_stream(&path, &feed).await {
            Ok(()) => info!("Connection closed"),
            Err(err) => warn!("Connection lost: {err}"),
        }
        sleep(RECONNECT_DELAY).await;
    }
}

/// Drain one connection until EOF or a read error. Lines that fail to
/// decode are skipped so one bad entry cannot stall the stream.
async fn read_stream(path: &Path, feed: &Feed) -> io::Result<()> {
    let stream = UnixStream::connect(path).await?;
    debug!("Connected to {}", path.display());

    let mut lines = BufReader::new(stream).lines();
    while let Some(line) = lines.next_line().await? {
        match wire::decode_line(&line) {
            Ok(notification) => feed.insert(notification),
            Err(err) => warn!("Could not decode: {err}"),
        }
    }
    Ok(())
}
