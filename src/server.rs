//! Unix socket fan-out server.
//!
//! Every accepted connection gets its own hub subscription and its own
//! writer task, so one slow or dead subscriber never holds up the rest.

use crate::broadcaster::Broadcaster;
use log::{debug, error, warn};
use noticker_proto::{Notification, wire};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

/// Bind the fan-out socket, clearing any stale file a previous run left
/// behind. A failure here is fatal to the daemon.
pub fn bind(path: &Path) -> io::Result<UnixListener> {
    let _ = fs::remove_file(path);
    UnixListener::bind(path)
}

/// Accept subscribers forever, pushing every broadcast notification to
/// each of them as one JSON line.
pub async fn run(listener: UnixListener, hub: Arc<Broadcaster>) {
    loop {
        match listener.accept().await {
            Ok((stream, _)) => {
                debug!("Subscriber connected");
                tokio::spawn(handle_subscriber(stream, hub.subscribe()));
            }
            Err(err) => error!("Accept error: {err}"),
        }
    }
}

/// Forward notifications to one subscriber until it disconnects. Falling
/// behind the queue loses the oldest entries, never the connection.
async fn handle_subscriber(mut stream: UnixStream, mut rx: broadcast::Receiver<Notification>) {
    loop {
        let notification = match rx.recv().await {
            Ok(notification) => notification,
            Err(RecvError::Lagged(missed)) => {
                warn!("Subscriber too slow, dropped {missed} notifications");
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        let line = match wire::encode_line(&notification) {
            Ok(line) => line,
            Err(err) => {
                error!("Could not encode notification {}: {err}", notification.id);
                continue;
            }
        };

        if let Err(err) = stream.write_all(line.as_bytes()).await {
            debug!("Subscriber gone: {err}");
            break;
        }
    }
}
