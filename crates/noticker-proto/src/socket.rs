//! Default socket location shared by the daemon and its clients.

use log::debug;
use std::env;
use std::fs;
use std::path::PathBuf;

const SOCKET_DIR: &str = "noticker";
const SOCKET_FILE: &str = "noticker.sock";

/// Resolve the rendezvous socket path, preferring the user cache
/// directory and falling back to the system temp directory. The parent
/// directory is created along the way when missing.
pub fn socket_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(env::temp_dir);
    let dir = base.join(SOCKET_DIR);
    if let Err(err) = fs::create_dir_all(&dir) {
        debug!("Could not create {}: {err}", dir.display());
    }
    dir.join(SOCKET_FILE)
}
