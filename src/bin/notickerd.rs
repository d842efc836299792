//! notickerd - session-bus notification daemon with socket fan-out.

use log::info;
use noticker::Broadcaster;
use noticker::{dbus, server};
use noticker_proto::socket_path;
use std::error::Error;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let hub = Arc::new(Broadcaster::new());

    // The connection must outlive the accept loop or the bus name is lost.
    let _connection = dbus::serve(hub.clone()).await?;

    let path = socket_path();
    let listener = server::bind(&path)?;
    info!("Socket bound at {}", path.display());

    server::run(listener, hub).await;
    Ok(())
}
