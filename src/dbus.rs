//! Session-bus receiver for desktop notifications.
//!
//! Design principles:
//! - Own the well-known `org.freedesktop.Notifications` name; a second
//!   daemon instance fails fast instead of queueing for it
//! - Stamp ids and expiry deadlines at arrival, before fan-out
//! - Carry sender hints structurally so consumers decide what they mean

use crate::broadcaster::Broadcaster;
use chrono::Utc;
use log::{debug, info};
use noticker_proto::{Notification, expiry_deadline};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use zbus::Connection;
use zbus::connection::Builder;
use zbus::zvariant::{OwnedValue, Value};

pub const BUS_NAME: &str = "org.freedesktop.Notifications";
pub const OBJECT_PATH: &str = "/org/freedesktop/Notifications";

/// Receiver half of the daemon.
///
/// One instance lives on the bus connection for the life of the process;
/// every accepted notification is handed to the [`Broadcaster`].
pub struct NotifyService {
    counter: AtomicI32,
    hub: Arc<Broadcaster>,
}

impl NotifyService {
    pub fn new(hub: Arc<Broadcaster>) -> Self {
        Self {
            counter: AtomicI32::new(0),
            hub,
        }
    }

    /// Assign an id, stamp the expiry deadline and hand the notification
    /// to the hub. Returns the id echoed back to the sender.
    ///
    /// A nonzero `replaces_id` is echoed literally without touching the
    /// counter, so replacement ids and fresh ids never drift apart.
    fn ingest(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<String>,
        hints: HashMap<String, serde_json::Value>,
        expire_timeout: i32,
    ) -> i32 {
        let id = if replaces_id != 0 {
            replaces_id as i32
        } else {
            self.counter.fetch_add(1, Ordering::SeqCst) + 1
        };

        info!("Message received from {app_name}, {summary} {body}");

        self.hub.send(Notification {
            id,
            sender: app_name.to_string(),
            summary: summary.to_string(),
            body: body.to_string(),
            icon: app_icon.to_string(),
            actions,
            hints,
            expires_at: expiry_deadline(Utc::now(), expire_timeout),
        });
        id
    }
}

#[zbus::interface(name = "org.freedesktop.Notifications")]
impl NotifyService {
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<String>,
        hints: HashMap<String, OwnedValue>,
        expire_timeout: i32,
    ) -> u32 {
        let hints = hints
            .iter()
            .map(|(key, value)| (key.clone(), hint_to_json(value)))
            .collect();
        self.ingest(
            app_name,
            replaces_id,
            app_icon,
            summary,
            body,
            actions,
            hints,
            expire_timeout,
        ) as u32
    }

    /// Accepted but not acted on; entries disappear through expiry.
    fn close_notification(&self, id: u32) {
        debug!("Ignoring CloseNotification for {id}");
    }

    fn get_capabilities(&self) -> Vec<String> {
        vec!["body".to_string()]
    }

    fn get_server_information(&self) -> (String, String, String, String) {
        (
            "noticker".to_string(),
            "noticker".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            "1.2".to_string(),
        )
    }
}

/// Claim the notification name on the session bus and serve the receiver
/// there. The returned connection must stay alive for the daemon to keep
/// receiving.
pub async fn serve(hub: Arc<Broadcaster>) -> zbus::Result<Connection> {
    let connection = Builder::session()?
        .serve_at(OBJECT_PATH, NotifyService::new(hub))?
        .name(BUS_NAME)?
        .build()
        .await?;

    info!("Listening on {BUS_NAME} / {OBJECT_PATH}");
    Ok(connection)
}

// ============ Hint conversion helpers ============

/// Convert one variant hint into JSON structurally, without interpreting
/// it. File descriptors have no JSON form and become null.
fn hint_to_json(value: &Value<'_>) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::U8(v) => Json::from(*v),
        Value::Bool(v) => Json::from(*v),
        Value::I16(v) => Json::from(*v),
        Value::U16(v) => Json::from(*v),
        Value::I32(v) => Json::from(*v),
        Value::U32(v) => Json::from(*v),
        Value::I64(v) => Json::from(*v),
        Value::U64(v) => Json::from(*v),
        Value::F64(v) => Json::from(*v),
        Value::Str(v) => Json::from(v.as_str()),
        Value::Signature(v) => Json::from(v.as_str()),
        Value::ObjectPath(v) => Json::from(v.as_str()),
        Value::Value(inner) => hint_to_json(inner),
        Value::Array(values) => Json::Array(values.iter().map(hint_to_json).collect()),
        Value::Dict(dict) => Json::Object(
            dict.iter()
                .map(|(key, value)| (key_to_string(key), hint_to_json(value)))
                .collect(),
        ),
        Value::Structure(structure) => {
            Json::Array(structure.fields().iter().map(hint_to_json).collect())
        }
        _ => Json::Null,
    }
}

/// Dict keys on the bus are basic types; non-string keys keep their
/// display form so nothing is lost.
fn key_to_string(key: &Value<'_>) -> String {
    match key {
        Value::Str(s) => s.as_str().to_string(),
        other => other.to_string(),
    }
}
