//! noticker - desktop notification fan-out.
//!
//! The daemon half receives notifications on the session bus and fans
//! them out over a Unix socket; the client half keeps a self-pruning
//! feed of them and renders it once per second.

pub mod broadcaster;
pub mod client;
pub mod config;
pub mod dbus;
pub mod feed;
pub mod render;
pub mod server;

pub use broadcaster::Broadcaster;
pub use feed::Feed;
