//! Shared protocol pieces for the noticker daemon and its clients.
//!
//! Everything both halves of the system must agree on lives here: the
//! notification data model, the JSON line codec spoken over the socket,
//! and the rendezvous path of the socket itself.

pub mod error;
pub mod socket;
pub mod types;
pub mod wire;

pub use error::WireError;
pub use socket::socket_path;
pub use types::{DEFAULT_EXPIRATION_MS, Notification, expiry_deadline};
