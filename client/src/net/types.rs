//! Shared DTOs for the record-store boundary.
//!
//! DESIGN
//! ======
//! REST payloads are schema-stable and derive serde; live-push records arrive
//! as loose `serde_json::Value` payloads and are parsed by tolerant helpers in
//! `live_client` so one malformed record never poisons a snapshot. Records
//! reference each other by [`liveq::Pointer`]; the `*Ref` types below are the
//! by-value handles the UI passes around, converted to pointers only at the
//! store boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use liveq::Pointer;
use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user record identifier.
    #[serde(rename = "object_id")]
    pub id: String,
    /// Display name shown on message rows.
    pub username: String,
}

/// A chat channel record from the store's channel collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Unique channel record identifier.
    #[serde(rename = "object_id")]
    pub id: String,
    /// Human-readable channel name, rendered as `#name`.
    pub name: String,
}

/// Lightweight by-value reference to a channel record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelRef {
    pub id: String,
}

impl ChannelRef {
    /// Pointer form used in queries and create payloads.
    #[must_use]
    pub fn to_pointer(&self) -> Pointer {
        Pointer::new("channel", &self.id)
    }
}

impl From<&Channel> for ChannelRef {
    fn from(channel: &Channel) -> Self {
        Self { id: channel.id.clone() }
    }
}

/// Lightweight by-value reference to a user record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRef {
    pub id: String,
}

impl UserRef {
    /// Pointer form used in create payloads.
    #[must_use]
    pub fn to_pointer(&self) -> Pointer {
        Pointer::new("user", &self.id)
    }
}

impl From<&User> for UserRef {
    fn from(user: &User) -> Self {
        Self { id: user.id.clone() }
    }
}

/// The author of a message, resolved from an expanded `user` pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageAuthor {
    pub id: String,
    pub username: String,
}

/// A message snapshot held by the live view.
///
/// Copies are transient and read-only; the remote store owns the record's
/// lifetime. `created_at` is assigned server-side, in milliseconds since the
/// Unix epoch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub text: String,
    /// Channel the message belongs to, from its `channel` pointer.
    pub channel_id: String,
    /// `None` when the `user` pointer was not expanded by the store.
    pub author: Option<MessageAuthor>,
    pub created_at: i64,
}

impl Message {
    /// Author display name, or the empty string while the author record is
    /// unresolved.
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author.as_ref().map_or("", |author| author.username.as_str())
    }
}

/// Payload for creating a message record via `POST /api/classes/message`.
///
/// The text is taken verbatim from the draft; empty and whitespace-only
/// submissions are valid records. The store assigns `object_id` and
/// `created_at`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageDraft {
    pub text: String,
    pub channel: Pointer,
    pub user: Pointer,
}

impl MessageDraft {
    #[must_use]
    pub fn new(text: &str, channel: &ChannelRef, user: &UserRef) -> Self {
        Self {
            text: text.to_owned(),
            channel: channel.to_pointer(),
            user: user.to_pointer(),
        }
    }
}
