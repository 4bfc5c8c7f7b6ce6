//! Pure apply/parse helpers for `live_client` push handling.
//!
//! Everything here is synchronous and free of browser types, so the merge
//! semantics of the live subscription are testable off-browser.

#[cfg(test)]
#[path = "live_client_apply_test.rs"]
mod live_client_apply_test;

#[cfg(any(test, feature = "hydrate"))]
use liveq::ServerMessage;
#[cfg(any(test, feature = "hydrate"))]
use serde_json::Value;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::{Message, MessageAuthor};
#[cfg(any(test, feature = "hydrate"))]
use crate::state::messages::{MessagesState, sort_messages};

/// Merge one server push into the subscription state.
///
/// Events tagged with anything but the active subscription id are stale
/// deliveries from a torn-down subscription and are dropped. Connection-level
/// errors (no subscription id on the frame) always apply.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_server_message(state: &mut MessagesState, message: &ServerMessage) {
    match message {
        ServerMessage::Subscribed { .. } => {}
        ServerMessage::Snapshot { subscription_id, records } => {
            if !state.is_active(subscription_id) {
                return;
            }
            let mut messages: Vec<Message> = records
                .iter()
                .filter(|record| matches_active_query(state, record))
                .filter_map(parse_message_record)
                .collect();
            sort_messages(&mut messages);
            state.results = Some(messages);
            state.loading = false;
            state.error = None;
        }
        ServerMessage::Created { subscription_id, record }
        | ServerMessage::Updated { subscription_id, record } => {
            if !state.is_active(subscription_id) || !matches_active_query(state, record) {
                return;
            }
            // Events racing the snapshot are dropped; the snapshot that
            // follows is the authoritative initial state.
            let Some(message) = parse_message_record(record) else {
                return;
            };
            if let Some(results) = state.results.as_mut() {
                upsert_message(results, message);
            }
        }
        ServerMessage::Deleted { subscription_id, object_id } => {
            if !state.is_active(subscription_id) {
                return;
            }
            if let Some(results) = state.results.as_mut() {
                results.retain(|message| message.id != *object_id);
            }
        }
        ServerMessage::Error { subscription_id, message } => {
            if subscription_id.as_deref().is_some_and(|id| !state.is_active(id)) {
                return;
            }
            state.error = Some(message.clone());
            state.loading = false;
        }
    }
}

/// Whether a pushed record satisfies the query the active subscription was
/// opened with. The gateway filters server-side already; this re-check keeps
/// a misrouted or late event from leaking another channel's message into the
/// list.
#[cfg(any(test, feature = "hydrate"))]
fn matches_active_query(state: &MessagesState, record: &Value) -> bool {
    state.query.as_ref().is_some_and(|query| query.matches(record))
}

/// Replace the message with the same id or insert the new one, keeping the
/// list sorted. Replays after a resubscribe land here, so a message seen
/// twice must not duplicate.
#[cfg(any(test, feature = "hydrate"))]
fn upsert_message(results: &mut Vec<Message>, message: Message) {
    match results.iter_mut().find(|existing| existing.id == message.id) {
        Some(existing) => *existing = message,
        None => results.push(message),
    }
    sort_messages(results);
}

/// Parse one pushed record into a [`Message`].
///
/// Tolerant of partially populated payloads: `text` defaults to empty,
/// `created_at` to zero, and an unexpanded `user` pointer leaves the author
/// unresolved. A record without `object_id` or a `channel` pointer is
/// unusable and yields `None`.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn parse_message_record(record: &Value) -> Option<Message> {
    let id = record.get("object_id").and_then(Value::as_str)?.to_owned();
    let channel_id = record
        .get("channel")
        .and_then(|channel| channel.get("object_id"))
        .and_then(Value::as_str)?
        .to_owned();
    let text = record
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let created_at = record
        .get("created_at")
        .and_then(Value::as_i64)
        .unwrap_or_default();
    let author = parse_author(record.get("user"));

    Some(Message { id, text, channel_id, author, created_at })
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_author(user: Option<&Value>) -> Option<MessageAuthor> {
    let user = user?;
    let id = user.get("object_id").and_then(Value::as_str)?.to_owned();
    let username = user.get("username").and_then(Value::as_str)?.to_owned();
    Some(MessageAuthor { id, username })
}
