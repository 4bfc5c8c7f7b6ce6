//! Shared live-query wire model for the realtime record socket.
//!
//! This crate owns the wire representation spoken between the chat client and
//! the record store's live-query gateway: record pointers, query descriptors,
//! and the message envelopes pushed in each direction. It intentionally keeps
//! record payloads flexible (`serde_json::Value`) and encodes as JSON text
//! frames, which is what the gateway endpoint speaks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_client`] and [`decode_server`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame could not be decoded as a known wire message.
    #[error("failed to decode live-query frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A typed reference to a record in the remote store.
///
/// Records reference each other by pointer on the wire; expanded records carry
/// extra fields alongside `class`/`object_id` but remain pointer-comparable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    /// Collection the record lives in (e.g. `"message"`).
    pub class: String,
    /// Unique record identifier within that collection.
    pub object_id: String,
}

impl Pointer {
    #[must_use]
    pub fn new(class: &str, object_id: &str) -> Self {
        Self { class: class.to_owned(), object_id: object_id.to_owned() }
    }
}

/// A filtered, ordered live query over one record class.
///
/// Construction is pure and infallible; the gateway owns evaluation. The
/// client keeps the query it subscribed with so pushed records can be
/// re-checked with [`Query::matches`] before they are merged into local state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Record class this query selects from.
    pub class: String,
    /// Field equality constraints, all of which must hold.
    #[serde(default)]
    pub equals: BTreeMap<String, Value>,
    /// Field to sort results by, ascending, if any.
    #[serde(default)]
    pub ascending: Option<String>,
    /// Whether pointer fields on matching records are expanded inline.
    #[serde(default)]
    pub include_all: bool,
}

impl Query {
    /// Start a query over `class` with no constraints.
    #[must_use]
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_owned(),
            equals: BTreeMap::new(),
            ascending: None,
            include_all: false,
        }
    }

    /// Constrain `key` to equal `value`.
    #[must_use]
    pub fn equal_to(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.equals.insert(key.to_owned(), value.into());
        self
    }

    /// Constrain the pointer field `key` to reference the given record.
    #[must_use]
    pub fn equal_to_pointer(mut self, key: &str, pointer: &Pointer) -> Self {
        self.equals.insert(
            key.to_owned(),
            serde_json::json!({ "class": pointer.class, "object_id": pointer.object_id }),
        );
        self
    }

    /// Sort results ascending by `key`.
    #[must_use]
    pub fn ascending(mut self, key: &str) -> Self {
        self.ascending = Some(key.to_owned());
        self
    }

    /// Expand all pointer fields on matching records inline.
    #[must_use]
    pub fn include_all(mut self) -> Self {
        self.include_all = true;
        self
    }

    /// Whether a record satisfies every equality constraint of this query.
    ///
    /// Pointer-valued constraints match structurally on `class` + `object_id`,
    /// so a record whose pointer fields were expanded inline still matches.
    #[must_use]
    pub fn matches(&self, record: &Value) -> bool {
        self.equals.iter().all(|(key, expected)| {
            record
                .get(key)
                .is_some_and(|actual| value_matches(expected, actual))
        })
    }
}

fn value_matches(expected: &Value, actual: &Value) -> bool {
    if let (Some(expected_obj), Some(actual_obj)) = (expected.as_object(), actual.as_object())
        && expected_obj.contains_key("object_id")
    {
        return expected_obj.get("class") == actual_obj.get("class")
            && expected_obj.get("object_id") == actual_obj.get("object_id");
    }
    expected == actual
}

/// Messages sent by a client over the live socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Open a subscription to `query` under a client-chosen id.
    Subscribe {
        /// Client-allocated id tagging every event for this subscription.
        subscription_id: String,
        /// The filter/sort/expansion descriptor to subscribe to.
        query: Query,
    },
    /// Close a previously opened subscription.
    Unsubscribe {
        /// Id of the subscription to close.
        subscription_id: String,
    },
}

/// Messages pushed by the gateway over the live socket.
///
/// Every event is tagged with the subscription it belongs to; clients drop
/// events for subscriptions they no longer hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Acknowledges a `subscribe`; the snapshot follows separately.
    Subscribed { subscription_id: String },
    /// The full set of records matching the query at subscription time.
    Snapshot {
        subscription_id: String,
        records: Vec<Value>,
    },
    /// A record matching the query was created after the snapshot.
    Created {
        subscription_id: String,
        record: Value,
    },
    /// A record matching the query was updated after the snapshot.
    Updated {
        subscription_id: String,
        record: Value,
    },
    /// A record matching the query was deleted after the snapshot.
    Deleted {
        subscription_id: String,
        object_id: String,
    },
    /// The gateway failed a subscription or the connection itself.
    Error {
        /// Absent when the error concerns the connection, not one subscription.
        #[serde(default)]
        subscription_id: Option<String>,
        message: String,
    },
}

/// Encode a client message as a JSON text frame.
#[must_use]
pub fn encode_client(message: &ClientMessage) -> String {
    // Serializing these enums cannot fail: all keys are strings and all
    // payloads are already JSON values.
    serde_json::to_string(message).unwrap_or_default()
}

/// Decode a JSON text frame into a client message.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed frames or unknown `op` tags.
pub fn decode_client(text: &str) -> Result<ClientMessage, CodecError> {
    Ok(serde_json::from_str(text)?)
}

/// Encode a server message as a JSON text frame.
#[must_use]
pub fn encode_server(message: &ServerMessage) -> String {
    // Same reasoning as `encode_client`.
    serde_json::to_string(message).unwrap_or_default()
}

/// Decode a JSON text frame into a server message.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed frames or unknown `op` tags.
pub fn decode_server(text: &str) -> Result<ServerMessage, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
