//! Live message-list state for the active channel subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the local projection of one channel's message feed. The live
//! client writes to it as subscription events arrive; the message list view
//! reads it. Every event on the wire is tagged with a subscription id, and
//! this state remembers which id is current so deliveries from a torn-down
//! subscription are discarded instead of leaking across a channel switch.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use liveq::Query;

use crate::net::types::Message;

/// State of the live message subscription for the active channel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessagesState {
    /// Id of the subscription currently allowed to write into `results`.
    pub subscription_id: Option<String>,
    /// Channel the active subscription filters on.
    pub channel_id: Option<String>,
    /// The query the subscription was opened with; pushed records are
    /// re-checked against it before being merged.
    pub query: Option<Query>,
    /// True from watch until the initial snapshot arrives.
    pub loading: bool,
    /// `None` until the snapshot lands; `Some` (possibly empty) afterwards.
    pub results: Option<Vec<Message>>,
    /// Subscription or transport failure, distinct from `loading`.
    pub error: Option<String>,
}

impl MessagesState {
    /// Reset for a newly watched channel, before the subscription is on the
    /// wire. Clears any previous channel's data so a remount never shows
    /// stale rows.
    pub fn prepare(&mut self, channel_id: &str) {
        self.subscription_id = None;
        self.channel_id = Some(channel_id.to_owned());
        self.query = None;
        self.loading = true;
        self.results = None;
        self.error = None;
    }

    /// Record the subscription that is now live on the wire. Events tagged
    /// with any other id are stale and get dropped.
    pub fn begin(&mut self, subscription_id: &str, channel_id: &str, query: Query) {
        self.subscription_id = Some(subscription_id.to_owned());
        self.channel_id = Some(channel_id.to_owned());
        self.query = Some(query);
        self.loading = true;
        self.results = None;
        self.error = None;
    }

    /// Full teardown on unwatch.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether an event tagged with `subscription_id` belongs to the live
    /// subscription.
    #[must_use]
    pub fn is_active(&self, subscription_id: &str) -> bool {
        self.subscription_id.as_deref() == Some(subscription_id)
    }

    /// Results re-sorted ascending by creation time for rendering. The
    /// binding keeps `results` sorted as it merges, but delivery order is not
    /// guaranteed, so the renderer sorts again rather than trusting it.
    #[must_use]
    pub fn sorted_results(&self) -> Option<Vec<Message>> {
        self.results.clone().map(|mut messages| {
            sort_messages(&mut messages);
            messages
        })
    }
}

/// Sort messages ascending by `(created_at, id)`; the id tie-break keeps the
/// order stable when the store assigns equal timestamps.
pub fn sort_messages(messages: &mut [Message]) {
    messages.sort_by(|a, b| {
        (a.created_at, a.id.as_str()).cmp(&(b.created_at, b.id.as_str()))
    });
}
