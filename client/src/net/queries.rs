//! Query construction for the channel message feed.
//!
//! Queries are cheap value types and are rebuilt from scratch on every watch,
//! so a channel switch can never reuse a descriptor built for the previous
//! channel.

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

use liveq::Query;

use crate::net::types::ChannelRef;

/// The live query backing a channel's message list: messages whose `channel`
/// pointer equals the given channel, ascending by server-assigned creation
/// time, with referenced records expanded inline so author usernames render
/// without a second round trip.
#[must_use]
pub fn channel_messages_query(channel: &ChannelRef) -> Query {
    Query::new("message")
        .equal_to_pointer("channel", &channel.to_pointer())
        .ascending("created_at")
        .include_all()
}
