//! Session state for the externally-owned identity and channel inventory.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store's identity and channel records are owned elsewhere; this client
//! only reads them. The shell fetches both once at startup and channel
//! selection drives which message subscription is mounted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Channel, User};

/// Identity and channel-selection state for the app shell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// The authenticated user, once fetched.
    pub user: Option<User>,
    /// Channel inventory from the store.
    pub channels: Vec<Channel>,
    /// Channel whose message list is currently mounted.
    pub active_channel: Option<Channel>,
    /// True while the initial identity/channel fetch is in flight.
    pub loading: bool,
}

impl SessionState {
    /// Activate the channel with the given id, if it is in the inventory.
    /// Unknown ids leave the selection unchanged.
    pub fn select_channel(&mut self, channel_id: &str) {
        if let Some(channel) = self.channels.iter().find(|c| c.id == channel_id) {
            self.active_channel = Some(channel.clone());
        }
    }

    /// Drop the active channel, unmounting its message list.
    pub fn clear_active_channel(&mut self) {
        self.active_channel = None;
    }
}
