//! Live-query subscription client for the record store gateway.
//!
//! The subscription manager bridges a channel's query descriptor to the
//! continuously updated [`MessagesState`]. It owns the socket lifecycle:
//! connection, reconnection with exponential backoff, ordered
//! unsubscribe-before-subscribe on channel switches, and dispatch of pushed
//! events into state. All websocket logic is gated behind
//! `#[cfg(feature = "hydrate")]` since it requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface through `MessagesState::error` while the loop
//! keeps reconnecting; a malformed frame is logged and skipped rather than
//! tearing the connection down.

#[path = "live_client_apply.rs"]
mod live_client_apply;

#[cfg(test)]
#[path = "live_client_test.rs"]
mod live_client_test;

#[cfg(any(test, feature = "hydrate"))]
use liveq::{ClientMessage, encode_client};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::queries::channel_messages_query;
use crate::net::types::ChannelRef;
#[cfg(feature = "hydrate")]
use crate::state::messages::MessagesState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

/// Commands accepted by the subscription manager.
#[derive(Debug)]
pub enum LiveCommand {
    /// Re-issue the live subscription for a new channel. The previous
    /// subscription, if any, is closed first.
    Watch { channel: ChannelRef },
    /// Tear down the active subscription.
    Unwatch,
}

/// Context handle for sending commands to the live client.
///
/// Degrades to a no-op off-browser so components can send unconditionally.
#[derive(Clone, Default)]
pub struct LiveSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<LiveCommand>>,
}

impl LiveSender {
    /// Send a command; returns `false` if no live client is running.
    pub fn send(&self, command: LiveCommand) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(command).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = command;
            false
        }
    }
}

/// Wire frames for switching the live subscription to `channel`.
///
/// The prior subscription is always closed before the new one opens, so the
/// gateway never holds two subscriptions for one client view.
#[cfg(any(test, feature = "hydrate"))]
fn watch_wire_frames(
    prior_subscription: Option<&str>,
    subscription_id: &str,
    channel: &ChannelRef,
) -> Vec<String> {
    let mut frames = Vec::new();
    if let Some(prior) = prior_subscription {
        frames.push(encode_client(&ClientMessage::Unsubscribe {
            subscription_id: prior.to_owned(),
        }));
    }
    frames.push(encode_client(&ClientMessage::Subscribe {
        subscription_id: subscription_id.to_owned(),
        query: channel_messages_query(channel),
    }));
    frames
}

/// Wire frames for tearing down the active subscription, if one exists.
#[cfg(any(test, feature = "hydrate"))]
fn unwatch_wire_frames(prior_subscription: Option<&str>) -> Vec<String> {
    prior_subscription
        .map(|prior| {
            vec![encode_client(&ClientMessage::Unsubscribe {
                subscription_id: prior.to_owned(),
            })]
        })
        .unwrap_or_default()
}

/// One live subscription as tracked by the manager.
#[cfg(feature = "hydrate")]
struct ActiveSubscription {
    id: String,
    channel: ChannelRef,
}

/// Spawn the live client lifecycle as a local async task.
///
/// Connects to the gateway, applies pushed events to `messages`, and
/// reconnects on disconnect with exponential backoff.
#[cfg(feature = "hydrate")]
pub fn spawn_live_client(messages: RwSignal<MessagesState>) -> LiveSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<LiveCommand>();
    leptos::task::spawn_local(live_client_loop(messages, rx));

    LiveSender { tx: Some(tx) }
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn live_client_loop(
    messages: RwSignal<MessagesState>,
    rx: futures::channel::mpsc::UnboundedReceiver<LiveCommand>,
) {
    let rx = Rc::new(RefCell::new(rx));
    let active = Rc::new(RefCell::new(None::<ActiveSubscription>));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        // Get a socket ticket.
        let ticket = match crate::net::api::create_live_ticket().await {
            Ok(t) => t,
            Err(e) => {
                leptos::logging::warn!("live ticket failed: {e}");
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
                backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
                continue;
            }
        };

        // Determine the live socket URL.
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        let ws_url = format!("{ws_proto}://{host}/api/live?ticket={ticket}");

        match connect_and_run(&ws_url, messages, &rx, &active).await {
            Ok(()) => {
                leptos::logging::log!("live socket disconnected cleanly");
            }
            Err(e) => {
                leptos::logging::warn!("live socket error: {e}");
            }
        }

        // Losing the socket also loses the server-side subscription; surface
        // the gap without freezing the loading flag.
        messages.update(|m| {
            if m.channel_id.is_some() {
                m.loading = false;
                m.error = Some("live connection lost, reconnecting".to_owned());
            }
        });

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Connect to the live socket and process traffic until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    messages: RwSignal<MessagesState>,
    rx: &Rc<RefCell<futures::channel::mpsc::UnboundedReceiver<LiveCommand>>>,
    active: &Rc<RefCell<Option<ActiveSubscription>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // A fresh socket has no subscriptions. Re-open the one that was active
    // before the disconnect under a new id so stale deliveries stay
    // distinguishable.
    for text in resubscribe_frames(messages, active) {
        ws_write
            .send(Message::Text(text))
            .await
            .map_err(|e| e.to_string())?;
    }

    // Forward commands from the UI to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(command) = rx_borrow.next().await {
            let frames = command_frames(messages, active, &command);
            let mut closed = false;
            for text in frames {
                if ws_write.send(Message::Text(text)).await.is_err() {
                    closed = true;
                    break;
                }
            }
            if closed {
                break;
            }
        }
    };

    // Receive loop: decode and apply pushed events.
    let recv_task = async {
        while let Some(result) = ws_read.next().await {
            match result {
                Ok(Message::Text(text)) => match liveq::decode_server(&text) {
                    Ok(message) => dispatch_server_message(&message, messages),
                    Err(e) => leptos::logging::warn!("dropping malformed live frame: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("live socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run send/recv loops; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Translate a command into wire frames, updating subscription bookkeeping
/// and the shared message state.
#[cfg(feature = "hydrate")]
fn command_frames(
    messages: RwSignal<MessagesState>,
    active: &Rc<RefCell<Option<ActiveSubscription>>>,
    command: &LiveCommand,
) -> Vec<String> {
    match command {
        LiveCommand::Watch { channel } => {
            let prior = active.borrow().as_ref().map(|sub| sub.id.clone());
            let subscription_id = uuid::Uuid::new_v4().to_string();
            let query = channel_messages_query(channel);
            messages.update(|m| m.begin(&subscription_id, &channel.id, query));
            let frames = watch_wire_frames(prior.as_deref(), &subscription_id, channel);
            *active.borrow_mut() = Some(ActiveSubscription {
                id: subscription_id,
                channel: channel.clone(),
            });
            frames
        }
        LiveCommand::Unwatch => {
            let prior = active.borrow_mut().take().map(|sub| sub.id);
            messages.update(MessagesState::clear);
            unwatch_wire_frames(prior.as_deref())
        }
    }
}

/// Frames to restore the active subscription on a fresh socket, if any.
#[cfg(feature = "hydrate")]
fn resubscribe_frames(
    messages: RwSignal<MessagesState>,
    active: &Rc<RefCell<Option<ActiveSubscription>>>,
) -> Vec<String> {
    let mut guard = active.borrow_mut();
    let Some(sub) = guard.as_mut() else {
        return Vec::new();
    };
    sub.id = uuid::Uuid::new_v4().to_string();
    let query = channel_messages_query(&sub.channel);
    messages.update(|m| m.begin(&sub.id, &sub.channel.id, query));
    watch_wire_frames(None, &sub.id, &sub.channel)
}

#[cfg(feature = "hydrate")]
fn dispatch_server_message(message: &liveq::ServerMessage, messages: RwSignal<MessagesState>) {
    messages.update(|m| live_client_apply::apply_server_message(m, message));
}
