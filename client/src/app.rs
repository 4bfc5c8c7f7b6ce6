//! Application shell wiring shared state, the live client, and channel
//! selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity and channel inventory are owned by the record store; the shell
//! fetches both once at startup, provides state via context, and mounts the
//! message list for whichever channel is selected. Closing a channel clears
//! the selection, which unmounts the list and tears its subscription down.

use leptos::prelude::*;

use crate::components::channel_rail::ChannelRail;
use crate::components::message_list::MessageList;
use crate::state::compose::ComposeState;
use crate::state::messages::MessagesState;
use crate::state::session::SessionState;

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(SessionState::default());
    let messages = RwSignal::new(MessagesState::default());
    let compose = RwSignal::new(ComposeState::default());
    provide_context(session);
    provide_context(messages);
    provide_context(compose);

    #[cfg(feature = "hydrate")]
    let sender = crate::net::live_client::spawn_live_client(messages);
    #[cfg(not(feature = "hydrate"))]
    let sender = crate::net::live_client::LiveSender::default();
    provide_context(RwSignal::new(sender));

    // Load the externally-owned identity and channel inventory.
    #[cfg(feature = "hydrate")]
    {
        session.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            let channels = crate::net::api::fetch_channels().await.unwrap_or_default();
            session.update(|s| {
                s.user = user;
                s.channels = channels;
                s.loading = false;
            });
        });
    }

    let on_close = Callback::new(move |()| session.update(SessionState::clear_active_channel));

    view! {
        <main class="app">
            <ChannelRail />
            <section class="app__content">
                {move || {
                    let state = session.get();
                    match (state.user, state.active_channel) {
                        (Some(user), Some(channel)) => {
                            view! {
                                <MessageList
                                    current_user=user
                                    current_channel=channel
                                    on_close=on_close
                                />
                            }
                                .into_any()
                        }
                        _ => {
                            view! {
                                <p class="app__placeholder">
                                    "Pick a channel to start chatting."
                                </p>
                            }
                                .into_any()
                        }
                    }
                }}
            </section>
        </main>
    }
}
