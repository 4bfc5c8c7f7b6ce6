//! Channel inventory rail for picking the active channel.

use leptos::prelude::*;

use crate::net::types::Channel;
use crate::state::session::SessionState;

/// Vertical list of channels; clicking one mounts its message list.
#[component]
pub fn ChannelRail() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <nav class="channel-rail">
            <h2 class="channel-rail__heading">"Channels"</h2>
            <Show when=move || session.get().loading>
                <p class="channel-rail__loading">"Loading channels..."</p>
            </Show>
            <For
                each=move || session.get().channels
                key=|channel: &Channel| channel.id.clone()
                children=move |channel: Channel| {
                    let id = channel.id.clone();
                    let active = {
                        let id = id.clone();
                        move || {
                            session
                                .get()
                                .active_channel
                                .as_ref()
                                .is_some_and(|c| c.id == id)
                        }
                    };
                    view! {
                        <button
                            class="channel-rail__item"
                            class:channel-rail__item--active=active
                            on:click=move |_| session.update(|s| s.select_channel(&id))
                        >
                            {format!("#{}", channel.name)}
                        </button>
                    }
                }
            />
        </nav>
    }
}
