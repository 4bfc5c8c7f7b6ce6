//! Channel message list bound to the live subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the core chat surface: it watches the current channel's live
//! query, renders the loading/empty/populated states, and hosts the compose
//! box. Mounting opens the subscription; unmounting (or remounting for a
//! different channel) closes it.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::components::compose_box::ComposeBox;
use crate::net::live_client::{LiveCommand, LiveSender};
use crate::net::types::{Channel, ChannelRef, Message, User, UserRef};
use crate::state::messages::MessagesState;

/// Channel heading rendered above the list, e.g. `#general`.
fn channel_heading(name: &str) -> String {
    format!("#{name}")
}

/// Whether the list should render the single placeholder row: the snapshot
/// has arrived and it is empty. Before the snapshot there is no list at all.
fn show_placeholder(state: &MessagesState) -> bool {
    state.results.as_ref().is_some_and(Vec::is_empty)
}

/// Live message list and compose box for one channel.
///
/// The close capability is surfaced in the header only; list and compose
/// logic never invoke it.
#[component]
pub fn MessageList(
    current_user: User,
    current_channel: Channel,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();
    let sender = expect_context::<RwSignal<LiveSender>>();

    let channel_ref = ChannelRef::from(&current_channel);
    let user_ref = UserRef::from(&current_user);

    // Watch this channel's feed. `prepare` clears the previous channel's rows
    // immediately so a remount never flashes stale messages while the
    // subscription round-trips.
    messages.update(|m| m.prepare(&current_channel.id));
    let _ = sender.get_untracked().send(LiveCommand::Watch { channel: channel_ref.clone() });
    on_cleanup(move || {
        let _ = sender.get_untracked().send(LiveCommand::Unwatch);
    });

    let heading = channel_heading(&current_channel.name);

    view! {
        <section class="channel-view">
            <header class="channel-view__header">
                <h1 class="channel-view__heading">{heading}</h1>
                <Show when=move || messages.get().loading>
                    <span class="channel-view__spinner" aria-label="Loading messages"></span>
                </Show>
                <span class="channel-view__spacer"></span>
                <Show when=move || on_close.is_some()>
                    <button
                        class="channel-view__close"
                        title="Close channel"
                        on:click=move |_| {
                            if let Some(on_close) = on_close {
                                on_close.run(());
                            }
                        }
                    >
                        "✕"
                    </button>
                </Show>
            </header>

            <Show when=move || messages.get().error.is_some()>
                <p class="channel-view__error">
                    {move || messages.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show when=move || messages.get().results.is_some()>
                <ul class="message-list">
                    <Show
                        when=move || !show_placeholder(&messages.get())
                        fallback=move || {
                            view! { <li class="message-list__empty">"No messages here yet!"</li> }
                        }
                    >
                        <For
                            each=move || messages.get().sorted_results().unwrap_or_default()
                            key=|message: &Message| message.id.clone()
                            children=move |message: Message| {
                                view! {
                                    <li class="message-row">
                                        <p class="message-row__author">
                                            {message.author_name().to_owned()}
                                        </p>
                                        <p class="message-row__text">{message.text.clone()}</p>
                                    </li>
                                }
                            }
                        />
                    </Show>
                </ul>
            </Show>

            <ComposeBox channel=channel_ref user=user_ref />
        </section>
    }
}
