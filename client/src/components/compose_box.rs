//! Compose box for drafting and sending a message.

use leptos::prelude::*;

use crate::net::types::{ChannelRef, MessageDraft, UserRef};
use crate::state::compose::ComposeState;

/// Free-text input plus send button for one channel.
///
/// The draft is submitted verbatim; empty submissions are allowed. A failed
/// send keeps the draft in place and renders the error below the input, so
/// the user can retry as-is.
#[component]
pub fn ComposeBox(channel: ChannelRef, user: UserRef) -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    let draft = RwSignal::new(String::new());

    let on_send = move |_| {
        let outgoing = MessageDraft::new(&draft.get_untracked(), &channel, &user);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_message(&outgoing).await {
                Ok(()) => {
                    draft.set(String::new());
                    compose.update(|c| c.error = None);
                }
                Err(error) => compose.update(|c| c.error = Some(error)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = outgoing;
        }
    };

    view! {
        <div class="compose">
            <div class="compose__row">
                <textarea
                    class="compose__input"
                    placeholder="Your message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
                <button class="compose__send" on:click=on_send>
                    "Send"
                </button>
            </div>
            <Show when=move || compose.get().error.is_some()>
                <p class="compose__error">
                    {move || {
                        compose
                            .get()
                            .error
                            .map(|error| error.to_string())
                            .unwrap_or_default()
                    }}
                </p>
            </Show>
        </div>
    }
}
