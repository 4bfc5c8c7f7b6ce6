//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surfaces while reading/writing shared state
//! from Leptos context providers; none of them talk to the network directly
//! except through `net::api` and the live-client command sender.

pub mod channel_rail;
pub mod compose_box;
pub mod message_list;
