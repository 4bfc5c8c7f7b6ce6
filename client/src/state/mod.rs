//! Context-held state structs for the chat client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module owns one concern: `session` tracks the externally-provided
//! identity and channel inventory, `messages` mirrors the live subscription
//! for the active channel, and `compose` carries submission outcomes. All are
//! plain structs held in `RwSignal` context providers.

pub mod compose;
pub mod messages;
pub mod session;
