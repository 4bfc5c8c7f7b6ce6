//! Networking modules for the record store gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `queries` builds live-query descriptors,
//! `live_client` manages the subscription socket lifecycle, and `types`
//! defines the DTOs shared across them.

pub mod api;
pub mod live_client;
pub mod queries;
pub mod types;
