//! REST helpers for the record store gateway.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Off-browser: stubs returning `None`/error since the gateway is only
//! reachable from the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Read helpers degrade to `None` so a failed identity or channel fetch
//! renders an empty shell instead of crashing hydration. The message create
//! path returns a typed [`SubmitError`] because the compose box must show
//! the failure and keep the draft.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{Channel, MessageDraft, User};
use crate::state::compose::SubmitError;
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn create_message_failed_reason(status: u16) -> String {
    format!("create message failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ticket_request_failed_message(status: u16) -> String {
    format!("ticket request failed: {status}")
}

/// Fetch the currently authenticated user from `GET /api/auth/me`.
/// Returns `None` if not authenticated or off-browser.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    results: Vec<Channel>,
}

/// Fetch the channel inventory from `GET /api/classes/channel`.
/// Returns `None` on any failure; the shell renders an empty rail.
pub async fn fetch_channels() -> Option<Vec<Channel>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/classes/channel")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: ChannelListResponse = resp.json().await.ok()?;
        Some(body.results)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a new message record via `POST /api/classes/message`.
///
/// The store assigns `object_id` and `created_at`; the created record comes
/// back to the list through the live subscription, so the response body is
/// not consumed here.
///
/// # Errors
///
/// Returns a [`SubmitError`] if the request fails or the gateway rejects it.
pub async fn create_message(draft: &MessageDraft) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/classes/message")
            .json(draft)
            .map_err(|e| SubmitError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::new(e.to_string()))?;
        if !resp.ok() {
            return Err(SubmitError::new(create_message_failed_reason(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(SubmitError::new("not available off-browser"))
    }
}

/// Create a live-socket authentication ticket via `POST /api/auth/live-ticket`.
///
/// # Errors
///
/// Returns an error string if the ticket request fails.
pub async fn create_live_ticket() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/live-ticket")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(ticket_request_failed_message(resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct TicketResponse {
            ticket: String,
        }
        let body: TicketResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.ticket)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available off-browser".to_owned())
    }
}
