//! Compose-box submission state.
//!
//! DESIGN
//! ======
//! A failed submission is ordinary UI state, not a blocking dialog: the error
//! is rendered next to the compose box and the draft stays put so the user
//! can retry. Success clears both.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use std::fmt;

/// Why a message submission failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitError {
    pub reason: String,
}

impl SubmitError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not send message: {}", self.reason)
    }
}

/// Outcome of the most recent submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposeState {
    /// Failure of the last submission, cleared by the next success.
    pub error: Option<SubmitError>,
}
