//! State of a standardize/generate action as seen by a view
//!
//! ```text
//! Idle ──begin()──▶ Loading ──complete(ticket, Ok)──▶ Ready(text)
//!                      │    └─complete(ticket, Err)─▶ Failed(message)
//!                      └──dismiss()──▶ Idle   (the in-flight ticket is void)
//! ```

use serde::Serialize;
use std::fmt;

/// Shown when a failure carries no message of its own
pub const UNKNOWN_ERROR_FALLBACK: &str = "Ocorreu um erro desconhecido.";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(String),
}

/// Identifies one request started with [`RequestPanel::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Busy flag plus last result of a description action.
///
/// Only one request may be in flight at a time. A completion is accepted
/// only for the ticket currently in flight, so results that arrive after
/// the panel was dismissed are dropped.
#[derive(Debug, Default)]
pub struct RequestPanel {
    state: PanelState,
    issued: u64,
    in_flight: Option<Ticket>,
}

impl RequestPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a request. Returns `None` while another one is in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_busy() {
            return None;
        }

        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.in_flight = Some(ticket);
        self.state = PanelState::Loading;
        Some(ticket)
    }

    /// Record the outcome of a request.
    ///
    /// Returns `false`, leaving the panel untouched, if `ticket` is not the
    /// request in flight.
    pub fn complete<E: fmt::Display>(&mut self, ticket: Ticket, result: Result<String, E>) -> bool {
        if self.in_flight != Some(ticket) {
            tracing::debug!(ticket = ticket.0, "discarding stale completion");
            return false;
        }

        self.in_flight = None;
        self.state = match result {
            Ok(text) => PanelState::Ready(text),
            Err(e) => PanelState::Failed(error_message(&e)),
        };
        true
    }

    /// Close the panel. Any request in flight is abandoned.
    pub fn dismiss(&mut self) {
        self.in_flight = None;
        self.state = PanelState::Idle;
    }
}

/// The error's own message, or [`UNKNOWN_ERROR_FALLBACK`] when it is blank
pub fn error_message(err: &impl fmt::Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_FALLBACK.to_string()
    } else {
        message
    }
}
