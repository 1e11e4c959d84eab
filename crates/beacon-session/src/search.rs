//! Search Session: one query's lifecycle.
//!
//! `Idle → Searching → {Resolved, Failed}`; every accepted submission resets
//! the phase to `Searching`. Only the most recently initiated query may change
//! the session once its response arrives.

use std::sync::Arc;

use beacon_core::{DirectoryError, NotificationSink, SearchResult};
use beacon_gateway::DirectoryGateway;
use serde::Serialize;
use tokio::sync::watch;

use crate::sequence::{Outcome, RequestSequencer};

const SEARCH_FAILED: &str = "Failed to search companies";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Resolved,
    Failed {
        #[serde(serialize_with = "error_text")]
        error: DirectoryError,
    },
}

fn error_text<S: serde::Serializer>(error: &DirectoryError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Observable state of a search session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    #[serde(flatten)]
    pub phase: SearchPhase,
    /// The trimmed query of the latest submission.
    pub query: Option<String>,
    /// The latest resolved result.
    ///
    /// Stays visible while a newer query is in flight and after a failed one;
    /// it is only ever replaced whole.
    pub result: Option<SearchResult>,
}

impl SearchState {
    #[must_use]
    pub const fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching)
    }
}

pub struct SearchSession<G> {
    gateway: Arc<G>,
    notifier: Arc<dyn NotificationSink>,
    sequencer: RequestSequencer,
    state: watch::Sender<SearchState>,
}

impl<G: DirectoryGateway> SearchSession<G> {
    #[must_use]
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn NotificationSink>) -> Self {
        let (state, _) = watch::channel(SearchState::default());
        Self {
            gateway,
            notifier,
            sequencer: RequestSequencer::new(),
            state,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.state.borrow().phase.clone()
    }

    #[must_use]
    pub fn result(&self) -> Option<SearchResult> {
        self.state.borrow().result.clone()
    }

    /// Run `query` against the backend.
    ///
    /// A blank query is a no-op: no state change, no request, no notification,
    /// and [`Outcome::Skipped`]. Otherwise exactly one search request is made.
    /// If a newer query was submitted before this one's response arrived, the
    /// response is dropped and [`Outcome::Superseded`] is returned.
    ///
    /// # Errors
    ///
    /// Returns the gateway's [`DirectoryError`] when the search failed. The
    /// session moves to `Failed` and notifies only if this was the latest query.
    pub async fn submit(&self, query: &str) -> Result<Outcome, DirectoryError> {
        let query = query.trim();
        if query.is_empty() {
            tracing::debug!("ignoring blank search query");
            return Ok(Outcome::Skipped);
        }

        let ticket = self.sequencer.issue();
        self.state.send_modify(|state| {
            state.phase = SearchPhase::Searching;
            state.query = Some(query.to_string());
        });
        tracing::debug!(ticket = ticket.get(), query, "search submitted");

        let response = self.gateway.search_companies(query).await;

        let mut applied = false;
        let failure = response.as_ref().err().cloned();
        self.state.send_if_modified(|state| {
            if !self.sequencer.is_latest(ticket) {
                return false;
            }
            applied = true;
            match response {
                Ok(result) => {
                    state.phase = SearchPhase::Resolved;
                    state.result = Some(result);
                }
                Err(error) => state.phase = SearchPhase::Failed { error },
            }
            true
        });

        match (applied, failure) {
            (false, None) => {
                tracing::debug!(ticket = ticket.get(), "discarding superseded search response");
                Ok(Outcome::Superseded)
            }
            (false, Some(error)) => {
                tracing::debug!(ticket = ticket.get(), %error, "superseded search failed");
                Err(error)
            }
            (true, None) => Ok(Outcome::Applied),
            (true, Some(error)) => {
                tracing::warn!(kind = error.kind(), %error, "search failed");
                self.notifier.error(SEARCH_FAILED);
                Err(error)
            }
        }
    }
}
