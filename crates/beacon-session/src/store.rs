//! Directory Store: the single authoritative company list.
//!
//! The list changes only inside [`DirectoryStore::refresh`], and only by
//! wholesale replacement. Mutations (delete here, create in the form session)
//! never edit the list locally; they trigger a refresh instead.

use std::sync::Arc;

use beacon_core::{Company, CompanyId, DirectoryError, NotificationSink};
use beacon_gateway::DirectoryGateway;
use serde::Serialize;
use tokio::sync::watch;

use crate::sequence::{Outcome, RequestSequencer};

const LOAD_FAILED: &str = "Failed to load companies";
const DELETE_OK: &str = "Company deleted successfully";
const DELETE_FAILED: &str = "Failed to delete company";

/// Observable state of the directory list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryState {
    /// Companies in backend order.
    pub companies: Vec<Company>,
    /// True once any refresh has been applied.
    pub loaded: bool,
    /// Number of refreshes currently in flight.
    pub refreshing: usize,
}

impl DirectoryState {
    #[must_use]
    pub fn contains(&self, id: CompanyId) -> bool {
        self.companies.iter().any(|company| company.id == Some(id))
    }
}

pub struct DirectoryStore<G> {
    gateway: Arc<G>,
    notifier: Arc<dyn NotificationSink>,
    sequencer: RequestSequencer,
    state: watch::Sender<DirectoryState>,
}

impl<G: DirectoryGateway> DirectoryStore<G> {
    #[must_use]
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn NotificationSink>) -> Self {
        let (state, _) = watch::channel(DirectoryState::default());
        Self {
            gateway,
            notifier,
            sequencer: RequestSequencer::new(),
            state,
        }
    }

    /// Subscribe to list changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn state(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    /// Clone of the current company list.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Company> {
        self.state.borrow().companies.clone()
    }

    /// Reload the full list from the backend.
    ///
    /// On success the list is replaced wholesale, unless a newer refresh has
    /// already been applied, in which case the response is discarded and
    /// [`Outcome::Superseded`] is returned. On failure the list is left as it
    /// was and one error notification is emitted.
    ///
    /// # Errors
    ///
    /// Returns the gateway's [`DirectoryError`] when the list could not be fetched.
    pub async fn refresh(&self) -> Result<Outcome, DirectoryError> {
        let ticket = self.sequencer.issue();
        self.state.send_modify(|state| state.refreshing += 1);

        match self.gateway.list_companies().await {
            Ok(companies) => {
                let count = companies.len();
                let mut applied = false;
                self.state.send_modify(|state| {
                    state.refreshing = state.refreshing.saturating_sub(1);
                    if self.sequencer.accept(ticket) {
                        state.companies = companies;
                        state.loaded = true;
                        applied = true;
                    }
                });

                if applied {
                    tracing::debug!(ticket = ticket.get(), count, "directory refreshed");
                    Ok(Outcome::Applied)
                } else {
                    tracing::debug!(ticket = ticket.get(), "discarding stale directory response");
                    Ok(Outcome::Superseded)
                }
            }
            Err(error) => {
                self.state
                    .send_modify(|state| state.refreshing = state.refreshing.saturating_sub(1));
                if self.sequencer.is_superseded(ticket) {
                    tracing::debug!(ticket = ticket.get(), %error, "stale directory refresh failed");
                } else {
                    tracing::warn!(kind = error.kind(), %error, "directory refresh failed");
                    self.notifier.error(LOAD_FAILED);
                }
                Err(error)
            }
        }
    }

    /// Delete a company, then refresh the list.
    ///
    /// A missing id fails immediately with a validation notification and never
    /// reaches the network. The list is never spliced locally: it becomes
    /// correct once the follow-up refresh completes.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] for a missing id, or the
    /// gateway's error when the backend did not confirm the delete. A failed
    /// follow-up refresh is reported through its own notification only.
    pub async fn remove(&self, id: Option<CompanyId>) -> Result<(), DirectoryError> {
        let Some(id) = id else {
            return Err(self.reject(DirectoryError::Validation(
                "company id is required".to_string(),
            )));
        };

        if let Err(error) = self.gateway.delete_company(id).await {
            tracing::warn!(%id, kind = error.kind(), %error, "delete failed");
            self.notifier.error(DELETE_FAILED);
            return Err(error);
        }

        tracing::debug!(%id, "company deleted");
        self.notifier.success(DELETE_OK);
        let _ = self.refresh().await;
        Ok(())
    }

    /// Delete the company behind raw identifier text (e.g. a CLI argument).
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] when `input` is not a positive
    /// integer, otherwise the same as [`DirectoryStore::remove`].
    pub async fn remove_input(&self, input: &str) -> Result<(), DirectoryError> {
        match input.parse::<CompanyId>() {
            Ok(id) => self.remove(Some(id)).await,
            Err(error) => Err(self.reject(error)),
        }
    }

    /// Delete the given record. Unpersisted records (no id) are rejected.
    ///
    /// # Errors
    ///
    /// Same as [`DirectoryStore::remove`].
    pub async fn remove_company(&self, company: &Company) -> Result<(), DirectoryError> {
        self.remove(company.id).await
    }

    fn reject(&self, error: DirectoryError) -> DirectoryError {
        tracing::debug!(%error, "delete rejected locally");
        self.notifier.error(&error.to_string());
        error
    }
}
