//! Company Form Session: the five add-company fields and their submission.

use std::future::Future;
use std::sync::Arc;

use beacon_core::{CompanyDraft, CompanyField, DirectoryError, NotificationSink};
use beacon_gateway::DirectoryGateway;
use serde::Serialize;
use tokio::sync::watch;

const CREATE_OK: &str = "Company added successfully";
const CREATE_FAILED: &str = "Failed to add company";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub draft: CompanyDraft,
    /// A create request is in flight.
    pub submitting: bool,
}

enum Claim {
    Busy,
    Missing(Vec<CompanyField>),
    Ready(CompanyDraft),
}

pub struct CompanyForm<G> {
    gateway: Arc<G>,
    notifier: Arc<dyn NotificationSink>,
    state: watch::Sender<FormState>,
}

impl<G: DirectoryGateway> CompanyForm<G> {
    #[must_use]
    pub fn new(gateway: Arc<G>, notifier: Arc<dyn NotificationSink>) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            gateway,
            notifier,
            state,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Current field values.
    #[must_use]
    pub fn fields(&self) -> CompanyDraft {
        self.state.borrow().draft.clone()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state.borrow().submitting
    }

    pub fn set_field(&self, field: CompanyField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| {
            if state.draft.get(field) == value {
                return false;
            }
            state.draft.set(field, value);
            true
        });
    }

    /// Replace every field at once.
    pub fn fill(&self, draft: CompanyDraft) {
        self.state.send_modify(|state| state.draft = draft);
    }

    /// Reset every field to `""`.
    pub fn clear(&self) {
        self.state.send_if_modified(|state| {
            if state.draft.is_empty() {
                return false;
            }
            state.draft = CompanyDraft::default();
            true
        });
    }

    /// Send the current fields as a new company.
    ///
    /// On success the fields are cleared, a success notification is emitted
    /// and `on_created` is awaited (the directory uses it to refresh the
    /// list). On failure the fields are kept so the user can retry.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] without contacting the backend
    /// when a submission is already in flight or a field is blank, otherwise
    /// the gateway's error.
    pub async fn submit<F, Fut>(&self, on_created: F) -> Result<(), DirectoryError>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let mut claim = Claim::Busy;
        self.state.send_if_modified(|state| {
            if state.submitting {
                return false;
            }
            let missing = state.draft.missing_fields();
            if !missing.is_empty() {
                claim = Claim::Missing(missing);
                return false;
            }
            state.submitting = true;
            claim = Claim::Ready(state.draft.clone());
            true
        });

        let draft = match claim {
            Claim::Busy => {
                tracing::debug!("create already in flight");
                return Err(DirectoryError::Validation(
                    "a submission is already in progress".to_string(),
                ));
            }
            Claim::Missing(fields) => {
                let labels: Vec<&str> = fields.iter().map(|field| field.label()).collect();
                let error = DirectoryError::Validation(format!(
                    "missing required fields: {}",
                    labels.join(", ")
                ));
                tracing::debug!(%error, "create rejected locally");
                self.notifier.error(&error.to_string());
                return Err(error);
            }
            Claim::Ready(draft) => draft,
        };

        tracing::debug!(name = %draft.name, "submitting company");
        match self.gateway.create_company(&draft).await {
            Ok(()) => {
                self.state.send_modify(|state| {
                    state.draft = CompanyDraft::default();
                    state.submitting = false;
                });
                self.notifier.success(CREATE_OK);
                on_created().await;
                Ok(())
            }
            Err(error) => {
                self.state.send_modify(|state| state.submitting = false);
                tracing::warn!(kind = error.kind(), %error, "create failed");
                self.notifier.error(CREATE_FAILED);
                Err(error)
            }
        }
    }
}
