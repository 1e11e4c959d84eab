//! Wires the store, search session and form session over one gateway.

use std::sync::Arc;

use beacon_core::{DirectoryError, NotificationSink};
use beacon_gateway::DirectoryGateway;

use crate::form::CompanyForm;
use crate::search::SearchSession;
use crate::sequence::Outcome;
use crate::store::DirectoryStore;

pub struct Directory<G> {
    gateway: Arc<G>,
    store: DirectoryStore<G>,
    search: SearchSession<G>,
    form: CompanyForm<G>,
}

impl<G: DirectoryGateway> Directory<G> {
    #[must_use]
    pub fn new(gateway: G, notifier: Arc<dyn NotificationSink>) -> Self {
        let gateway = Arc::new(gateway);
        Self {
            store: DirectoryStore::new(Arc::clone(&gateway), Arc::clone(&notifier)),
            search: SearchSession::new(Arc::clone(&gateway), Arc::clone(&notifier)),
            form: CompanyForm::new(Arc::clone(&gateway), notifier),
            gateway,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &DirectoryStore<G> {
        &self.store
    }

    #[must_use]
    pub const fn search(&self) -> &SearchSession<G> {
        &self.search
    }

    #[must_use]
    pub const fn form(&self) -> &CompanyForm<G> {
        &self.form
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Initial population of the store.
    ///
    /// # Errors
    ///
    /// See [`DirectoryStore::refresh`].
    pub async fn open(&self) -> Result<Outcome, DirectoryError> {
        self.store.refresh().await
    }

    /// Submit the add form; a confirmed create refreshes the store.
    ///
    /// # Errors
    ///
    /// See [`CompanyForm::submit`]. A failed follow-up refresh is reported only
    /// through its notification.
    pub async fn add_company(&self) -> Result<(), DirectoryError> {
        self.form.submit(|| self.store.refresh()).await
    }
}
