//! In-memory gateway for driving the sessions without a backend.
//!
//! [`ScriptedGateway`] behaves like a small directory service by default
//! (list returns its table, create assigns the next id, delete removes by id).
//! Tests override individual calls by queueing replies, either ready
//! ([`ScriptedGateway::push_list`]) or held open until the test releases them
//! ([`ScriptedGateway::gate_list`]) to reproduce out-of-order arrivals.
//!
//! ```
//! use beacon_session::testing::ScriptedGateway;
//! use beacon_core::DirectoryError;
//!
//! let gateway = ScriptedGateway::new();
//! gateway.push_delete(Err(DirectoryError::Server { status: 500, message: "boom".into() }));
//! assert_eq!(gateway.calls().delete, 0);
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use beacon_core::{Company, CompanyDraft, CompanyId, DirectoryError, SearchResult};
use beacon_gateway::DirectoryGateway;
use tokio::sync::oneshot;

type Reply<T> = Result<T, DirectoryError>;

enum Scripted<T> {
    Ready(Reply<T>),
    Gated(oneshot::Receiver<Reply<T>>),
}

impl<T> Scripted<T> {
    async fn resolve(self) -> Reply<T> {
        match self {
            Self::Ready(reply) => reply,
            Self::Gated(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(DirectoryError::Network("gate dropped".to_string()))),
        }
    }
}

/// Number of times each gateway operation was invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calls {
    pub list: usize,
    pub create: usize,
    pub delete: usize,
    pub search: usize,
}

impl Calls {
    #[must_use]
    pub const fn total(self) -> usize {
        self.list + self.create + self.delete + self.search
    }
}

#[derive(Default)]
struct Inner {
    companies: Vec<Company>,
    next_id: i64,
    list: VecDeque<Scripted<Vec<Company>>>,
    create: VecDeque<Scripted<()>>,
    delete: VecDeque<Scripted<()>>,
    search: VecDeque<Scripted<SearchResult>>,
    calls: Calls,
    queries: Vec<String>,
    created: Vec<CompanyDraft>,
    deleted: Vec<CompanyId>,
}

/// Scriptable [`DirectoryGateway`] backed by an in-memory table.
pub struct ScriptedGateway {
    inner: Mutex<Inner>,
}

impl Default for ScriptedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::with_companies(Vec::new())
    }

    /// Seed the table. New ids continue after the largest seeded id.
    #[must_use]
    pub fn with_companies(companies: Vec<Company>) -> Self {
        let next_id = companies
            .iter()
            .filter_map(|company| company.id)
            .map(CompanyId::get)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Mutex::new(Inner {
                companies,
                next_id,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push_list(&self, reply: Reply<Vec<Company>>) {
        self.lock().list.push_back(Scripted::Ready(reply));
    }

    pub fn push_create(&self, reply: Reply<()>) {
        self.lock().create.push_back(Scripted::Ready(reply));
    }

    pub fn push_delete(&self, reply: Reply<()>) {
        self.lock().delete.push_back(Scripted::Ready(reply));
    }

    pub fn push_search(&self, reply: Reply<SearchResult>) {
        self.lock().search.push_back(Scripted::Ready(reply));
    }

    /// Hold the next list call open until the returned sender fires.
    #[must_use]
    pub fn gate_list(&self) -> oneshot::Sender<Reply<Vec<Company>>> {
        let (tx, rx) = oneshot::channel();
        self.lock().list.push_back(Scripted::Gated(rx));
        tx
    }

    #[must_use]
    pub fn gate_create(&self) -> oneshot::Sender<Reply<()>> {
        let (tx, rx) = oneshot::channel();
        self.lock().create.push_back(Scripted::Gated(rx));
        tx
    }

    #[must_use]
    pub fn gate_search(&self) -> oneshot::Sender<Reply<SearchResult>> {
        let (tx, rx) = oneshot::channel();
        self.lock().search.push_back(Scripted::Gated(rx));
        tx
    }

    #[must_use]
    pub fn calls(&self) -> Calls {
        self.lock().calls
    }

    /// Queries received by `search_companies`, in call order.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.lock().queries.clone()
    }

    /// Drafts received by `create_company`, in call order.
    #[must_use]
    pub fn created(&self) -> Vec<CompanyDraft> {
        self.lock().created.clone()
    }

    /// Ids received by `delete_company`, in call order.
    #[must_use]
    pub fn deleted(&self) -> Vec<CompanyId> {
        self.lock().deleted.clone()
    }

    /// Current contents of the in-memory table.
    #[must_use]
    pub fn companies(&self) -> Vec<Company> {
        self.lock().companies.clone()
    }
}

impl Inner {
    fn insert(&mut self, draft: &CompanyDraft) -> Reply<()> {
        let id = CompanyId::new(self.next_id)?;
        self.next_id += 1;
        self.companies.push(Company {
            id: Some(id),
            name: draft.name.clone(),
            description: draft.description.clone(),
            industry: draft.industry.clone(),
            size: draft.size.clone(),
            location: draft.location.clone(),
        });
        Ok(())
    }

    fn remove(&mut self, id: CompanyId) -> Reply<()> {
        let before = self.companies.len();
        self.companies.retain(|company| company.id != Some(id));
        if self.companies.len() == before {
            return Err(DirectoryError::Server {
                status: 404,
                message: format!("company {id} not found"),
            });
        }
        Ok(())
    }
}

impl DirectoryGateway for ScriptedGateway {
    async fn list_companies(&self) -> Reply<Vec<Company>> {
        let step = {
            let mut inner = self.lock();
            inner.calls.list += 1;
            match inner.list.pop_front() {
                Some(step) => step,
                None => Scripted::Ready(Ok(inner.companies.clone())),
            }
        };
        step.resolve().await
    }

    async fn create_company(&self, draft: &CompanyDraft) -> Reply<()> {
        let step = {
            let mut inner = self.lock();
            inner.calls.create += 1;
            inner.created.push(draft.clone());
            match inner.create.pop_front() {
                Some(step) => step,
                None => Scripted::Ready(inner.insert(draft)),
            }
        };
        step.resolve().await
    }

    async fn delete_company(&self, id: CompanyId) -> Reply<()> {
        let step = {
            let mut inner = self.lock();
            inner.calls.delete += 1;
            inner.deleted.push(id);
            match inner.delete.pop_front() {
                Some(step) => step,
                None => Scripted::Ready(inner.remove(id)),
            }
        };
        step.resolve().await
    }

    async fn search_companies(&self, query: &str) -> Reply<SearchResult> {
        let step = {
            let mut inner = self.lock();
            inner.calls.search += 1;
            inner.queries.push(query.to_string());
            match inner.search.pop_front() {
                Some(step) => step,
                None => Scripted::Ready(Ok(SearchResult {
                    narrative: format!("No matches for '{query}'"),
                    recommendations: Vec::new(),
                    source: "scripted".to_string(),
                })),
            }
        };
        step.resolve().await
    }
}
