//! # beacon-session
//!
//! Client-side state for the company directory:
//! - [`DirectoryStore`]: the authoritative company list, refreshed wholesale
//! - [`SearchSession`]: one query's lifecycle and its [`SearchResult`](beacon_core::SearchResult)
//! - [`CompanyForm`]: the add-company fields and submission lifecycle
//! - [`Directory`]: wires the three together over one gateway and one sink
//!
//! Every piece of state lives in a `tokio::sync::watch` channel so any number
//! of views can subscribe. Responses are sequenced with [`RequestSequencer`]
//! so an older response never overwrites a newer one.

mod directory;
mod form;
mod search;
mod sequence;
mod store;

pub mod testing;

pub use directory::Directory;
pub use form::{CompanyForm, FormState};
pub use search::{SearchPhase, SearchSession, SearchState};
pub use sequence::{Outcome, RequestSequencer, Ticket};
pub use store::{DirectoryState, DirectoryStore};
