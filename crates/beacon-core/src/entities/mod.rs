//! Entity structs for the company directory.
//!
//! All structs derive `Serialize` and `Deserialize` using the backend's wire
//! field names, so they double as request/response bodies.

mod company;
mod search;

pub use company::{Company, CompanyDraft, CompanyField};
pub use search::SearchResult;
