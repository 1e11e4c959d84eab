//! # beacon-gateway
//!
//! Network access to the company directory backend.
//!
//! Four operations map onto the backend's REST contract:
//!
//! | Operation | Request | Success |
//! |---|---|---|
//! | [`DirectoryGateway::list_companies`] | `GET /companies` | `{ companies: Company[] }` |
//! | [`DirectoryGateway::create_company`] | `POST /companies` | any 2xx |
//! | [`DirectoryGateway::delete_company`] | `DELETE /companies/{id}` | exactly `200` |
//! | [`DirectoryGateway::search_companies`] | `POST /search-company` | `{ response, company_recommendations, source }` |
//!
//! Every failure is classified as a [`DirectoryError`]. There are no retries
//! and no timeout beyond the transport default. The gateway holds no state.

mod client;
mod decode;
mod http;

pub use client::HttpGateway;

use std::future::Future;

use beacon_core::{Company, CompanyDraft, CompanyId, DirectoryError, SearchResult};

/// Contract between the directory sessions and the backend.
///
/// [`HttpGateway`] is the production implementation; sessions are generic over
/// this trait so they can be driven by scripted gateways in tests.
pub trait DirectoryGateway: Send + Sync {
    /// Fetch every company in backend order.
    fn list_companies(&self) -> impl Future<Output = Result<Vec<Company>, DirectoryError>> + Send;

    /// Persist a new company. The draft is sent as-is.
    fn create_company(
        &self,
        draft: &CompanyDraft,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;

    /// Delete a company by id. Only an explicit `200` counts as success.
    fn delete_company(
        &self,
        id: CompanyId,
    ) -> impl Future<Output = Result<(), DirectoryError>> + Send;

    /// Run a natural-language search.
    ///
    /// A blank query fails with [`DirectoryError::Validation`] without a request.
    fn search_companies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<SearchResult, DirectoryError>> + Send;
}
