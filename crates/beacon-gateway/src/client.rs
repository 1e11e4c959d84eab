//! `reqwest`-backed implementation of [`DirectoryGateway`].

use beacon_config::BackendConfig;
use beacon_core::{Company, CompanyDraft, CompanyId, DirectoryError, SearchResult};
use reqwest::StatusCode;
use serde::Serialize;

use crate::DirectoryGateway;
use crate::decode;
use crate::http::{body_bytes, check_exact, check_success, transport_error};

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

/// HTTP client for the directory backend.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway from backend settings.
    ///
    /// No request timeout is set; the transport default applies.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Network`] if the underlying client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, DirectoryError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DirectoryError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.trimmed_base_url().to_string(),
        })
    }

    /// Build a gateway for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Same as [`HttpGateway::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, DirectoryError> {
        Self::new(&BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl DirectoryGateway for HttpGateway {
    async fn list_companies(&self) -> Result<Vec<Company>, DirectoryError> {
        tracing::debug!("GET /companies");
        let resp = self
            .http
            .get(self.url("/companies"))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let resp = check_success(resp).await?;
        let companies = decode::list_body(&body_bytes(resp).await?)?;
        tracing::debug!(count = companies.len(), "listed companies");
        Ok(companies)
    }

    async fn create_company(&self, draft: &CompanyDraft) -> Result<(), DirectoryError> {
        tracing::debug!(name = %draft.name, "POST /companies");
        let resp = self
            .http
            .post(self.url("/companies"))
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        check_success(resp).await?;
        Ok(())
    }

    async fn delete_company(&self, id: CompanyId) -> Result<(), DirectoryError> {
        tracing::debug!(%id, "DELETE /companies/{{id}}");
        let resp = self
            .http
            .delete(self.url(&format!("/companies/{id}")))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        check_exact(resp, StatusCode::OK).await?;
        Ok(())
    }

    async fn search_companies(&self, query: &str) -> Result<SearchResult, DirectoryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DirectoryError::Validation(
                "search query must not be empty".to_string(),
            ));
        }

        tracing::debug!(query, "POST /search-company");
        let resp = self
            .http
            .post(self.url("/search-company"))
            .json(&SearchRequest { query })
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let resp = check_success(resp).await?;
        let result = decode::search_body(&body_bytes(resp).await?)?;
        tracing::debug!(
            recommendations = result.recommendations.len(),
            source = %result.source,
            "search resolved"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let gateway = HttpGateway::with_base_url("http://localhost:8000/").unwrap();
        assert_eq!(gateway.url("/companies"), "http://localhost:8000/companies");
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let gateway = HttpGateway::with_base_url("https://example.com/api").unwrap();
        assert_eq!(
            gateway.url("/search-company"),
            "https://example.com/api/search-company"
        );
    }

    #[tokio::test]
    async fn blank_query_is_rejected_before_any_request() {
        // Nothing listens here; a request attempt would surface as a network error.
        let gateway = HttpGateway::with_base_url("http://127.0.0.1:9").unwrap();
        let err = gateway.search_companies("   ").await.unwrap_err();
        assert!(matches!(err, DirectoryError::Validation(_)));
    }
}
