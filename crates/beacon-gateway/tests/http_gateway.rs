//! End-to-end tests of `HttpGateway` against a scripted local backend.

mod common;

use beacon_config::BackendConfig;
use beacon_core::{CompanyDraft, CompanyId, DirectoryError};
use beacon_gateway::{DirectoryGateway, HttpGateway};
use common::{Reply, ScriptedBackend, closed_port_url};
use pretty_assertions::assert_eq;

const LIST_BODY: &str = r#"{"companies": [
    {"id": 3, "name": "Acme", "description": "Widgets", "industry": "Manufacturing", "size": "50-100", "location": "Austin"},
    {"id": 1, "name": "PayCo", "description": "Payments", "industry": "Fintech", "size": "10-50", "location": "NYC"}
]}"#;

fn acme() -> CompanyDraft {
    CompanyDraft {
        name: "Acme".into(),
        description: "Widgets".into(),
        industry: "Manufacturing".into(),
        size: "50-100".into(),
        location: "Austin".into(),
    }
}

fn gateway(backend: &ScriptedBackend) -> HttpGateway {
    HttpGateway::with_base_url(&backend.base_url).unwrap()
}

#[tokio::test]
async fn list_returns_companies_in_backend_order() {
    let backend = ScriptedBackend::always(200, LIST_BODY);
    let companies = gateway(&backend).list_companies().await.unwrap();

    let ids: Vec<i64> = companies.iter().filter_map(|c| c.id).map(CompanyId::get).collect();
    assert_eq!(ids, vec![3, 1]);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "/companies");
}

#[tokio::test]
async fn list_with_wrong_shape_is_protocol_error() {
    let backend = ScriptedBackend::always(200, r#"{"items": []}"#);
    let err = gateway(&backend).list_companies().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Protocol(_)), "{err}");
}

#[tokio::test]
async fn list_with_server_failure_is_server_error() {
    let backend = ScriptedBackend::always(503, "maintenance");
    let err = gateway(&backend).list_companies().await.unwrap_err();
    assert_eq!(
        err,
        DirectoryError::Server {
            status: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let gateway = HttpGateway::with_base_url(&closed_port_url()).unwrap();
    let err = gateway.list_companies().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Network(_)), "{err}");
}

#[tokio::test]
async fn create_posts_all_five_fields() {
    let backend = ScriptedBackend::always(200, r#"{"message": "Company added successfully"}"#);
    gateway(&backend).create_company(&acme()).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "/companies");
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Acme",
            "description": "Widgets",
            "industry": "Manufacturing",
            "size": "50-100",
            "location": "Austin"
        })
    );
}

#[tokio::test]
async fn create_accepts_any_success_status_without_body() {
    let backend = ScriptedBackend::always(201, "");
    assert!(gateway(&backend).create_company(&acme()).await.is_ok());
}

#[tokio::test]
async fn create_rejected_by_backend_is_server_error() {
    let backend = ScriptedBackend::always(422, r#"{"detail": "bad"}"#);
    let err = gateway(&backend).create_company(&acme()).await.unwrap_err();
    assert!(matches!(err, DirectoryError::Server { status: 422, .. }));
}

#[tokio::test]
async fn delete_targets_id_path() {
    let backend = ScriptedBackend::always(200, "{}");
    let id = CompanyId::new(42).unwrap();
    gateway(&backend).delete_company(id).await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].url, "/companies/42");
}

#[tokio::test]
async fn delete_requires_exactly_200() {
    let backend = ScriptedBackend::always(204, "");
    let err = gateway(&backend)
        .delete_company(CompanyId::new(1).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::Server { status: 204, .. }));
}

#[tokio::test]
async fn delete_server_failure_is_server_error() {
    let backend = ScriptedBackend::always(500, "boom");
    let err = gateway(&backend)
        .delete_company(CompanyId::new(1).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::Server { status: 500, .. }));
}

#[tokio::test]
async fn search_sends_trimmed_query_and_decodes_result() {
    let backend = ScriptedBackend::start(|method, url| match (method, url) {
        ("POST", "/search-company") => Reply::json(
            200,
            r#"{
                "response": "Here are 2 matches",
                "company_recommendations": [
                    {"id": 1, "name": "PayCo", "description": "Payments", "industry": "Fintech", "size": "10-50", "location": "NYC"},
                    {"id": 2, "name": "LendIt", "description": "Lending", "industry": "Fintech", "size": "50-100", "location": "SF"}
                ],
                "source": "vector-search"
            }"#,
        ),
        _ => Reply::json(404, ""),
    });

    let result = gateway(&backend)
        .search_companies("  fintech startups ")
        .await
        .unwrap();
    assert_eq!(result.narrative, "Here are 2 matches");
    assert_eq!(result.source, "vector-search");
    assert_eq!(result.recommendations.len(), 2);
    assert_eq!(result.recommendations[0].name, "PayCo");
    assert_eq!(result.recommendations[1].name, "LendIt");

    let sent: serde_json::Value = serde_json::from_str(&backend.requests()[0].body).unwrap();
    assert_eq!(sent, serde_json::json!({"query": "fintech startups"}));
}

#[tokio::test]
async fn search_without_recommendations_still_resolves() {
    let backend = ScriptedBackend::always(200, r#"{"response": "No matches"}"#);
    let result = gateway(&backend).search_companies("robots").await.unwrap();
    assert_eq!(result.narrative, "No matches");
    assert!(result.recommendations.is_empty());
}

#[tokio::test]
async fn blank_search_never_reaches_backend() {
    let backend = ScriptedBackend::always(200, r#"{"response": "x"}"#);
    let err = gateway(&backend).search_companies(" \t ").await.unwrap_err();
    assert!(matches!(err, DirectoryError::Validation(_)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let backend = ScriptedBackend::always(200, r#"{"companies": []}"#);
    let gateway = HttpGateway::new(&BackendConfig {
        base_url: format!("{}/", backend.base_url),
        user_agent: "beacon-it".to_string(),
    })
    .unwrap();

    gateway.list_companies().await.unwrap();
    let requests = backend.requests();
    assert_eq!(requests[0].url, "/companies");
    assert_eq!(requests[0].user_agent.as_deref(), Some("beacon-it"));
}
