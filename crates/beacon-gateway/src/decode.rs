//! Response body decoding.
//!
//! List responses are decoded strictly. Search responses are decoded
//! defensively: the narrative must be present, but a missing or malformed
//! recommendation list degrades to an empty one.

use beacon_core::{Company, DirectoryError, SearchResult};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ListBody {
    companies: Vec<Company>,
}

#[derive(Deserialize)]
struct SearchBody {
    response: String,
    #[serde(default)]
    company_recommendations: Value,
    #[serde(default)]
    source: Value,
}

/// Decode `{ "companies": Company[] }`.
pub fn list_body(bytes: &[u8]) -> Result<Vec<Company>, DirectoryError> {
    serde_json::from_slice::<ListBody>(bytes)
        .map(|body| body.companies)
        .map_err(|e| DirectoryError::Protocol(format!("invalid company list: {e}")))
}

/// Decode `{ "response", "company_recommendations", "source" }`.
pub fn search_body(bytes: &[u8]) -> Result<SearchResult, DirectoryError> {
    let body: SearchBody = serde_json::from_slice(bytes)
        .map_err(|e| DirectoryError::Protocol(format!("invalid search response: {e}")))?;

    Ok(SearchResult {
        narrative: body.response,
        recommendations: recommendations(body.company_recommendations),
        source: match body.source {
            Value::String(source) => source,
            _ => String::new(),
        },
    })
}

fn recommendations(value: Value) -> Vec<Company> {
    match value {
        Value::Null => {
            tracing::debug!("search response has no company_recommendations");
            Vec::new()
        }
        Value::Array(_) => serde_json::from_value(value).unwrap_or_else(|error| {
            tracing::warn!(%error, "malformed company_recommendations; treating as empty");
            Vec::new()
        }),
        other => {
            tracing::warn!(
                kind = json_kind(&other),
                "company_recommendations is not an array; treating as empty"
            );
            Vec::new()
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
