use serde::{Deserialize, Serialize};

use super::Company;

/// The outcome of one search query.
///
/// Immutable once produced: a new query replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Narrative summary of the result, rendered as rich text.
    pub narrative: String,
    /// Ranked recommendations. Order is the ranking.
    pub recommendations: Vec<Company>,
    /// Opaque provenance tag; empty when the backend does not send one.
    pub source: String,
}

impl SearchResult {
    /// True when the backend produced no recommendations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}
