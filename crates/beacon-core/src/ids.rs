//! Backend-assigned company identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DirectoryError;

/// A well-formed company identifier: a positive integer assigned by the backend.
///
/// Decoding from the wire trusts the backend; constructing one from local input
/// goes through [`CompanyId::new`] or [`str::parse`], which reject anything that
/// could not name a persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(i64);

impl CompanyId {
    /// Validate a raw integer as an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if `raw` is zero or negative.
    pub fn new(raw: i64) -> Result<Self, DirectoryError> {
        if raw <= 0 {
            return Err(DirectoryError::Validation(format!(
                "company id must be a positive integer, got {raw}"
            )));
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CompanyId {
    type Err = DirectoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::Validation(
                "company id is required".to_string(),
            ));
        }
        let raw = trimmed.parse::<i64>().map_err(|_| {
            DirectoryError::Validation(format!("company id must be an integer, got '{trimmed}'"))
        })?;
        Self::new(raw)
    }
}
