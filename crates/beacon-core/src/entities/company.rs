use serde::{Deserialize, Serialize};

use crate::ids::CompanyId;

/// A directory entry as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    /// Backend-assigned identifier. `None` until persisted, and for search
    /// recommendations the backend returns without ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompanyId>,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub size: String,
    pub location: String,
}

impl Company {
    /// Detach the editable fields as a draft.
    #[must_use]
    pub fn to_draft(&self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            industry: self.industry.clone(),
            size: self.size.clone(),
            location: self.location.clone(),
        }
    }
}

/// The five text fields of a company before it is persisted.
///
/// Serializes to the body of `POST /companies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub description: String,
    pub industry: String,
    pub size: String,
    pub location: String,
}

/// Names one of the draft's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    Description,
    Industry,
    Size,
    Location,
}

impl CompanyField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Description,
        Self::Industry,
        Self::Size,
        Self::Location,
    ];

    /// Wire/field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Industry => "industry",
            Self::Size => "size",
            Self::Location => "location",
        }
    }

    /// Human label used by prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Company Name",
            Self::Description => "Description",
            Self::Industry => "Industry",
            Self::Size => "Size",
            Self::Location => "Location",
        }
    }
}

impl std::fmt::Display for CompanyField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CompanyDraft {
    /// Read one field.
    #[must_use]
    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::Name => &self.name,
            CompanyField::Description => &self.description,
            CompanyField::Industry => &self.industry,
            CompanyField::Size => &self.size,
            CompanyField::Location => &self.location,
        }
    }

    /// Overwrite one field.
    pub fn set(&mut self, field: CompanyField, value: impl Into<String>) {
        let slot = match field {
            CompanyField::Name => &mut self.name,
            CompanyField::Description => &mut self.description,
            CompanyField::Industry => &mut self.industry,
            CompanyField::Size => &mut self.size,
            CompanyField::Location => &mut self.location,
        };
        *slot = value.into();
    }

    /// Fields that are empty or whitespace-only, in form order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<CompanyField> {
        CompanyField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// True when every field is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        CompanyField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}
