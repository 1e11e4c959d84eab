//! # beacon-core
//!
//! Core types shared across all Beacon crates:
//! - Directory entities (`Company`, `CompanyDraft`, `SearchResult`)
//! - Validated backend identifiers (`CompanyId`)
//! - The client error taxonomy (`DirectoryError`)
//! - The notification sink contract consumed by front ends

pub mod entities;
pub mod errors;
pub mod ids;
pub mod notify;

pub use entities::{Company, CompanyDraft, CompanyField, SearchResult};
pub use errors::DirectoryError;
pub use ids::CompanyId;
pub use notify::{Notification, NotificationLevel, NotificationSink};
