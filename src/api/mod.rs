//! Data Access
//!
//! A uniform async operation surface over the script service. Two sources
//! implement the same trait: `RemoteSource` talks HTTP, `FixtureSource`
//! serves demo data. Selection follows the configured endpoint URL; the
//! shell reselects whenever the URL changes.

mod fixture;
mod remote;

pub use fixture::FixtureSource;
pub use remote::RemoteSource;

use async_trait::async_trait;
use serde::Deserialize;
use std::rc::Rc;
use thiserror::Error;

use crate::config;
use crate::models::{ChecklistDay, ChecklistUpdate, FinanceRecord, MasterDataItem, Role, User};

/// Sheet holding the category-scoped master data
pub const MASTER_DATA_SHEET: &str = "MasterData";
/// Sheet holding the finance reports
pub const FINANCE_SHEET: &str = "Finance";

/// Failure taxonomy for service operations. Every variant is transient from
/// the UI's point of view; views recover through their refresh action.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or fetch-level failure
    #[error("permintaan jaringan gagal: {0}")]
    Transport(String),
    /// Non-success HTTP status
    #[error("HTTP {0}")]
    Status(u16),
    /// `error` field in an otherwise valid response
    #[error("{0}")]
    Service(String),
    /// Body did not match the expected shape
    #[error("respons tidak dikenali: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Acknowledgment envelope returned by mutating operations
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "crate::models::opt_id_string")]
    pub id: Option<String>,
}

/// Uniform operation surface over the remote service or the demo fixtures
#[async_trait(?Send)]
pub trait DataSource {
    async fn get_users(&self) -> Result<Vec<User>, ApiError>;
    async fn add_user(&self, name: &str, role: Role) -> Result<Ack, ApiError>;
    async fn get_checklist(&self, date: &str) -> Result<ChecklistDay, ApiError>;
    async fn update_checklist(&self, update: &ChecklistUpdate) -> Result<Ack, ApiError>;
    async fn get_finance(&self) -> Result<Vec<FinanceRecord>, ApiError>;
    async fn add_finance(&self, record: &FinanceRecord) -> Result<Ack, ApiError>;
    async fn get_master_data(&self, category: &str) -> Result<Vec<MasterDataItem>, ApiError>;
    async fn add_master_data(&self, category: &str, content: &str) -> Result<Ack, ApiError>;
    async fn delete_data(&self, sheet_name: &str, id: &str) -> Result<Ack, ApiError>;
}

/// Pick the source for a configured endpoint. The placeholder deployment id
/// routes every operation to fixtures; anything else goes over the wire.
pub fn select_source(url: &str) -> Rc<dyn DataSource> {
    if config::is_demo_url(url) {
        Rc::new(FixtureSource)
    } else {
        Rc::new(RemoteSource::new(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_with_numeric_id() {
        let ack: Ack = serde_json::from_str(r#"{"success":true,"id":1739088000000}"#)
            .expect("ack should deserialize");
        assert!(ack.success);
        assert_eq!(ack.id.as_deref(), Some("1739088000000"));
    }

    #[test]
    fn test_ack_defaults_to_failure() {
        let ack: Ack = serde_json::from_str("{}").expect("empty ack should deserialize");
        assert!(!ack.success);
        assert_eq!(ack.id, None);
    }
}
