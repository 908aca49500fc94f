//! Remote Source
//!
//! HTTP client for the Apps Script endpoint. A query-string `action` selects
//! the operation; bodies and response envelopes are JSON. Exactly one
//! request per operation, no retry, no timeout, no caching.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Ack, ApiError, DataSource, MASTER_DATA_SHEET};
use crate::models::{ChecklistDay, ChecklistUpdate, FinanceRecord, MasterDataItem, Role, User};

pub struct RemoteSource {
    base_url: String,
    client: reqwest::Client,
}

/// List responses wrap the rows in a `data` field; a missing field reads as
/// an empty list.
#[derive(Deserialize)]
struct ListEnvelope<T> {
    data: Option<Vec<T>>,
}

/// Parse a response body and surface the service's `error` field before any
/// typed decode.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    let value: Value = serde_json::from_str(text)?;
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(ApiError::Service(message.to_string()));
    }
    Ok(value)
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn decode(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let text = response.text().await?;
        parse_body(&text)
    }

    async fn get_value(&self, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.base_url.as_str())
            .query(query)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// POST an action. The body goes out as a plain string; a JSON
    /// content-type would trigger a CORS preflight the Apps Script runtime
    /// does not answer.
    async fn post_value<B: Serialize>(&self, action: &str, body: &B) -> Result<Value, ApiError> {
        let payload = serde_json::to_string(body)?;
        let response = self
            .client
            .post(self.base_url.as_str())
            .query(&[("action", action)])
            .body(payload)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, ApiError> {
        let value = self.get_value(query).await?;
        let envelope: ListEnvelope<T> = serde_json::from_value(value)?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn post_ack<B: Serialize>(&self, action: &str, body: &B) -> Result<Ack, ApiError> {
        let value = self.post_value(action, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait(?Send)]
impl DataSource for RemoteSource {
    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list(&[("action", "getUsers")]).await
    }

    async fn add_user(&self, name: &str, role: Role) -> Result<Ack, ApiError> {
        #[derive(Serialize)]
        struct NewUser<'a> {
            name: &'a str,
            role: Role,
        }
        self.post_ack("addUser", &NewUser { name, role }).await
    }

    async fn get_checklist(&self, date: &str) -> Result<ChecklistDay, ApiError> {
        let value = self
            .get_value(&[("action", "getChecklist"), ("date", date)])
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn update_checklist(&self, update: &ChecklistUpdate) -> Result<Ack, ApiError> {
        self.post_ack("updateChecklist", update).await
    }

    async fn get_finance(&self) -> Result<Vec<FinanceRecord>, ApiError> {
        self.get_list(&[("action", "getFinance")]).await
    }

    async fn add_finance(&self, record: &FinanceRecord) -> Result<Ack, ApiError> {
        self.post_ack("addFinance", record).await
    }

    async fn get_master_data(&self, category: &str) -> Result<Vec<MasterDataItem>, ApiError> {
        self.get_list(&[("action", "getMasterData"), ("category", category)])
            .await
    }

    async fn add_master_data(&self, category: &str, content: &str) -> Result<Ack, ApiError> {
        #[derive(Serialize)]
        struct NewEntry<'a> {
            category: &'a str,
            content: &'a str,
            #[serde(rename = "sheetName")]
            sheet_name: &'a str,
        }
        self.post_ack(
            "addData",
            &NewEntry {
                category,
                content,
                sheet_name: MASTER_DATA_SHEET,
            },
        )
        .await
    }

    async fn delete_data(&self, sheet_name: &str, id: &str) -> Result<Ack, ApiError> {
        #[derive(Serialize)]
        struct Deletion<'a> {
            #[serde(rename = "sheetName")]
            sheet_name: &'a str,
            id: &'a str,
        }
        self.post_ack("deleteData", &Deletion { sheet_name, id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins_over_shape() {
        let err = parse_body(r#"{"error":"Sheet not found","data":[]}"#)
            .expect_err("error field should reject the body");
        match err {
            ApiError::Service(message) => assert_eq!(message, "Sheet not found"),
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_reads_as_empty_list() {
        let value = parse_body(r#"{"status":"ok"}"#).expect("body should parse");
        let envelope: ListEnvelope<User> =
            serde_json::from_value(value).expect("envelope should decode");
        assert!(envelope.data.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_non_json_body_is_a_decode_error() {
        let err = parse_body("<html>redirect</html>").expect_err("html should not parse");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_checklist_update_wire_shape() {
        let update = ChecklistUpdate {
            date: "2025-02-09".to_string(),
            item_id: "3".to_string(),
            checked: true,
            by: "Ahmad".to_string(),
            time: "08:05".to_string(),
        };
        let json = serde_json::to_value(&update).expect("update should serialize");
        assert_eq!(json["date"], "2025-02-09");
        assert_eq!(json["item_id"], "3");
        assert_eq!(json["checked"], true);
    }
}
