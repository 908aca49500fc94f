//! Data Models
//!
//! Shapes exchanged with the spreadsheet-backed script service.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Staff role as stored in the Users sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Terapis,
    Manager,
}

impl Role {
    pub fn is_manager(self) -> bool {
        matches!(self, Role::Manager)
    }

    /// Display label for the session badge
    pub fn label(self) -> &'static str {
        match self {
            Role::Terapis => "Terapis",
            Role::Manager => "Manager",
        }
    }
}

/// Registered user (Users sheet row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "id_string")]
    pub uid: String,
    pub name: String,
    pub role: Role,
}

/// Locally remembered identity; never verified against the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub role: Role,
}

/// One checklist item's state for a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    pub checked: bool,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub time: String,
}

/// Checklist record for one calendar date (`YYYY-MM-DD`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChecklistDay {
    pub date: String,
    #[serde(default)]
    pub items: HashMap<String, ChecklistEntry>,
}

/// Write shape for a single checklist toggle
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistUpdate {
    pub date: String,
    pub item_id: String,
    pub checked: bool,
    pub by: String,
    pub time: String,
}

/// Category-scoped free-text entry (MasterData sheet row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterDataItem {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub content: String,
}

/// Daily finance report row; amounts are integer rupiah
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    #[serde(
        default,
        deserialize_with = "opt_id_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub date: String,
    pub omzet: i64,
    #[serde(default)]
    pub ops: i64,
    #[serde(default)]
    pub gaji: i64,
    pub profit: i64,
    pub saved_by: String,
    #[serde(default)]
    pub note: String,
}

/// Find a registered user by display name, trimmed and case-insensitive.
/// Decides the login flow: a hit logs in as the stored record, a miss
/// registers the typed name first.
pub fn find_user_by_name<'a>(users: &'a [User], name: &str) -> Option<&'a User> {
    let wanted = name.trim();
    users
        .iter()
        .find(|user| user.name.trim().eq_ignore_ascii_case(wanted))
}

/// Sheet ids arrive as strings or numbers depending on the column type
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Num(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Num(num) => num.to_string(),
        }
    }
}

pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

pub(crate) fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(RawId::into_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_numeric_uid() {
        let user: User = serde_json::from_str(r#"{"uid":7,"name":"Ahmad","role":"terapis"}"#)
            .expect("numeric uid should deserialize");
        assert_eq!(user.uid, "7");
        assert_eq!(user.role, Role::Terapis);
    }

    #[test]
    fn test_user_with_string_uid() {
        let user: User = serde_json::from_str(r#"{"uid":"2","name":"Budi","role":"manager"}"#)
            .expect("string uid should deserialize");
        assert_eq!(user.uid, "2");
        assert!(user.role.is_manager());
    }

    #[test]
    fn test_checklist_day_without_items() {
        let day: ChecklistDay = serde_json::from_str(r#"{"date":"2025-02-09"}"#)
            .expect("missing items should default to empty");
        assert_eq!(day.date, "2025-02-09");
        assert!(day.items.is_empty());
    }

    #[test]
    fn test_finance_record_with_missing_optionals() {
        let record: FinanceRecord = serde_json::from_str(
            r#"{"date":"2025-02-09","omzet":1000000,"profit":500000,"saved_by":"Budi"}"#,
        )
        .expect("optional fields should default");
        assert_eq!(record.id, None);
        assert_eq!(record.ops, 0);
        assert_eq!(record.gaji, 0);
        assert_eq!(record.note, "");
    }

    #[test]
    fn test_finance_record_skips_empty_id_on_save() {
        let record = FinanceRecord {
            id: None,
            date: "2025-02-09".to_string(),
            omzet: 1_000_000,
            ops: 200_000,
            gaji: 100_000,
            profit: 700_000,
            saved_by: "Budi".to_string(),
            note: "Laporan harian".to_string(),
        };
        let json = serde_json::to_value(&record).expect("record should serialize");
        assert!(json.get("id").is_none());
        assert_eq!(json["profit"], 700_000);
    }

    #[test]
    fn test_find_user_is_trimmed_and_case_insensitive() {
        let users = vec![
            User { uid: "1".to_string(), name: "Ahmad".to_string(), role: Role::Terapis },
            User { uid: "2".to_string(), name: "Budi".to_string(), role: Role::Manager },
        ];
        assert_eq!(find_user_by_name(&users, "  ahmad ").map(|u| u.uid.as_str()), Some("1"));
        assert_eq!(find_user_by_name(&users, "BUDI").map(|u| u.uid.as_str()), Some("2"));
        assert!(find_user_by_name(&users, "Citra").is_none());
    }
}
