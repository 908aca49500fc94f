//! Fixture Source
//!
//! Deterministic in-memory data backing demo mode, so the UI can be
//! exercised without a configured deployment. No network access; writes
//! acknowledge success without persisting anything.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;

use super::{Ack, ApiError, DataSource};
use crate::models::{
    ChecklistDay, ChecklistEntry, ChecklistUpdate, FinanceRecord, MasterDataItem, Role, User,
};

pub struct FixtureSource;

pub fn demo_users() -> Vec<User> {
    vec![
        User {
            uid: "1".to_string(),
            name: "Ahmad".to_string(),
            role: Role::Terapis,
        },
        User {
            uid: "2".to_string(),
            name: "Budi".to_string(),
            role: Role::Manager,
        },
    ]
}

pub fn demo_master_data(category: &str) -> Vec<MasterDataItem> {
    let entries: &[(&str, &str)] = match category {
        "checklist" => &[
            ("1", "Sapu & pel seluruh area dengan disinfektan"),
            ("2", "Nyalakan diffuser (sereh/lavender)"),
            ("3", "Cek stok (alkohol, kassa, jarum, kop)"),
            ("4", "Briefing pagi: doa & review target"),
        ],
        "cs" => &[
            ("10", "Sapa pelanggan dengan salam dan sebut nama"),
            ("11", "Konfirmasi jadwal booking H-1 via WhatsApp"),
        ],
        "marketing" => &[
            ("20", "Posting testimoni pasien setiap Jumat"),
            ("21", "Target 10 booking baru per minggu"),
        ],
        "sdm" => &[
            ("30", "Terapis hadir 15 menit sebelum shift"),
            ("31", "Seragam lengkap selama jam operasional"),
        ],
        _ => &[],
    };
    entries
        .iter()
        .map(|(id, content)| MasterDataItem {
            id: (*id).to_string(),
            content: (*content).to_string(),
        })
        .collect()
}

pub fn demo_checklist(date: &str) -> ChecklistDay {
    let mut items = HashMap::new();
    items.insert(
        "1".to_string(),
        ChecklistEntry {
            checked: true,
            by: "Ahmad".to_string(),
            time: "08:00".to_string(),
        },
    );
    ChecklistDay {
        date: date.to_string(),
        items,
    }
}

pub fn demo_finance() -> Vec<FinanceRecord> {
    vec![FinanceRecord {
        id: Some("101".to_string()),
        date: "2025-02-09".to_string(),
        omzet: 1_000_000,
        ops: 350_000,
        gaji: 150_000,
        profit: 500_000,
        saved_by: "Budi".to_string(),
        note: "Laporan harian".to_string(),
    }]
}

fn granted() -> Ack {
    Ack {
        success: true,
        id: None,
    }
}

#[async_trait(?Send)]
impl DataSource for FixtureSource {
    async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(demo_users())
    }

    async fn add_user(&self, _name: &str, _role: Role) -> Result<Ack, ApiError> {
        Ok(granted())
    }

    async fn get_checklist(&self, date: &str) -> Result<ChecklistDay, ApiError> {
        Ok(demo_checklist(date))
    }

    async fn update_checklist(&self, _update: &ChecklistUpdate) -> Result<Ack, ApiError> {
        Ok(granted())
    }

    async fn get_finance(&self) -> Result<Vec<FinanceRecord>, ApiError> {
        Ok(demo_finance())
    }

    async fn add_finance(&self, _record: &FinanceRecord) -> Result<Ack, ApiError> {
        Ok(granted())
    }

    async fn get_master_data(&self, category: &str) -> Result<Vec<MasterDataItem>, ApiError> {
        Ok(demo_master_data(category))
    }

    async fn add_master_data(&self, _category: &str, _content: &str) -> Result<Ack, ApiError> {
        Ok(Ack {
            success: true,
            id: Some(Utc::now().timestamp_millis().to_string()),
        })
    }

    async fn delete_data(&self, _sheet_name: &str, _id: &str) -> Result<Ack, ApiError> {
        Ok(granted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_deterministic() {
        assert_eq!(demo_users(), demo_users());
        assert_eq!(demo_finance(), demo_finance());
        assert_eq!(demo_master_data("cs"), demo_master_data("cs"));
    }

    #[test]
    fn test_known_categories_are_non_empty() {
        for category in ["checklist", "cs", "marketing", "sdm"] {
            assert!(!demo_master_data(category).is_empty(), "{category} is empty");
        }
        assert!(demo_master_data("unknown").is_empty());
    }

    #[test]
    fn test_demo_checklist_references_a_master_item() {
        let day = demo_checklist("2025-02-09");
        assert_eq!(day.date, "2025-02-09");
        let master_ids: Vec<String> = demo_master_data("checklist")
            .into_iter()
            .map(|item| item.id)
            .collect();
        for id in day.items.keys() {
            assert!(master_ids.contains(id), "entry {id} has no master item");
        }
    }

    #[test]
    fn test_demo_finance_profit_is_consistent() {
        for record in demo_finance() {
            assert_eq!(record.profit, record.omzet - (record.ops + record.gaji));
        }
    }
}
