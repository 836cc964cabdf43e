//! Durable collection of expense records.

use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::{ByteStore, EXPENSES_KEY};
use crate::core::currency::CurrencyConverter;
use crate::core::expense::{ExpenseDraft, ExpensePatch, ExpenseRecord};

/// Stores expenses as one JSON array under a fixed key.
///
/// Every mutation holds `write_lock` across its load-modify-save cycle, so
/// racing adds on the shared collection cannot lose updates. A failed save
/// surfaces as an error and leaves the stored collection untouched.
pub struct ExpenseStore {
    backend: Arc<dyn ByteStore>,
    converter: CurrencyConverter,
    write_lock: Mutex<()>,
}

impl ExpenseStore {
    pub fn new(backend: Arc<dyn ByteStore>, converter: CurrencyConverter) -> Self {
        ExpenseStore {
            backend,
            converter,
            write_lock: Mutex::new(()),
        }
    }

    /// Records a new expense: obtains the conversion snapshot, stamps id and
    /// created_at, prepends to the collection and persists it.
    ///
    /// The conversion never fails (it degrades to a 1:1 snapshot); only a
    /// persistence failure is reported, in which case nothing was added.
    pub async fn add(&self, draft: ExpenseDraft) -> Result<ExpenseRecord> {
        let conversion = self
            .converter
            .convert(draft.amount, &draft.currency)
            .await;

        let record = ExpenseRecord {
            id: format!("expense_{}", Uuid::new_v4()),
            category_id: draft.category_id,
            amount: draft.amount,
            currency: draft.currency,
            date: draft.date,
            created_at: Utc::now().to_rfc3339(),
            receipt: draft.receipt,
            conversion: Some(conversion),
        };

        let _guard = self.write_lock.lock().await;
        let mut records = self.load_collection();
        records.insert(0, record.clone());
        self.save_collection(&records)?;
        debug!(id = %record.id, "Stored expense");

        Ok(record)
    }

    /// All records sorted by transaction date, most recent first. The sort is
    /// stable, so records sharing a date keep their stored (newest-insert-
    /// first) order; records with unparseable dates sink to the end.
    pub fn list(&self) -> Vec<ExpenseRecord> {
        let mut records = self.load_collection();
        records.sort_by(|a, b| b.day().cmp(&a.day()));
        records
    }

    pub fn get_by_category(&self, category_id: &str) -> Vec<ExpenseRecord> {
        self.list()
            .into_iter()
            .filter(|record| record.category_id == category_id)
            .collect()
    }

    /// Replaces the named fields of an existing record. Returns false when
    /// the id is unknown.
    pub async fn update(&self, id: &str, patch: ExpensePatch) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_collection();
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(false);
        };
        patch.apply_to(record);
        self.save_collection(&records)?;
        debug!(id = %id, "Updated expense");
        Ok(true)
    }

    /// Removes a record. Returns false when the id is unknown.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.load_collection();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(false);
        }
        self.save_collection(&records)?;
        debug!(id = %id, "Deleted expense");
        Ok(true)
    }

    fn load_collection(&self) -> Vec<ExpenseRecord> {
        match self.backend.load(EXPENSES_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                debug!(error = %e, "Stored expenses failed to parse, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                debug!(error = %e, "Loading expenses failed, starting empty");
                Vec::new()
            }
        }
    }

    fn save_collection(&self, records: &[ExpenseRecord]) -> Result<()> {
        let bytes = serde_json::to_vec(records).context("Failed to serialize expenses")?;
        self.backend
            .save(EXPENSES_KEY, &bytes)
            .context("Failed to persist expenses")
    }
}
