//! Expense record types and their persisted JSON shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::currency::ConversionSnapshot;
use crate::core::relative_date;

/// A single stored expense. Field names on the wire match the JSON the web
/// frontend persisted, so existing collections deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    #[serde(rename = "category")]
    pub category_id: String,
    /// Amount in `currency`'s denomination. Positivity is the caller's
    /// contract; the store does not validate it.
    pub amount: f64,
    pub currency: String,
    /// User-selected transaction date (`YYYY-MM-DD`). All period bucketing
    /// uses this field.
    pub date: String,
    /// Insert timestamp (RFC 3339). Only an insertion-order tiebreak.
    pub created_at: String,
    /// Opaque encoded receipt (data URI), passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
    #[serde(
        rename = "currencyConversion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub conversion: Option<ConversionSnapshot>,
}

impl ExpenseRecord {
    /// Calendar day of the transaction, when the stored date parses.
    pub fn day(&self) -> Option<NaiveDate> {
        relative_date::parse_timestamp(&self.date).map(|moment| moment.date())
    }
}

/// Input for [`crate::store::expenses::ExpenseStore::add`]; the store stamps
/// id, created_at and the conversion snapshot.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub category_id: String,
    pub amount: f64,
    pub currency: String,
    pub date: String,
    pub receipt: Option<String>,
}

/// Partial update; replaces only the named fields. Coherence between amount,
/// currency and an existing conversion snapshot is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub category_id: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub date: Option<String>,
    pub receipt: Option<String>,
}

impl ExpensePatch {
    pub fn apply_to(&self, record: &mut ExpenseRecord) {
        if let Some(category_id) = &self.category_id {
            record.category_id = category_id.clone();
        }
        if let Some(amount) = self.amount {
            record.amount = amount;
        }
        if let Some(currency) = &self.currency {
            record.currency = currency.clone();
        }
        if let Some(date) = &self.date {
            record.date = date.clone();
        }
        if let Some(receipt) = &self.receipt {
            record.receipt = Some(receipt.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_frontend_json() {
        let json = r#"{
            "id": "expense_1705312800000_k3j9d8a2b",
            "category": "entertainment",
            "amount": 50,
            "date": "2024-01-15",
            "currency": "EUR",
            "createdAt": "2024-01-15T11:00:00Z",
            "currencyConversion": {
                "originalAmount": 50,
                "originalCurrency": "EUR",
                "usdAmount": 55,
                "exchangeRate": 1.1,
                "lastUpdated": "2024-01-15T11:00:00Z"
            }
        }"#;

        let record: ExpenseRecord = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(record.category_id, "entertainment");
        assert_eq!(record.amount, 50.0);
        assert_eq!(record.created_at, "2024-01-15T11:00:00Z");
        assert!(record.receipt.is_none());

        let conversion = record.conversion.as_ref().unwrap();
        assert_eq!(conversion.usd_amount, 55.0);
        assert_eq!(conversion.exchange_rate, 1.1);
        assert_eq!(conversion.original_currency, record.currency);
        assert_eq!(conversion.original_amount, record.amount);
    }

    #[test]
    fn test_serialization_round_trips() {
        let record = ExpenseRecord {
            id: "expense_a".to_string(),
            category_id: "groceries".to_string(),
            amount: 12.5,
            currency: "USD".to_string(),
            date: "2024-02-29".to_string(),
            created_at: "2024-02-29T08:00:00+00:00".to_string(),
            receipt: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
            conversion: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"category\":\"groceries\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("currencyConversion"));

        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_day_parses_date_and_timestamp() {
        let mut record = ExpenseRecord {
            id: "expense_b".to_string(),
            category_id: "gas".to_string(),
            amount: 30.0,
            currency: "USD".to_string(),
            date: "2024-01-15".to_string(),
            created_at: "2024-01-15T10:00:00Z".to_string(),
            receipt: None,
            conversion: None,
        };
        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2024, 1, 15));

        record.date = "2024-01-15T22:45:00".to_string();
        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2024, 1, 15));

        record.date = "not-a-date".to_string();
        assert!(record.day().is_none());
    }

    #[test]
    fn test_patch_replaces_only_named_fields() {
        let mut record = ExpenseRecord {
            id: "expense_c".to_string(),
            category_id: "dining".to_string(),
            amount: 20.0,
            currency: "USD".to_string(),
            date: "2024-01-10".to_string(),
            created_at: "2024-01-10T09:00:00Z".to_string(),
            receipt: None,
            conversion: None,
        };

        let patch = ExpensePatch {
            amount: Some(25.0),
            date: Some("2024-01-11".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut record);

        assert_eq!(record.amount, 25.0);
        assert_eq!(record.date, "2024-01-11");
        assert_eq!(record.category_id, "dining");
        assert_eq!(record.id, "expense_c");
    }
}
