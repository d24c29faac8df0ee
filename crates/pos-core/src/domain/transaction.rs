//! Transaction Entity
//!
//! Completed or pending sales as listed by the backend.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::entity::opaque_id;
use crate::money::Money;

opaque_id!(
    /// Server-issued transaction identifier
    TransactionId
);

impl TransactionId {
    /// First eight characters followed by an ellipsis, for cards
    pub fn short(&self) -> String {
        let head: String = self.as_str().chars().take(8).collect();
        format!("{}...", head)
    }
}

/// Transaction lifecycle status (case-insensitive on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    Other(String),
}

impl TransactionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => TransactionStatus::Pending,
            "completed" => TransactionStatus::Completed,
            "failed" => TransactionStatus::Failed,
            "cancelled" | "canceled" => TransactionStatus::Cancelled,
            _ => TransactionStatus::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Pending => "pending",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Cancelled => "cancelled",
            TransactionStatus::Other(raw) => raw,
        }
    }

    /// CSS class of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "status-badge completed",
            TransactionStatus::Pending => "status-badge pending",
            TransactionStatus::Failed | TransactionStatus::Cancelled => "status-badge failed",
            TransactionStatus::Other(_) => "status-badge unknown",
        }
    }
}

/// A missing or null status renders as an empty badge
impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Other(String::new())
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl Serialize for TransactionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|raw| TransactionStatus::parse(&raw)).unwrap_or_default())
    }
}

/// One row of `GET /transactions`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: TransactionId,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_note: Option<String>,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default, deserialize_with = "money_or_zero")]
    pub total_amount: Money,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

fn money_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    Ok(Option::<Money>::deserialize(deserializer)?.unwrap_or_default())
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// RFC 3339, or a zone-less timestamp read as local time. Anything else
/// becomes `None` so one odd row does not sink the whole list.
fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(serde_json::Value::as_str).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|local| local.fixed_offset())
}

impl TransactionRecord {
    pub fn customer_label(&self) -> &str {
        non_blank(self.customer_name.as_deref()).unwrap_or("Tidak ada")
    }

    pub fn note_label(&self) -> &str {
        non_blank(self.customer_note.as_deref()).unwrap_or("Tidak ada")
    }

    pub fn payment_label(&self) -> &str {
        non_blank(self.payment_method.as_deref()).unwrap_or("Belum Dipilih")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// `GET /transactions` response: `{ transactions: [...] }` or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TransactionListResponse {
    Wrapped { transactions: Vec<TransactionRecord> },
    Bare(Vec<TransactionRecord>),
}

impl TransactionListResponse {
    pub fn into_records(self) -> Vec<TransactionRecord> {
        match self {
            TransactionListResponse::Wrapped { transactions } => transactions,
            TransactionListResponse::Bare(transactions) => transactions,
        }
    }
}

/// `POST /transactions` response: `{ transaction: { id } }`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTransaction {
    pub transaction: CreatedTransactionRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedTransactionRef {
    pub id: TransactionId,
}

impl CreatedTransaction {
    pub fn into_id(self) -> TransactionId {
        self.transaction.id
    }
}
