use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Wire body of the add-transaction notification.
///
/// The backend expects snake_case keys here, unlike the camelCase snapshot
/// payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub cost_basis: f64,
    pub quantity: f64,
    pub company_name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// An outbound notification owed to the backend after a local mutation.
///
/// Local state is committed before the event is sent; delivery failure is
/// logged and never rolls the mutation back. Callers that want a stronger
/// policy (retry queue, reconciliation) can hold on to the event instead of
/// firing it detached.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundEvent {
    /// A purchase lot was added locally
    TransactionAdded(TransactionRecord),

    /// A purchase lot was deleted locally
    TransactionDeleted {
        transaction_id: String,
    },
}
