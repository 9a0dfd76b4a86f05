use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::event::TransactionRecord;
use crate::models::suggestion::SymbolSuggestion;
use crate::models::summary::PortfolioSnapshot;

/// Trait abstraction over the dashboard backend.
///
/// The poll loop, the suggestion lookup and the outbound sync all go
/// through this seam, so every service can be exercised against an
/// in-memory mock. The real implementation is
/// [`BackendClient`](super::backend::BackendClient).
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Fetch the cold-start snapshot. Used only while no local holdings
    /// exist yet.
    async fn fetch_cold_snapshot(&self) -> Result<PortfolioSnapshot, CoreError>;

    /// Fetch a live refresh snapshot.
    async fn fetch_snapshot(&self) -> Result<PortfolioSnapshot, CoreError>;

    /// Look up ticker suggestions for a partial symbol.
    async fn symbol_suggestions(&self, query: &str) -> Result<Vec<SymbolSuggestion>, CoreError>;

    /// Notify the backend of a locally-added transaction.
    async fn add_transaction(&self, record: &TransactionRecord) -> Result<(), CoreError>;

    /// Notify the backend of a locally-deleted transaction.
    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), CoreError>;
}
