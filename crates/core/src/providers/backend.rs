use async_trait::async_trait;
use reqwest::Client;

use super::traits::PortfolioApi;
use crate::errors::CoreError;
use crate::models::event::TransactionRecord;
use crate::models::suggestion::SymbolSuggestion;
use crate::models::summary::PortfolioSnapshot;

/// HTTP client for the dashboard backend.
///
/// Endpoint paths are fixed by the backend contract:
/// - `GET  /api/cache/portfolio`           cold-start snapshot
/// - `GET  /api/portfolio`                 live snapshot
/// - `GET  /api/symbolSuggestion?q=...`    ticker lookup
/// - `POST /api/add_transaction`           add notification
/// - `DELETE /api/transactions/{id}`       delete notification
///
/// No call is retried and no client-side timeout is set: a poll, once
/// issued, runs to completion before the next one is scheduled.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_snapshot(&self, path: &str) -> Result<PortfolioSnapshot, CoreError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                endpoint: path.to_string(),
                message: format!("HTTP {}", resp.status()),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            endpoint: path.to_string(),
            message: format!("Failed to parse snapshot: {e}"),
        })
    }
}

#[async_trait]
impl PortfolioApi for BackendClient {
    async fn fetch_cold_snapshot(&self) -> Result<PortfolioSnapshot, CoreError> {
        self.get_snapshot("/api/cache/portfolio").await
    }

    async fn fetch_snapshot(&self) -> Result<PortfolioSnapshot, CoreError> {
        self.get_snapshot("/api/portfolio").await
    }

    async fn symbol_suggestions(&self, query: &str) -> Result<Vec<SymbolSuggestion>, CoreError> {
        let url = format!("{}/api/symbolSuggestion", self.base_url);
        let resp = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                endpoint: "/api/symbolSuggestion".to_string(),
                message: format!("HTTP {}", resp.status()),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            endpoint: "/api/symbolSuggestion".to_string(),
            message: format!("Failed to parse suggestions: {e}"),
        })
    }

    async fn add_transaction(&self, record: &TransactionRecord) -> Result<(), CoreError> {
        let url = format!("{}/api/add_transaction", self.base_url);
        let resp = self.client.post(&url).json(record).send().await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                endpoint: "/api/add_transaction".to_string(),
                message: format!("HTTP {}", resp.status()),
            });
        }
        Ok(())
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), CoreError> {
        let path = format!("/api/transactions/{transaction_id}");
        let url = format!("{}{path}", self.base_url);
        let resp = self.client.delete(&url).send().await?;

        if !resp.status().is_success() {
            return Err(CoreError::Api {
                endpoint: path,
                message: format!("HTTP {}", resp.status()),
            });
        }
        Ok(())
    }
}
