use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::event::OutboundEvent;
use crate::providers::traits::PortfolioApi;

/// Delivers outbound mutation events to the backend.
///
/// The consistency policy is fire-and-forget: local state has already
/// committed by the time an event reaches this service, and a delivery
/// failure is logged, never retried and never rolled back. A client and
/// backend can therefore diverge until the next poll re-syncs them.
pub struct SyncService {
    api: Arc<dyn PortfolioApi>,
}

impl SyncService {
    pub fn new(api: Arc<dyn PortfolioApi>) -> Self {
        Self { api }
    }

    /// Deliver one event, surfacing the failure to the caller.
    pub async fn notify(&self, event: &OutboundEvent) -> Result<(), CoreError> {
        let result = match event {
            OutboundEvent::TransactionAdded(record) => self.api.add_transaction(record).await,
            OutboundEvent::TransactionDeleted { transaction_id } => {
                self.api.delete_transaction(transaction_id).await
            }
        };

        result.map_err(|e| match e {
            CoreError::Api { endpoint, message } => CoreError::BackendSync { endpoint, message },
            CoreError::Network(message) => CoreError::BackendSync {
                endpoint: Self::endpoint_of(event),
                message,
            },
            other => other,
        })
    }

    /// Deliver one event in the background, logging the outcome.
    pub fn notify_detached(&self, event: OutboundEvent) {
        let service = Self {
            api: Arc::clone(&self.api),
        };
        tokio::spawn(async move {
            match service.notify(&event).await {
                Ok(()) => debug!("backend notified of {event:?}"),
                Err(e) => warn!("backend sync failed, local state kept: {e}"),
            }
        });
    }

    fn endpoint_of(event: &OutboundEvent) -> String {
        match event {
            OutboundEvent::TransactionAdded(_) => "/api/add_transaction".to_string(),
            OutboundEvent::TransactionDeleted { transaction_id } => {
                format!("/api/transactions/{transaction_id}")
            }
        }
    }
}
