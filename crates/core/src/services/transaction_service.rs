use chrono::NaiveDate;

use super::aggregation_service::AggregationService;
use super::sort_service::SortService;
use crate::errors::CoreError;
use crate::models::event::{OutboundEvent, TransactionRecord};
use crate::models::holding::{Holding, PurchaseLot};
use crate::models::state::DashboardState;
use crate::models::suggestion::SymbolSuggestion;

/// What the add-transaction form submits.
///
/// `resolved` is the suggestion the user picked from the lookup dropdown.
/// The raw typed symbol is deliberately absent: a transaction without a
/// resolved instrument is rejected.
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    pub date: NaiveDate,
    pub unit_cost: f64,
    pub quantity: f64,
    pub resolved: Option<SymbolSuggestion>,
}

/// Applies add/delete transaction operations to local state.
///
/// Both operations are local-first: state commits immediately and the
/// returned [`OutboundEvent`] is the caller's cue to notify the backend in
/// the background. A failed notification is logged, never rolled back.
pub struct TransactionService;

impl TransactionService {
    pub fn new() -> Self {
        Self
    }

    /// Add a purchase lot, creating the holding if the symbol is new.
    ///
    /// Validates before touching state: quantity and unit cost must be
    /// positive finite numbers and a resolved instrument must be present.
    /// On success the whole collection is re-aggregated (recomputation is
    /// global by contract, not holding-local) and re-sorted by the
    /// last-applied view criteria.
    pub fn add_transaction(
        &self,
        state: &mut DashboardState,
        request: TransactionRequest,
        aggregation: &AggregationService,
        sorter: &SortService,
    ) -> Result<OutboundEvent, CoreError> {
        if !(request.quantity > 0.0 && request.quantity.is_finite()) {
            return Err(CoreError::ValidationError(
                "Quantity must be a positive number".into(),
            ));
        }
        if !(request.unit_cost > 0.0 && request.unit_cost.is_finite()) {
            return Err(CoreError::ValidationError(
                "Cost basis must be a positive number".into(),
            ));
        }
        let resolved = match request.resolved {
            Some(s) if s.is_resolved() => s,
            _ => {
                return Err(CoreError::ValidationError(
                    "No instrument selected — pick a company from the suggestion list".into(),
                ))
            }
        };

        let lot = PurchaseLot::new(request.date, request.unit_cost, request.quantity);
        let record = TransactionRecord {
            date: request.date,
            cost_basis: request.unit_cost,
            quantity: request.quantity,
            company_name: resolved.description.clone(),
            symbol: resolved.symbol.clone(),
            kind: resolved.kind.clone(),
        };

        let idx = match state
            .holdings
            .iter()
            .position(|h| h.symbol == resolved.symbol)
        {
            Some(i) => i,
            None => {
                state
                    .holdings
                    .push(Holding::stub(resolved.symbol.clone(), resolved.description));
                state.holdings.len() - 1
            }
        };
        let holding = &mut state.holdings[idx];
        holding.purchases.push(lot);
        holding.quantity = holding.total_purchased_quantity();

        aggregation.compute_aggregates(&mut state.holdings);
        sorter.sort_holdings(
            &mut state.holdings,
            state.view.sort_field,
            state.view.sort_direction,
        );

        Ok(OutboundEvent::TransactionAdded(record))
    }

    /// Remove the lot with the matching id from the holding with the
    /// matching id.
    ///
    /// An unknown holding or transaction id is a silent no-op returning
    /// `None` — a stale click after a concurrent removal must not crash.
    /// Removing the last lot removes the holding itself and collapses its
    /// card if it was expanded.
    pub fn delete_transaction(
        &self,
        state: &mut DashboardState,
        holding_id: &str,
        transaction_id: &str,
        aggregation: &AggregationService,
    ) -> Option<OutboundEvent> {
        let idx = state.holdings.iter().position(|h| h.id == holding_id)?;

        let holding = &mut state.holdings[idx];
        let before = holding.purchases.len();
        holding
            .purchases
            .retain(|p| p.transaction_id != transaction_id);
        if holding.purchases.len() == before {
            return None;
        }

        if holding.purchases.is_empty() {
            state.holdings.remove(idx);
            state.view.clear_expansion_if(holding_id);
        } else {
            holding.quantity = holding.total_purchased_quantity();
            aggregation.compute_aggregates(&mut state.holdings);
        }

        Some(OutboundEvent::TransactionDeleted {
            transaction_id: transaction_id.to_string(),
        })
    }
}

impl Default for TransactionService {
    fn default() -> Self {
        Self::new()
    }
}
