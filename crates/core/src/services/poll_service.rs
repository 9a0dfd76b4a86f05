use tracing::debug;

use super::aggregation_service::AggregationService;
use super::sort_service::SortService;
use crate::errors::CoreError;
use crate::models::state::DashboardState;
use crate::providers::traits::PortfolioApi;

/// One attempt of the periodic portfolio refresh.
///
/// The scheduling itself (fixed delay after each attempt completes) lives
/// in the facade's poll loop; this service only knows how to run a single
/// attempt against the backend and fold the result into local state.
pub struct PollService;

impl PollService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch a snapshot and reconcile it into `state`.
    ///
    /// While no local holdings exist the cold-cache endpoint is used;
    /// afterwards the live endpoint. A snapshot with a non-empty positions
    /// list replaces the holdings and the summary wholesale
    /// (last-snapshot-wins), recomputes aggregates and re-sorts by the
    /// current view criteria. An empty positions list leaves state
    /// untouched, as does any fetch error.
    ///
    /// Returns `Ok(true)` when state changed and the view should
    /// re-render (holdings list, summary panel, category highlights).
    pub async fn poll_once(
        &self,
        api: &dyn PortfolioApi,
        state: &mut DashboardState,
        aggregation: &AggregationService,
        sorter: &SortService,
    ) -> Result<bool, CoreError> {
        let snapshot = if state.holdings.is_empty() {
            api.fetch_cold_snapshot().await?
        } else {
            api.fetch_snapshot().await?
        };

        if snapshot.positions.is_empty() {
            debug!("poll returned no positions, keeping previous state");
            return Ok(false);
        }

        state.holdings = snapshot.positions;
        state.summary = Some(snapshot.summary);

        aggregation.compute_aggregates(&mut state.holdings);
        sorter.sort_holdings(
            &mut state.holdings,
            state.view.sort_field,
            state.view.sort_direction,
        );

        debug!(holdings = state.holdings.len(), "portfolio refreshed");
        Ok(true)
    }
}

impl Default for PollService {
    fn default() -> Self {
        Self::new()
    }
}
