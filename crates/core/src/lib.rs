pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::warn;

use errors::CoreError;
use models::{
    holding::Holding,
    settings::Settings,
    state::DashboardState,
    summary::PortfolioSummary,
    view::{GainFigures, GainView, SortField, ViewState},
};
use providers::{backend::BackendClient, traits::PortfolioApi};
use services::{
    aggregation_service::AggregationService,
    poll_service::PollService,
    sort_service::SortService,
    suggestion_service::{SuggestionResult, SuggestionService},
    sync_service::SyncService,
    transaction_service::{TransactionRequest, TransactionService},
};

/// Main entry point for the portfolio dashboard core.
/// Owns the client-side state and all services needed to operate on it;
/// the presentation layer renders from the accessors and calls back into
/// the mutating operations.
#[must_use]
pub struct PortfolioDashboard {
    state: DashboardState,
    settings: Settings,
    api: Arc<dyn PortfolioApi>,
    aggregation: AggregationService,
    sorter: SortService,
    transactions: TransactionService,
    poller: PollService,
    sync: SyncService,
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("holdings", &self.state.holdings.len())
            .field("summary", &self.state.summary.is_some())
            .field("view", &self.state.view)
            .field("settings", &self.settings)
            .finish()
    }
}

impl PortfolioDashboard {
    /// Create a dashboard talking to the real backend from the settings.
    pub fn new(settings: Settings) -> Self {
        let api: Arc<dyn PortfolioApi> = Arc::new(BackendClient::new(&settings.api_base_url));
        Self::build(settings, api)
    }

    /// Create a dashboard over an injected API implementation.
    /// Used by tests and by embedders with their own transport.
    pub fn with_api(settings: Settings, api: Arc<dyn PortfolioApi>) -> Self {
        Self::build(settings, api)
    }

    // ── Read Access ─────────────────────────────────────────────────

    /// Current holdings, in the last-applied sort order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.state.holdings
    }

    /// Latest portfolio summary, `None` before the first successful poll.
    #[must_use]
    pub fn summary(&self) -> Option<&PortfolioSummary> {
        self.state.summary.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.state.view
    }

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The gain pair a holding row should display under the current view.
    #[must_use]
    pub fn displayed_gain(&self, holding: &Holding) -> GainFigures {
        self.sorter.select_gain_view(holding, self.state.view.gain_view)
    }

    // ── View Operations ─────────────────────────────────────────────

    /// Expand a holding card, or collapse it if already expanded.
    pub fn toggle_expand(&mut self, holding_id: &str) {
        self.state.view.toggle_expand(holding_id);
    }

    /// Switch between day and total gain display.
    pub fn set_gain_view(&mut self, view: GainView) {
        self.state.view.set_gain_view(view);
    }

    /// Apply a sort selection (same field toggles direction, new field
    /// resets to ascending) and re-order the holdings accordingly.
    pub fn select_sort_field(&mut self, field: SortField) {
        self.state.view.select_sort_field(field);
        self.sorter.sort_holdings(
            &mut self.state.holdings,
            self.state.view.sort_field,
            self.state.view.sort_direction,
        );
    }

    pub fn toggle_sort_dropdown(&mut self) {
        self.state.view.toggle_sort_dropdown();
    }

    pub fn toggle_gain_view_dropdown(&mut self) {
        self.state.view.toggle_gain_view_dropdown();
    }

    /// Record the suggestion picked in the add-transaction form.
    pub fn select_suggestion(&mut self, suggestion: models::suggestion::SymbolSuggestion) {
        self.state.view.select_suggestion(suggestion);
    }

    /// Reset the add-transaction form state (modal closed/cancelled).
    pub fn clear_pending_suggestion(&mut self) {
        self.state.view.clear_pending_suggestion();
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Add a purchase for the currently selected suggestion.
    ///
    /// Local-first: state commits and is ready to render before the
    /// backend is notified in the background; a notification failure is
    /// logged and never rolled back. The pending suggestion is cleared on
    /// success, mirroring the form reset.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        unit_cost: f64,
        quantity: f64,
    ) -> Result<(), CoreError> {
        let request = TransactionRequest {
            date,
            unit_cost,
            quantity,
            resolved: self.state.view.pending_suggestion.clone(),
        };
        let event = self.transactions.add_transaction(
            &mut self.state,
            request,
            &self.aggregation,
            &self.sorter,
        )?;
        self.state.view.clear_pending_suggestion();
        self.sync.notify_detached(event);
        Ok(())
    }

    /// Delete one purchase lot. Unknown ids are a silent no-op.
    pub fn delete_transaction(&mut self, holding_id: &str, transaction_id: &str) {
        if let Some(event) = self.transactions.delete_transaction(
            &mut self.state,
            holding_id,
            transaction_id,
            &self.aggregation,
        ) {
            self.sync.notify_detached(event);
        }
    }

    // ── Polling ─────────────────────────────────────────────────────

    /// Run one refresh attempt. Returns `Ok(true)` when state changed and
    /// the view should re-render.
    pub async fn poll_once(&mut self) -> Result<bool, CoreError> {
        self.poller
            .poll_once(
                self.api.as_ref(),
                &mut self.state,
                &self.aggregation,
                &self.sorter,
            )
            .await
    }

    /// Drive the refresh loop forever.
    ///
    /// `on_render` fires after every attempt that changed state. The next
    /// attempt starts a fixed delay after the current one completes — a
    /// self-adjusting interval, so a slow response stretches the effective
    /// period and requests never overlap. Failures are logged and the loop
    /// reschedules unconditionally.
    pub async fn run_poll_loop<F>(&mut self, mut on_render: F)
    where
        F: FnMut(&DashboardState),
    {
        loop {
            match self.poll_once().await {
                Ok(true) => on_render(&self.state),
                Ok(false) => {}
                Err(e) => warn!("portfolio refresh failed, keeping last state: {e}"),
            }
            tokio::time::sleep(self.settings.poll_interval()).await;
        }
    }

    // ── Symbol Lookup ───────────────────────────────────────────────

    /// Build a debounced symbol-lookup service sharing this dashboard's
    /// API handle, plus the channel the view layer reads results from.
    pub fn suggestion_lookup(&self) -> (SuggestionService, mpsc::Receiver<SuggestionResult>) {
        SuggestionService::channel(Arc::clone(&self.api), self.settings.suggestion_debounce())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings, api: Arc<dyn PortfolioApi>) -> Self {
        let sync = SyncService::new(Arc::clone(&api));
        Self {
            state: DashboardState::default(),
            settings,
            api,
            aggregation: AggregationService::new(),
            sorter: SortService::new(),
            transactions: TransactionService::new(),
            poller: PollService::new(),
            sync,
        }
    }
}
