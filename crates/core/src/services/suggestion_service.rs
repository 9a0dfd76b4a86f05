use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::errors::CoreError;
use crate::models::suggestion::SymbolSuggestion;
use crate::providers::traits::PortfolioApi;

/// Outcome of one debounced lookup, delivered to the presentation layer.
/// An `Err` is the view's cue to show its inline lookup-failure notice.
pub type SuggestionResult = Result<Vec<SymbolSuggestion>, CoreError>;

/// Debounced ticker lookup with a single pending-timer slot.
///
/// Each keystroke cancels whatever was scheduled (or in flight) and
/// restarts the quiet window, so at most one request reflects the latest
/// keystroke burst. Results arrive on the channel handed out by
/// [`SuggestionService::channel`].
pub struct SuggestionService {
    api: Arc<dyn PortfolioApi>,
    debounce: Duration,
    tx: mpsc::Sender<SuggestionResult>,
    pending: Option<JoinHandle<()>>,
}

impl SuggestionService {
    /// Build the service plus the receiving end for the view layer.
    pub fn channel(
        api: Arc<dyn PortfolioApi>,
        debounce: Duration,
    ) -> (Self, mpsc::Receiver<SuggestionResult>) {
        let (tx, rx) = mpsc::channel(8);
        (
            Self {
                api,
                debounce,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// React to the symbol input changing.
    ///
    /// Empty input clears the suggestion list immediately without a
    /// request; anything else schedules a lookup after the quiet window.
    pub fn on_input(&mut self, input: &str) {
        self.cancel_pending();

        if input.is_empty() {
            let _ = self.tx.try_send(Ok(Vec::new()));
            return;
        }

        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let debounce = self.debounce;
        let query = input.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            let result = api.symbol_suggestions(&query).await;
            let _ = tx.send(result).await;
        }));
    }

    /// Drop any scheduled or in-flight lookup (e.g., when the form closes).
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SuggestionService {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
