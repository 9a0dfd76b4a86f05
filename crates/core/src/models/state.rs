use super::holding::Holding;
use super::summary::PortfolioSummary;
use super::view::ViewState;

/// The whole client-side application state: holdings, the latest portfolio
/// summary, and the ephemeral view state.
///
/// All mutation goes through the services; there is no interior
/// mutability and no locking — one logical thread of control owns this
/// between suspension points.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// All holdings, kept sorted by the last-applied view criteria
    pub holdings: Vec<Holding>,

    /// Latest summary, `None` until the first successful poll
    pub summary: Option<PortfolioSummary>,

    /// Presentation state (expansion, sort, gain view, dropdowns)
    pub view: ViewState,
}

impl DashboardState {
    /// Look up a holding by id.
    #[must_use]
    pub fn holding(&self, id: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.id == id)
    }

    /// Look up a holding by ticker symbol.
    #[must_use]
    pub fn holding_by_symbol(&self, symbol: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.symbol == symbol)
    }
}
