use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// One category row of the portfolio highlights panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryHighlight {
    /// Category name (e.g., "Common Stock", "ETP", "cash")
    pub name: String,

    /// Market value held in this category
    pub value: f64,

    /// Share of the whole portfolio, in percent
    pub percent: f64,
}

/// Portfolio-level summary shown in the balance panel.
///
/// Wholesale-replaced on every successful poll; never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Current account balance
    pub balance: f64,

    /// As-of timestamp, passed through verbatim from the backend
    pub timestamp: String,

    /// Change attributable to the most recent trading session
    #[serde(default)]
    pub day_change: f64,

    /// Day change in percent
    #[serde(default)]
    pub day_percent: f64,

    /// Gain since acquisition across the whole portfolio
    #[serde(default)]
    pub total_gain: f64,

    /// Total gain in percent
    #[serde(default)]
    pub total_gain_percent: f64,

    /// Per-category value breakdown
    #[serde(default)]
    pub portfolio_highlights: Vec<CategoryHighlight>,
}

/// The response shape shared by the cold-cache and live portfolio
/// endpoints: a positions list plus the summary fields at top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// All holdings known to the backend
    #[serde(default)]
    pub positions: Vec<Holding>,

    /// Summary fields, flattened alongside `positions` on the wire
    #[serde(flatten)]
    pub summary: PortfolioSummary,
}
