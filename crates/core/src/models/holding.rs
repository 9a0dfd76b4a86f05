use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One discrete purchase transaction contributing quantity and cost basis
/// to a holding.
///
/// Lots are never mutated in place: they are created by add-transaction,
/// destroyed by delete-transaction, and only their derived fields (`value`,
/// `total_gain`, `total_gain_percent`) are recomputed when the holding
/// price or the lot membership changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLot {
    /// Unique identifier within the parent holding
    pub transaction_id: String,

    /// Date of the purchase (daily granularity)
    pub date: NaiveDate,

    /// Cost basis per unit at purchase time
    pub purchase_price: f64,

    /// Units bought in this lot (always positive)
    pub quantity: f64,

    /// Current market value of the lot — derived, `price * quantity`
    #[serde(default)]
    pub value: f64,

    /// Gain since purchase — derived, `(price - purchase_price) * quantity`
    #[serde(default)]
    pub total_gain: f64,

    /// Gain relative to the lot's own cost basis, in percent — derived
    #[serde(default)]
    pub total_gain_percent: f64,
}

impl PurchaseLot {
    /// Create a fresh lot with a generated transaction id and zeroed
    /// derived fields. The aggregation pass fills those in.
    pub fn new(date: NaiveDate, purchase_price: f64, quantity: f64) -> Self {
        Self {
            transaction_id: Uuid::new_v4().to_string(),
            date,
            purchase_price,
            quantity,
            value: 0.0,
            total_gain: 0.0,
            total_gain_percent: 0.0,
        }
    }

    /// Cost basis of the whole lot (`purchase_price * quantity`).
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.purchase_price * self.quantity
    }
}

/// One portfolio position aggregating all purchase lots of a single ticker.
///
/// `quantity` and `value` are derived: `quantity` always equals the sum of
/// the lot quantities and `value` always equals `price * quantity` after an
/// aggregation pass. Day-gain fields are supplied by the backend snapshot
/// and passed through untouched; total-gain fields are recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Unique identifier within the holdings collection
    pub id: String,

    /// Ticker symbol (e.g., "AAPL")
    pub symbol: String,

    /// Human-readable display name (e.g., "Apple Inc.")
    pub name: String,

    /// Current unit price from the most recent snapshot
    #[serde(default)]
    pub price: f64,

    /// Total units held — derived, sum of all lot quantities
    #[serde(default)]
    pub quantity: f64,

    /// Gain attributable to the most recent trading session, supplied externally
    #[serde(default)]
    pub day_gain: f64,

    /// Day gain relative to the previous close, in percent, supplied externally
    #[serde(default)]
    pub day_gain_percent: f64,

    /// Current market value — derived, `price * quantity`
    #[serde(default)]
    pub value: f64,

    /// Gain since acquisition — derived from cost basis vs current value
    #[serde(default)]
    pub total_gain: f64,

    /// Total gain relative to cost basis, in percent — derived
    #[serde(default)]
    pub total_gain_percent: f64,

    /// Ordered purchase history making up this position
    #[serde(default)]
    pub purchases: Vec<PurchaseLot>,
}

impl Holding {
    /// Create a stub holding for a symbol the dashboard has not seen yet:
    /// price 0, no lots, all gains 0. The first snapshot containing the
    /// symbol supplies the real price and day-gain figures.
    ///
    /// The generated id cannot collide with any existing holding id.
    pub fn stub(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            id: format!("inv-{}-{}", symbol.to_lowercase(), Uuid::new_v4().simple()),
            symbol,
            name: name.into(),
            price: 0.0,
            quantity: 0.0,
            day_gain: 0.0,
            day_gain_percent: 0.0,
            value: 0.0,
            total_gain: 0.0,
            total_gain_percent: 0.0,
            purchases: Vec::new(),
        }
    }

    /// Total cost basis across all lots.
    #[must_use]
    pub fn total_cost_basis(&self) -> f64 {
        self.purchases.iter().map(PurchaseLot::cost_basis).sum()
    }

    /// Sum of all lot quantities.
    #[must_use]
    pub fn total_purchased_quantity(&self) -> f64 {
        self.purchases.iter().map(|p| p.quantity).sum()
    }
}
