use std::cmp::Ordering;

use crate::models::holding::Holding;
use crate::models::view::{GainFigures, GainView, SortDirection, SortField};

/// Orders the holdings list and picks the displayed gain pair.
///
/// Pure functions of their explicit arguments: the toggle rules (same
/// field flips direction, new field resets to ascending) live in
/// `ViewState`, not here.
pub struct SortService;

impl SortService {
    pub fn new() -> Self {
        Self
    }

    /// Stable sort by the requested field and direction.
    ///
    /// Symbols compare lexicographically ignoring case; numeric fields
    /// compare arithmetically, with equal ordering as the fallback for
    /// incomparable values. Holdings that compare equal keep their
    /// relative order, so toggling the direction twice restores the
    /// original arrangement.
    pub fn sort_holdings(
        &self,
        holdings: &mut [Holding],
        field: SortField,
        direction: SortDirection,
    ) {
        holdings.sort_by(|a, b| {
            let ord = match field {
                SortField::Symbol => a
                    .symbol
                    .to_lowercase()
                    .cmp(&b.symbol.to_lowercase()),
                SortField::Price => Self::cmp_f64(a.price, b.price),
                SortField::Quantity => Self::cmp_f64(a.quantity, b.quantity),
                SortField::Value => Self::cmp_f64(a.value, b.value),
                SortField::DayGain => Self::cmp_f64(a.day_gain, b.day_gain),
                SortField::TotalGain => Self::cmp_f64(a.total_gain, b.total_gain),
            };
            match direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    /// Pick the day or total gain pair for display. No recomputation.
    #[must_use]
    pub fn select_gain_view(&self, holding: &Holding, view: GainView) -> GainFigures {
        match view {
            GainView::Day => GainFigures {
                amount: holding.day_gain,
                percent: holding.day_gain_percent,
            },
            GainView::Total => GainFigures {
                amount: holding.total_gain,
                percent: holding.total_gain_percent,
            },
        }
    }

    fn cmp_f64(a: f64, b: f64) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl Default for SortService {
    fn default() -> Self {
        Self::new()
    }
}
