use serde::{Deserialize, Serialize};

use super::holding::Holding;
use super::suggestion::SymbolSuggestion;

/// Field a holdings list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Alphabetical by ticker symbol
    Symbol,
    /// Current unit price
    Price,
    /// Units held
    Quantity,
    /// Current market value
    Value,
    /// Day gain amount
    DayGain,
    /// Total gain amount
    TotalGain,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Symbol => write!(f, "Symbol"),
            SortField::Price => write!(f, "Price"),
            SortField::Quantity => write!(f, "Quantity"),
            SortField::Value => write!(f, "Value"),
            SortField::DayGain => write!(f, "Day Gain"),
            SortField::TotalGain => write!(f, "Total Gain"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Which gain pair the holdings list surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GainView {
    /// Change over the most recent trading session
    Day,
    /// Change since acquisition
    Total,
}

impl std::fmt::Display for GainView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GainView::Day => write!(f, "Day Gain"),
            GainView::Total => write!(f, "Total Gain"),
        }
    }
}

/// The gain pair picked for display by the current [`GainView`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainFigures {
    pub amount: f64,
    pub percent: f64,
}

/// Direction a change indicator should point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
    Flat,
}

impl ChangeDirection {
    /// Classify a gain/loss value by its sign.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            ChangeDirection::Up
        } else if value < 0.0 {
            ChangeDirection::Down
        } else {
            ChangeDirection::Flat
        }
    }
}

/// Format a monetary value as US dollars with thousands separators,
/// e.g. `-1234.5` → `"-$1,234.50"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Format a percentage with two decimals, e.g. `12.345` → `"12.35 %"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.2} %")
}

/// Ephemeral presentation state: what is expanded, how the list is sorted,
/// which gain pair is shown, which dropdowns are open.
///
/// Owned by the presentation layer; the core's pure functions only read
/// `sort_field`, `sort_direction` and `gain_view` as inputs. Never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// At most one holding is expanded at a time
    pub expanded_holding_id: Option<String>,

    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub gain_view: GainView,

    pub sort_dropdown_open: bool,
    pub gain_view_dropdown_open: bool,

    /// The suggestion the user picked in the add-transaction form, if any
    pub pending_suggestion: Option<SymbolSuggestion>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            expanded_holding_id: None,
            sort_field: SortField::Symbol,
            sort_direction: SortDirection::Asc,
            gain_view: GainView::Day,
            sort_dropdown_open: false,
            gain_view_dropdown_open: false,
            pending_suggestion: None,
        }
    }
}

impl ViewState {
    /// Expand a holding card, or collapse it if it is already expanded.
    pub fn toggle_expand(&mut self, holding: &str) {
        if self.expanded_holding_id.as_deref() == Some(holding) {
            self.expanded_holding_id = None;
        } else {
            self.expanded_holding_id = Some(holding.to_string());
        }
    }

    /// Apply a sort selection: picking the current field flips the
    /// direction, picking a new field resets to ascending.
    pub fn select_sort_field(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.sort_dropdown_open = false;
    }

    /// Switch the displayed gain pair and close the dropdown.
    pub fn set_gain_view(&mut self, view: GainView) {
        self.gain_view = view;
        self.gain_view_dropdown_open = false;
    }

    pub fn toggle_sort_dropdown(&mut self) {
        self.sort_dropdown_open = !self.sort_dropdown_open;
    }

    pub fn toggle_gain_view_dropdown(&mut self) {
        self.gain_view_dropdown_open = !self.gain_view_dropdown_open;
    }

    /// Record the suggestion the user picked in the add-transaction form.
    pub fn select_suggestion(&mut self, suggestion: SymbolSuggestion) {
        self.pending_suggestion = Some(suggestion);
    }

    /// Reset the add-transaction form state.
    pub fn clear_pending_suggestion(&mut self) {
        self.pending_suggestion = None;
    }

    /// Drop the expansion if it points at a holding that no longer exists.
    pub(crate) fn clear_expansion_if(&mut self, holding: &str) {
        if self.expanded_holding_id.as_deref() == Some(holding) {
            self.expanded_holding_id = None;
        }
    }

    /// Convenience for the renderer: true when this holding's card is open.
    #[must_use]
    pub fn is_expanded(&self, holding: &Holding) -> bool {
        self.expanded_holding_id.as_deref() == Some(holding.id.as_str())
    }
}
