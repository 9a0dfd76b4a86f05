use serde::{Deserialize, Serialize};

/// One entry of the ticker-lookup response.
///
/// A suggestion picked by the user is the "resolved instrument" required
/// before a transaction can be added — the raw typed symbol alone is not
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSuggestion {
    /// Canonical symbol used by the backend (e.g., "BRK.B")
    pub symbol: String,

    /// Symbol as shown to the user
    #[serde(rename = "displaySymbol")]
    pub display_symbol: String,

    /// Company / instrument description (used as the holding display name)
    pub description: String,

    /// Listing exchange
    #[serde(default)]
    pub exchange: String,

    /// Instrument type (e.g., "Common Stock", "ETP"). Must be non-empty
    /// for a suggestion to count as resolved.
    #[serde(rename = "type")]
    pub kind: String,
}

impl SymbolSuggestion {
    /// Whether this suggestion carries enough information to back a
    /// transaction.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.kind.is_empty()
    }
}
