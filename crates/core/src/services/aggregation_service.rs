use crate::models::holding::Holding;

/// Recomputes derived gain metrics from purchase lots and current prices.
///
/// Pure computation — no I/O, no allocation beyond the input. Easy to test.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Populate the derived fields of every holding in place.
    ///
    /// Per holding: `quantity` becomes the sum of lot quantities, `value`
    /// becomes `price * quantity`, and total gain is measured against the
    /// summed cost basis. A holding with zero cost basis (a freshly created
    /// stub) reports exactly zero gain rather than NaN or infinity. Day
    /// gain fields are supplied by the backend and pass through untouched.
    ///
    /// Per lot: `value` and total gain are measured against the holding's
    /// current price and the lot's own cost basis.
    ///
    /// Idempotent: running it twice over the same input yields identical
    /// output, since every derived field is a function of lot data and
    /// price alone.
    pub fn compute_aggregates(&self, holdings: &mut [Holding]) {
        for holding in holdings {
            let mut total_quantity = 0.0;
            let mut total_cost_basis = 0.0;

            for lot in &mut holding.purchases {
                total_quantity += lot.quantity;
                total_cost_basis += lot.purchase_price * lot.quantity;

                lot.value = holding.price * lot.quantity;
                let lot_cost = lot.purchase_price * lot.quantity;
                lot.total_gain = (holding.price - lot.purchase_price) * lot.quantity;
                lot.total_gain_percent = if lot_cost > 0.0 {
                    lot.total_gain / lot_cost * 100.0
                } else {
                    0.0
                };
            }

            holding.quantity = total_quantity;
            holding.value = holding.price * total_quantity;

            if total_cost_basis > 0.0 {
                holding.total_gain = holding.value - total_cost_basis;
                holding.total_gain_percent = holding.total_gain / total_cost_basis * 100.0;
            } else {
                holding.total_gain = 0.0;
                holding.total_gain_percent = 0.0;
            }
        }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
