//! Cost derivation for parking stays.
//!
//! Stored totals are tax-inclusive. The subtotal/tax split is display-only
//! and recomputed from the total on every read.

/// Sales tax rate baked into every stored total (18%).
pub const TAX_RATE: f64 = 0.18;

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total owed for a stay: whole hours parked times the tariff's unit cost.
pub fn total_cost(hours_parked: i64, unit_cost: f64) -> f64 {
    hours_parked as f64 * unit_cost
}

/// Split a tax-inclusive total into `(subtotal, tax)`.
///
/// The subtotal is rounded first; the tax is the rounded remainder against
/// the original total. Rounding the remainder rather than `total * rate`
/// keeps the two parts re-adding to the stored total at display precision.
pub fn decompose(total: f64) -> (f64, f64) {
    let subtotal = round2(total / (1.0 + TAX_RATE));
    let tax = round2(total - subtotal);
    (subtotal, tax)
}
