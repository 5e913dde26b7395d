use bevy::prelude::*;
use serde::Serialize;

/// One row of the itemized quote. Amounts are in the smallest currency unit
/// and may be negative (discount options); the quote total never is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceLineItem {
    pub label: &'static str,
    pub amount: i64,
}

/// The full itemized quote handed to the checkout collaborator.
///
/// Invariants: `total` equals the sum of `line_items` for every valid
/// configuration, and `amount_due` is `total` less the fixed coverage
/// ceiling, floored at zero.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PriceQuote {
    pub line_items: Vec<PriceLineItem>,
    pub total: i64,
    /// Out-of-pocket amount after the coverage subtraction.
    pub amount_due: i64,
}
