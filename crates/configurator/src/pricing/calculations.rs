use crate::catalog::{find_tier, UnknownTierError};
use crate::selections::Selections;

use super::rates::*;
use super::types::{PriceLineItem, PriceQuote};

/// Resolve a fully itemized quote from the current selections.
///
/// Every selected enum option contributes exactly one line item (zero-delta
/// options included, so the breakdown is complete); boolean add-ons appear
/// only when enabled; per-attendee items always appear and scale linearly
/// with the attendee count. Integer arithmetic throughout, no intermediate
/// rounding.
pub fn resolve_price(selections: &Selections) -> Result<PriceQuote, UnknownTierError> {
    let tier = find_tier(&selections.tier_id)?;
    let attendees = i64::from(selections.attendee_count);

    let mut line_items = vec![
        PriceLineItem {
            label: "Base plan",
            amount: tier.base_price,
        },
        PriceLineItem {
            label: "Altar design",
            amount: theme_delta(selections.theme),
        },
        PriceLineItem {
            label: "Coffin",
            amount: coffin_delta(selections.coffin_finish),
        },
        PriceLineItem {
            label: "Floral volume",
            amount: decoration_volume_delta(selections.decoration_volume),
        },
        PriceLineItem {
            label: "Officiant honorarium",
            amount: officiant_delta(selections.officiants),
        },
        PriceLineItem {
            label: "Memorial title",
            amount: memorial_title_delta(selections.memorial_title),
        },
        PriceLineItem {
            label: "Hearse",
            amount: hearse_delta(selections.hearse),
        },
    ];

    if selections.makeup {
        line_items.push(PriceLineItem {
            label: "Ritual preparation",
            amount: MAKEUP_COST,
        });
    }

    line_items.push(PriceLineItem {
        label: "Catering",
        amount: catering_rate(selections.catering) * attendees,
    });
    line_items.push(PriceLineItem {
        label: "Return gifts",
        amount: return_gift_rate(selections.return_gift) * attendees,
    });

    let sum: i64 = line_items.iter().map(|item| item.amount).sum();
    // Safety floor only: no catalog configuration can push the sum negative,
    // since every base price exceeds the one discount option.
    let total = sum.max(0);

    Ok(PriceQuote {
        line_items,
        total,
        amount_due: amount_due(total),
    })
}

/// Out-of-pocket amount after the fixed coverage subtraction.
pub fn amount_due(total: i64) -> i64 {
    (total - COVERAGE_CEILING).max(0)
}
