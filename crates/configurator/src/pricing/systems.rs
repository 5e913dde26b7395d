use bevy::prelude::*;

use crate::selections::Selections;

use super::calculations::resolve_price;
use super::types::PriceQuote;

/// System: re-resolve the quote whenever the selections change.
///
/// An unknown tier id is a wiring bug in the host UI; the previous quote is
/// left untouched so checkout never displays a price built from a
/// partially-resolved tier.
pub fn refresh_price_quote(selections: Res<Selections>, mut quote: ResMut<PriceQuote>) {
    if !selections.is_changed() {
        return;
    }
    match resolve_price(&selections) {
        Ok(resolved) => *quote = resolved,
        Err(err) => warn!("price resolution skipped: {err}"),
    }
}

pub struct PricingPlugin;

impl Plugin for PricingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PriceQuote>()
            .add_systems(Update, refresh_price_quote);
    }
}
