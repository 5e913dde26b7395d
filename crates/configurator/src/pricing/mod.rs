pub mod calculations;
pub mod rates;
pub mod systems;
pub mod types;

pub use calculations::resolve_price;
pub use systems::PricingPlugin;
pub use types::{PriceLineItem, PriceQuote};
