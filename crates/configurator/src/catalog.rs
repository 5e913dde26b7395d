//! Static catalog of purchasable service tiers.
//!
//! Tiers are fixed data, loaded once and never mutated. Everything else in
//! the crate looks tiers up by id; an id that is not in the catalog is a
//! wiring bug in the caller, surfaced as [`UnknownTierError`].

use thiserror::Error;

/// One purchasable service tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierDefinition {
    /// Stable string id, used as the lookup key from `Selections`.
    pub id: &'static str,
    /// Display name for the checkout collaborator.
    pub name: &'static str,
    /// Base price in the smallest currency unit.
    pub base_price: i64,
    /// Coarse venue-size category, consumed by the structural resolver.
    /// Kept as a string key so the resolver owns the parse (and the error).
    pub structural_class: &'static str,
    /// Maximum attendee count this tier's venue accommodates.
    pub max_attendees: u32,
}

/// All selectable tiers, smallest to largest.
pub const TIER_CATALOG: &[TierDefinition] = &[
    TierDefinition {
        id: "direct",
        name: "Direct Service",
        base_price: 198_000,
        structural_class: "none",
        max_attendees: 10,
    },
    TierDefinition {
        id: "family45",
        name: "Family Service 45",
        base_price: 450_000,
        structural_class: "small",
        max_attendees: 20,
    },
    TierDefinition {
        id: "family60",
        name: "Family Service 60",
        base_price: 600_000,
        structural_class: "medium",
        max_attendees: 30,
    },
    TierDefinition {
        id: "general100",
        name: "General Service 100",
        base_price: 1_000_000,
        structural_class: "large",
        max_attendees: 80,
    },
    TierDefinition {
        id: "general140",
        name: "General Service 140",
        base_price: 1_400_000,
        structural_class: "large",
        max_attendees: 150,
    },
];

/// A tier id with no catalog entry. Fatal: callers must never build a quote
/// or a layout from a partially-resolved tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service tier id {0:?}")]
pub struct UnknownTierError(pub String);

/// Look a tier up by id.
pub fn find_tier(id: &str) -> Result<&'static TierDefinition, UnknownTierError> {
    TIER_CATALOG
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| UnknownTierError(id.to_string()))
}
