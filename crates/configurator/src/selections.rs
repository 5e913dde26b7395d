//! Session-scoped user selections.
//!
//! Owned and mutated by the host UI layer; every core system treats this
//! resource as read-only input and recomputes its derived resource when it
//! changes. Discarded with the session; there is no persistence.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Altar/venue styling theme. Drives the flower-mass shape mode and the
/// cosmetic venue palette, never a structural count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Traditional,
    Modern,
    Nature,
}

/// Primary flower color family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccentColor {
    White,
    Pink,
    Purple,
    Yellow,
}

/// Coffin finish grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoffinFinish {
    Standard,
    Cloth,
    Luxury,
}

/// Density setting for decorative elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecorationVolume {
    Minimal,
    Standard,
    Lavish,
}

/// Per-attendee catering grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CateringGrade {
    None,
    Simple,
    Standard,
    Premium,
}

/// Per-attendee return-gift grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnGiftGrade {
    None,
    Simple,
    Standard,
    Premium,
}

/// Number of officiants performing the ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficiantCount {
    One,
    Two,
    Three,
}

/// Posthumous memorial title rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemorialTitle {
    None,
    Standard,
    Elevated,
    Premier,
}

/// Hearse vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HearseClass {
    Van,
    Western,
    Ornate,
}

/// Everything the user has chosen this session.
///
/// Defaults match a mid-range configuration so the first quote and layout
/// are meaningful before the user touches anything.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    pub tier_id: String,
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub coffin_finish: CoffinFinish,
    pub decoration_volume: DecorationVolume,
    pub catering: CateringGrade,
    pub return_gift: ReturnGiftGrade,
    pub officiants: OfficiantCount,
    pub memorial_title: MemorialTitle,
    pub hearse: HearseClass,
    /// Ritual washing and cosmetic preparation add-on.
    pub makeup: bool,
    pub attendee_count: u32,
}

impl Default for Selections {
    fn default() -> Self {
        Self {
            tier_id: "family60".to_string(),
            theme: Theme::Modern,
            accent_color: AccentColor::Pink,
            coffin_finish: CoffinFinish::Cloth,
            decoration_volume: DecorationVolume::Standard,
            catering: CateringGrade::Standard,
            return_gift: ReturnGiftGrade::Standard,
            officiants: OfficiantCount::One,
            memorial_title: MemorialTitle::Standard,
            hearse: HearseClass::Van,
            makeup: false,
            attendee_count: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_tier;

    #[test]
    fn test_default_tier_exists_in_catalog() {
        let selections = Selections::default();
        assert!(find_tier(&selections.tier_id).is_ok());
    }

    #[test]
    fn test_default_attendees_within_tier_capacity() {
        let selections = Selections::default();
        let tier = find_tier(&selections.tier_id).unwrap();
        assert!(selections.attendee_count <= tier.max_attendees);
    }
}
