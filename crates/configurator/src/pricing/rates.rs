//! Static rate tables for every priced option.
//!
//! All amounts are integers in the smallest currency unit. Keeping the
//! tables here (rather than inlined in the resolver) lets tests pin the
//! values independently of the summation logic.

use crate::selections::{
    CateringGrade, CoffinFinish, DecorationVolume, HearseClass, MemorialTitle, OfficiantCount,
    ReturnGiftGrade, Theme,
};

/// Fixed coverage applied at checkout before the out-of-pocket amount.
pub const COVERAGE_CEILING: i64 = 2_000_000;

/// Flat cost of the ritual washing / cosmetic preparation add-on.
pub const MAKEUP_COST: i64 = 100_000;

/// Altar design surcharge per theme.
pub fn theme_delta(theme: Theme) -> i64 {
    match theme {
        Theme::Traditional => 0,
        Theme::Modern => 50_000,
        Theme::Nature => 80_000,
    }
}

/// Coffin finish surcharge.
pub fn coffin_delta(finish: CoffinFinish) -> i64 {
    match finish {
        CoffinFinish::Standard => 0,
        CoffinFinish::Cloth => 80_000,
        CoffinFinish::Luxury => 350_000,
    }
}

/// Decoration volume delta. Minimal is a genuine discount.
pub fn decoration_volume_delta(volume: DecorationVolume) -> i64 {
    match volume {
        DecorationVolume::Minimal => -30_000,
        DecorationVolume::Standard => 0,
        DecorationVolume::Lavish => 200_000,
    }
}

/// Officiant honorarium by headcount.
pub fn officiant_delta(count: OfficiantCount) -> i64 {
    match count {
        OfficiantCount::One => 150_000,
        OfficiantCount::Two => 250_000,
        OfficiantCount::Three => 400_000,
    }
}

/// Memorial title fee by rank.
pub fn memorial_title_delta(title: MemorialTitle) -> i64 {
    match title {
        MemorialTitle::None => 0,
        MemorialTitle::Standard => 300_000,
        MemorialTitle::Elevated => 500_000,
        MemorialTitle::Premier => 1_000_000,
    }
}

/// Hearse fee by vehicle class.
pub fn hearse_delta(class: HearseClass) -> i64 {
    match class {
        HearseClass::Van => 30_000,
        HearseClass::Western => 80_000,
        HearseClass::Ornate => 150_000,
    }
}

/// Catering rate per attendee.
pub fn catering_rate(grade: CateringGrade) -> i64 {
    match grade {
        CateringGrade::None => 0,
        CateringGrade::Simple => 3_000,
        CateringGrade::Standard => 6_000,
        CateringGrade::Premium => 12_000,
    }
}

/// Return-gift rate per attendee.
pub fn return_gift_rate(grade: ReturnGiftGrade) -> i64 {
    match grade {
        ReturnGiftGrade::None => 0,
        ReturnGiftGrade::Simple => 1_000,
        ReturnGiftGrade::Standard => 3_000,
        ReturnGiftGrade::Premium => 5_000,
    }
}
