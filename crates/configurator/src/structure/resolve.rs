//! (structural class, theme) -> venue configuration.
//!
//! Pure lookup plus small arithmetic; no randomness. The class table owns
//! every count and dimension, the theme table owns every color.

use bevy::prelude::*;

use crate::selections::Theme;

use super::types::{
    StructuralClass, StructuralConfig, UnknownStructuralClassError, VenuePalette,
};

/// Per-class structural parameters, cosmetics excluded.
struct ClassRecord {
    hall: (f32, f32, f32),
    altar_tiers: u8,
    altar: (f32, f32),
    seats: (u32, u32),
    has_altar: bool,
    has_wreaths: bool,
    has_religious_items: bool,
}

fn class_record(class: StructuralClass) -> ClassRecord {
    match class {
        StructuralClass::None => ClassRecord {
            hall: (6.0, 5.0, 3.0),
            altar_tiers: 0,
            altar: (0.0, 0.0),
            seats: (1, 4),
            has_altar: false,
            has_wreaths: false,
            has_religious_items: false,
        },
        StructuralClass::Small => ClassRecord {
            hall: (10.0, 8.0, 4.0),
            altar_tiers: 2,
            altar: (2.5, 2.0),
            seats: (2, 6),
            has_altar: true,
            has_wreaths: false,
            has_religious_items: true,
        },
        StructuralClass::Medium => ClassRecord {
            hall: (12.0, 10.0, 4.5),
            altar_tiers: 3,
            altar: (3.2, 2.4),
            seats: (3, 6),
            has_altar: true,
            has_wreaths: false,
            has_religious_items: true,
        },
        StructuralClass::Large => ClassRecord {
            hall: (14.0, 12.0, 5.0),
            altar_tiers: 4,
            altar: (4.0, 2.8),
            seats: (4, 8),
            has_altar: true,
            has_wreaths: true,
            has_religious_items: true,
        },
    }
}

fn theme_palette(theme: Theme) -> VenuePalette {
    match theme {
        Theme::Traditional => VenuePalette {
            wall: Color::srgb(0.973, 0.957, 0.941),
            back_wall: Color::srgb(0.165, 0.125, 0.208),
            floor: Color::srgb(0.290, 0.235, 0.196),
            carpet: Color::srgb(0.545, 0.0, 0.0),
            drape: Color::srgb(0.102, 0.082, 0.145),
            trim: Color::srgb(0.831, 0.686, 0.216),
            altar_wood: Color::srgb(0.863, 0.706, 0.494),
        },
        Theme::Modern => VenuePalette {
            wall: Color::srgb(0.961, 0.961, 0.961),
            back_wall: Color::srgb(0.165, 0.125, 0.208),
            floor: Color::srgb(0.227, 0.227, 0.227),
            carpet: Color::srgb(0.545, 0.0, 0.0),
            drape: Color::srgb(0.102, 0.082, 0.145),
            trim: Color::srgb(0.831, 0.686, 0.216),
            altar_wood: Color::srgb(1.0, 1.0, 1.0),
        },
        Theme::Nature => VenuePalette {
            wall: Color::srgb(0.957, 0.945, 0.910),
            back_wall: Color::srgb(0.184, 0.227, 0.165),
            floor: Color::srgb(0.353, 0.290, 0.220),
            carpet: Color::srgb(0.333, 0.420, 0.184),
            drape: Color::srgb(0.133, 0.200, 0.133),
            trim: Color::srgb(0.831, 0.686, 0.216),
            altar_wood: Color::srgb(0.961, 0.902, 0.827),
        },
    }
}

/// Resolve the venue configuration for a catalog structural-class key.
///
/// The key comes from catalog data rather than a closed enum so that a
/// mis-wired tier fails loudly here instead of silently shrinking the room.
pub fn resolve_structure(
    class: &str,
    theme: Theme,
) -> Result<StructuralConfig, UnknownStructuralClassError> {
    let class: StructuralClass = class.parse()?;
    let record = class_record(class);
    let (hall_width, hall_depth, hall_height) = record.hall;
    let (altar_width, altar_height) = record.altar;
    let (seat_rows, seats_per_row) = record.seats;

    Ok(StructuralConfig {
        hall_width,
        hall_depth,
        hall_height,
        altar_tiers: record.altar_tiers,
        altar_width,
        altar_height,
        seat_rows,
        seats_per_row,
        has_altar: record.has_altar,
        has_wreaths: record.has_wreaths,
        has_religious_items: record.has_religious_items,
        palette: theme_palette(theme),
    })
}
