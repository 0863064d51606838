use crate::color::HexColor;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// The closed mood vocabulary the poster palettes are keyed by. The wizard
/// only offers the first four; `avantgarde` and `minimal` stay reachable
/// through hand-written handoff strings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, EnumIter, StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Mood {
    #[default]
    Classical,
    Romantic,
    Impressionist,
    Neoclassical,
    Avantgarde,
    Minimal,
}

impl Mood {
    /// Unknown or empty mood values fall back to the default.
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

/// Background, midtone, accent and ink, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodPalette {
    pub background: HexColor,
    pub midtone: HexColor,
    pub accent: HexColor,
    pub ink: HexColor,
}

pub fn mood_palette(mood: Mood) -> MoodPalette {
    let rgb = HexColor::from_rgb;
    match mood {
        Mood::Classical => MoodPalette {
            background: rgb(0xFB, 0xFB, 0xFB),
            midtone: rgb(0xDA, 0xDA, 0xDA),
            accent: rgb(0x8F, 0x8F, 0x8F),
            ink: rgb(0x1E, 0x1E, 0x1E),
        },
        Mood::Romantic => MoodPalette {
            background: rgb(0x2B, 0x1D, 0x2A),
            midtone: rgb(0x6E, 0x2F, 0x4F),
            accent: rgb(0xC1, 0x49, 0x72),
            ink: rgb(0xF2, 0xC6, 0xC2),
        },
        Mood::Impressionist => MoodPalette {
            background: rgb(0xE4, 0xF1, 0xF9),
            midtone: rgb(0xB7, 0xD3, 0xE9),
            accent: rgb(0x8B, 0xBA, 0xD8),
            ink: rgb(0x4A, 0x6F, 0xA5),
        },
        Mood::Neoclassical => MoodPalette {
            background: rgb(0xFF, 0xFF, 0xFF),
            midtone: rgb(0xD9, 0xD9, 0xD9),
            accent: rgb(0x9E, 0x9E, 0x9E),
            ink: rgb(0x22, 0x22, 0x22),
        },
        Mood::Avantgarde => MoodPalette {
            background: rgb(0x0D, 0x0D, 0x0D),
            midtone: rgb(0xFF, 0xFF, 0xFF),
            accent: rgb(0xFF, 0x4D, 0x4D),
            ink: rgb(0x1A, 0xE5, 0xBE),
        },
        Mood::Minimal => MoodPalette {
            background: rgb(0xFF, 0xFF, 0xFF),
            midtone: rgb(0xEF, 0xEF, 0xEF),
            accent: rgb(0xD9, 0xD9, 0xD9),
            ink: rgb(0x11, 0x11, 0x11),
        },
    }
}
