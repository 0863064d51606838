use palette::Srgba;
use serde_with::DeserializeFromStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An opaque sRGB color, written `#RRGGBB` in configs and SVG output.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr)]
pub struct HexColor(Srgba<u8>);

impl HexColor {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgba::new(r, g, b, u8::MAX))
    }

    pub fn components(&self) -> (u8, u8, u8) {
        let (r, g, b, _) = self.0.into_components();
        (r, g, b)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("expected a '#RRGGBB' color, got '{0}'")]
    Malformed(String),
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseColorError::Malformed(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(malformed)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(malformed());
        }

        match (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::from_rgb(r, g, b)),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.components();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}
