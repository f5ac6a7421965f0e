//! Color values used by the style table.

use std::fmt;

use serde::{Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Build from a packed 0xRRGGBB value.
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: (hex >> 16) as u8, g: (hex >> 8) as u8, b: hex as u8 }
    }

    /// Neutral gray used for features without a known category.
    pub const FALLBACK: Rgb = Rgb::from_hex(0xcccccc);
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_lowercase_hex() {
        assert_eq!(Rgb::from_hex(0xff7f00).to_string(), "#ff7f00");
        assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
        assert_eq!(Rgb::FALLBACK.to_string(), "#cccccc");
    }

    #[test]
    fn serializes_as_css_string() {
        assert_eq!(serde_json::to_string(&Rgb::from_hex(0x377eb8)).unwrap(), r##""#377eb8""##);
    }
}
