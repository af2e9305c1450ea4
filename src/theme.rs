//! Widget colors
//!
//! The color catalog is fixed, ordered data. Persisted color values are
//! matched against it by fill hex; anything unknown resolves to the first
//! entry.

use std::fmt;

/// RGBA Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA values
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque color from RGB values
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create color from hex string (#RRGGBB or #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Convert to hex string
    pub fn hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Create with modified alpha
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
/// Menu section headers
pub const HEADER_TEXT: Color = Color::rgb(0x66, 0x66, 0x66);
/// Secondary preview text under each option
pub const PREVIEW_TEXT: Color = Color::rgb(0x99, 0x99, 0x99);
pub const OPTION_HOVER: Color = Color::rgb(0xF5, 0xF5, 0xF5);

/// One entry of the color catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub fill: Color,
    pub text: Color,
    pub border: Color,
}

impl ColorOption {
    const fn new(name: &'static str, fill: Color, text: Color, border: Color) -> Self {
        Self { name, fill, text, border }
    }

    /// Fill hex as written into synced state
    pub fn value(&self) -> String {
        self.fill.hex()
    }
}

/// Fixed, ordered color catalog
pub const COLOR_CATALOG: [ColorOption; 10] = [
    ColorOption::new(
        "White",
        Color::rgb(0xFF, 0xFF, 0xFF),
        Color::rgb(0x1A, 0x1A, 0x1A),
        Color::rgb(0x5C, 0x5C, 0x5C),
    ),
    ColorOption::new(
        "Light Gray",
        Color::rgb(0xE5, 0xE5, 0xE5),
        Color::rgb(0x4A, 0x4A, 0x4A),
        Color::rgb(0x70, 0x70, 0x70),
    ),
    ColorOption::new(
        "Coral",
        Color::rgb(0xFF, 0xCF, 0xCA),
        Color::rgb(0xB3, 0x21, 0x00),
        Color::rgb(0xEE, 0x6C, 0x4D),
    ),
    ColorOption::new(
        "Peach",
        Color::rgb(0xFF, 0xE4, 0xCC),
        Color::rgb(0xA3, 0x4F, 0x00),
        Color::rgb(0xF8, 0xA6, 0x6F),
    ),
    ColorOption::new(
        "Yellow",
        Color::rgb(0xFF, 0xF4, 0xCC),
        Color::rgb(0x8C, 0x64, 0x00),
        Color::rgb(0xF9, 0xD4, 0x72),
    ),
    ColorOption::new(
        "Green",
        Color::rgb(0xD4, 0xF6, 0xD4),
        Color::rgb(0x11, 0x7A, 0x1F),
        Color::rgb(0x8F, 0xD6, 0x94),
    ),
    ColorOption::new(
        "Teal",
        Color::rgb(0xD0, 0xF4, 0xEE),
        Color::rgb(0x0C, 0x7A, 0x70),
        Color::rgb(0x7D, 0xD3, 0xC0),
    ),
    ColorOption::new(
        "Blue",
        Color::rgb(0xD9, 0xED, 0xFF),
        Color::rgb(0x00, 0x65, 0xB0),
        Color::rgb(0x6D, 0xB9, 0xF5),
    ),
    ColorOption::new(
        "Purple",
        Color::rgb(0xE8, 0xDE, 0xFF),
        Color::rgb(0x68, 0x31, 0xDF),
        Color::rgb(0xA7, 0x8B, 0xFA),
    ),
    ColorOption::new(
        "Pink",
        Color::rgb(0xFF, 0xE0, 0xF5),
        Color::rgb(0xAD, 0x0E, 0x7B),
        Color::rgb(0xF6, 0x87, 0xD4),
    ),
];

/// Default widget color value, the first catalog fill
pub const DEFAULT_COLOR: &str = "#FFFFFF";

pub fn default_color_value() -> String {
    DEFAULT_COLOR.to_string()
}

/// Find the catalog entry whose fill matches `value`, or the first entry
pub fn resolve_color(value: &str) -> &'static ColorOption {
    COLOR_CATALOG
        .iter()
        .find(|option| option.value() == value)
        .unwrap_or(&COLOR_CATALOG[0])
}
