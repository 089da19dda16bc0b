//! Color resolution
//!
//! Maps X11 color names and `#` hex notation to packed RGBA values. The two
//! failure paths intentionally produce different colors: an unknown name
//! resolves to opaque red, a malformed hex string to opaque black.

mod names;

use names::NAMED_COLORS;

/// An 8-bit per channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    /// Black with zero alpha; what `None` resolves to
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    /// Pack as `0xRRGGBBAA`
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    pub const fn from_packed(value: u32) -> Self {
        Self::new(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Source-over composition of `self` onto `dst`
    pub fn blend_over(self, dst: Rgba) -> Rgba {
        match self.a {
            0xff => self,
            0 => dst,
            a => {
                let a = a as u32;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
                Rgba::new(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    dst.a.max(self.a),
                )
            }
        }
    }
}

/// Resolve a color value as found in XPM files and theme settings:
/// `#...` goes through [`from_hex`], anything else through [`from_name`].
pub fn parse(value: &str) -> Rgba {
    let value = value.trim();
    if value.starts_with('#') {
        from_hex(value)
    } else {
        from_name(value)
    }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or the 12 digit `#rrrrggggbbbb`
/// form (only the high byte of each channel is kept).
///
/// Any other input yields opaque black.
pub fn from_hex(text: &str) -> Rgba {
    match parse_hex(text) {
        Some(color) => color,
        None => {
            log::debug!("Malformed hex color '{}', using black", text);
            Rgba::BLACK
        }
    }
}

fn parse_hex(text: &str) -> Option<Rgba> {
    let digits = text.trim().strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
    let nibble = |at: usize| u8::from_str_radix(&digits[at..at + 1], 16).ok().map(|n| n * 17);

    match digits.len() {
        3 => Some(Rgba::opaque(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        12 => Some(Rgba::opaque(byte(0)?, byte(4)?, byte(8)?)),
        _ => None,
    }
}

/// Look up an X11 color name.
///
/// Matching ignores case and whitespace and treats `grey` as `gray`.
/// `none` is transparent. Unknown names resolve to opaque red and are logged.
pub fn from_name(name: &str) -> Rgba {
    let key = normalize_name(name);
    if key == "none" {
        return Rgba::TRANSPARENT;
    }

    match lookup(&key) {
        Some(color) => color,
        None => {
            log::warn!("Unknown color name '{}', using red", name);
            Rgba::RED
        }
    }
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace("grey", "gray")
}

fn lookup(key: &str) -> Option<Rgba> {
    NAMED_COLORS
        .binary_search_by(|(entry, _)| entry.as_bytes().cmp(key.as_bytes()))
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}
