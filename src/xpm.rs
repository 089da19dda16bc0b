//! XPM image decoding
//!
//! Supports the XPM 3 subset used for boot menu icons and logos: a
//! `"width height ncolors chars_per_pixel"` header (no hotspot, no
//! extensions), `ncolors` color definitions and `height` pixel rows.
//! Pixel codes are made of printable ASCII characters (32-127).

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::rgb::{self, Rgba};

/// First legal pixel code character
const CODE_FIRST: u32 = 32;
/// Number of legal pixel code characters (32..=127)
const CODE_RANGE: usize = 96;

/// Image decoding errors
#[derive(Debug, Error)]
pub enum XpmError {
    #[error("malformed XPM header: {0}")]
    Header(String),

    #[error("expected {expected} XPM rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("malformed color definition on row {row}: {reason}")]
    ColorLine { row: usize, reason: String },

    #[error("XPM dimensions overflow")]
    Overflow,

    #[error("out of memory while decoding XPM image")]
    Allocation,

    #[error("failed to read XPM file: {0}")]
    Io(#[from] std::io::Error),
}

/// Display class the image is decoded for; picks which color key wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visual {
    #[default]
    Color,
    Gray4,
    Mono,
}

impl Visual {
    /// Choose the visual matching a framebuffer depth
    pub fn from_bpp(bits_per_pixel: u32) -> Self {
        match bits_per_pixel {
            1 => Visual::Mono,
            2 => Visual::Gray4,
            _ => Visual::Color,
        }
    }

    fn preference(self) -> [ColorKey; 4] {
        match self {
            Visual::Color => [ColorKey::Color, ColorKey::Gray, ColorKey::Gray4, ColorKey::Mono],
            Visual::Gray4 => [ColorKey::Gray4, ColorKey::Color, ColorKey::Gray, ColorKey::Mono],
            Visual::Mono => [ColorKey::Mono, ColorKey::Color, ColorKey::Gray, ColorKey::Gray4],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorKey {
    Mono,
    Gray4,
    Gray,
    Color,
    Symbolic,
}

impl ColorKey {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "m" => Some(ColorKey::Mono),
            "g4" => Some(ColorKey::Gray4),
            "g" => Some(ColorKey::Gray),
            "c" => Some(ColorKey::Color),
            "s" => Some(ColorKey::Symbolic),
            _ => None,
        }
    }
}

/// A decoded image
///
/// Pixels are stored row-major as indices into the palette; `None` marks a
/// transparent pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct XpmImage {
    width: u32,
    height: u32,
    palette: Vec<Rgba>,
    pixels: Vec<Option<u32>>,
}

impl XpmImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }

    /// Color of the pixel at (x, y), `None` if transparent or outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels[index].map(|color| self.palette[color as usize])
    }
}

struct Header {
    width: usize,
    height: usize,
    ncolors: usize,
    chpp: usize,
}

fn parse_header(line: &str) -> Result<Header, XpmError> {
    let mut values = [0usize; 4];
    let mut tokens = line.split_whitespace();

    for (slot, name) in values
        .iter_mut()
        .zip(["width", "height", "ncolors", "chars_per_pixel"])
    {
        let token = tokens
            .next()
            .ok_or_else(|| XpmError::Header(format!("missing {}", name)))?;
        let value: i64 = token
            .parse()
            .map_err(|_| XpmError::Header(format!("{} is not a number: '{}'", name, token)))?;
        if value < 0 {
            return Err(XpmError::Header(format!("negative {}: {}", name, value)));
        }
        *slot = usize::try_from(value).map_err(|_| XpmError::Overflow)?;
    }

    if tokens.next().is_some() {
        return Err(XpmError::Header(
            "hotspot and extensions are not supported".to_string(),
        ));
    }

    let [width, height, ncolors, chpp] = values;
    if chpp == 0 {
        return Err(XpmError::Header("chars_per_pixel must be positive".to_string()));
    }
    if chpp < 8 && ncolors as u64 > 1u64 << (8 * chpp) {
        return Err(XpmError::Header(format!(
            "{} colors cannot be addressed with {} chars per pixel",
            ncolors, chpp
        )));
    }

    Ok(Header {
        width,
        height,
        ncolors,
        chpp,
    })
}

/// Split a color definition into its pixel code and resolved color.
///
/// The color is `None` when it resolves to a transparent value.
fn parse_color_line(
    line: &str,
    chpp: usize,
    visual: Visual,
    row: usize,
) -> Result<(&str, Option<Rgba>), XpmError> {
    let bad = |reason: &str| XpmError::ColorLine {
        row,
        reason: reason.to_string(),
    };

    let end = code_end(line, chpp).ok_or_else(|| bad("shorter than the pixel code"))?;
    let (code, rest) = line.split_at(end);

    // Values may span several tokens ("c light grey"), so collect until the next key
    let mut pairs: Vec<(ColorKey, String)> = Vec::new();
    for token in rest.split_whitespace() {
        if let Some(key) = ColorKey::parse(token) {
            pairs.push((key, String::new()));
            continue;
        }
        let Some((_, value)) = pairs.last_mut() else {
            return Err(bad(&format!("expected a color key, found '{}'", token)));
        };
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(token);
    }

    if let Some((key, _)) = pairs.iter().find(|(_, value)| value.is_empty()) {
        return Err(bad(&format!("missing value for key {:?}", key)));
    }

    let value = visual
        .preference()
        .iter()
        .find_map(|wanted| {
            pairs
                .iter()
                .find(|(key, _)| key == wanted)
                .map(|(_, value)| value.as_str())
        })
        .ok_or_else(|| bad("no usable color key"))?;

    let color = rgb::parse(value);
    Ok((code, (!color.is_transparent()).then_some(color)))
}

/// Lookup from pixel code to color definition
enum CodeTable {
    /// One or two character codes, indexed directly by character value
    Direct(Vec<Option<usize>>),
    /// Longer codes, scanned linearly; `None` marks an unusable code
    Scan(Vec<Option<String>>),
}

impl CodeTable {
    fn build(chpp: usize, codes: &[&str]) -> Result<Self, XpmError> {
        if chpp > 2 {
            let codes = codes
                .iter()
                .map(|code| {
                    if is_printable(code) {
                        Some(code.to_string())
                    } else {
                        log::warn!("XPM pixel code {:?} outside the printable range", code);
                        None
                    }
                })
                .collect();
            return Ok(CodeTable::Scan(codes));
        }

        let size = CODE_RANGE.pow(chpp as u32);
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| XpmError::Allocation)?;
        slots.resize(size, None);

        for (definition, code) in codes.iter().enumerate() {
            match direct_index(code) {
                Some(slot) if slots[slot].is_none() => slots[slot] = Some(definition),
                Some(_) => log::debug!("Duplicate XPM pixel code {:?}", code),
                None => log::warn!("XPM pixel code {:?} outside the printable range", code),
            }
        }

        Ok(CodeTable::Direct(slots))
    }

    fn find(&self, code: &str) -> Option<usize> {
        match self {
            CodeTable::Direct(slots) => slots.get(direct_index(code)?).copied().flatten(),
            CodeTable::Scan(codes) => codes
                .iter()
                .position(|known| known.as_deref() == Some(code)),
        }
    }
}

fn code_offset(c: char) -> Option<usize> {
    let offset = (c as u32).checked_sub(CODE_FIRST)? as usize;
    (offset < CODE_RANGE).then_some(offset)
}

fn is_printable(code: &str) -> bool {
    code.chars().all(|c| code_offset(c).is_some())
}

/// Row-major index of a code over the printable range: `(c1 - 32) * 96 + (c2 - 32)`
fn direct_index(code: &str) -> Option<usize> {
    code.chars()
        .try_fold(0usize, |acc, c| Some(acc * CODE_RANGE + code_offset(c)?))
}

/// Byte offset just past the first `chars` characters of `text`
fn code_end(text: &str, chars: usize) -> Option<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

/// Decode an XPM image from its rows: the header, `ncolors` color lines and
/// `height` pixel rows, with quoting and comments already stripped.
pub fn decode<S: AsRef<str>>(rows: &[S], visual: Visual) -> Result<XpmImage, XpmError> {
    let header_row = rows
        .first()
        .ok_or_else(|| XpmError::Header("missing header".to_string()))?;
    let header = parse_header(header_row.as_ref())?;

    let expected = header
        .ncolors
        .checked_add(header.height)
        .and_then(|n| n.checked_add(1))
        .ok_or(XpmError::Overflow)?;
    if rows.len() != expected {
        return Err(XpmError::RowCount {
            expected,
            found: rows.len(),
        });
    }

    let row_len = header.width.checked_mul(header.chpp).ok_or(XpmError::Overflow)?;
    let pixel_count = header.width.checked_mul(header.height).ok_or(XpmError::Overflow)?;
    let width = u32::try_from(header.width).map_err(|_| XpmError::Overflow)?;
    let height = u32::try_from(header.height).map_err(|_| XpmError::Overflow)?;

    let mut palette = Vec::new();
    let mut definitions: Vec<Option<u32>> = Vec::with_capacity(header.ncolors);
    let mut codes: Vec<&str> = Vec::with_capacity(header.ncolors);

    for (i, row) in rows[1..=header.ncolors].iter().enumerate() {
        let (code, color) = parse_color_line(row.as_ref(), header.chpp, visual, i + 1)?;
        codes.push(code);
        definitions.push(color.map(|color| {
            palette.push(color);
            (palette.len() - 1) as u32
        }));
    }

    let table = CodeTable::build(header.chpp, &codes)?;

    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(pixel_count)
        .map_err(|_| XpmError::Allocation)?;

    let mut unknown = 0usize;
    for row in &rows[1 + header.ncolors..] {
        let mut rest = row.as_ref();
        let chars = rest.chars().count();
        if chars < row_len {
            log::warn!(
                "XPM pixel row has {} characters, expected {}; padding with transparent pixels",
                chars,
                row_len
            );
        }
        for _ in 0..header.width {
            let code = match code_end(rest, header.chpp) {
                Some(end) => {
                    let (code, tail) = rest.split_at(end);
                    rest = tail;
                    Some(code)
                }
                None => {
                    rest = "";
                    None
                }
            };
            let pixel = code.and_then(|code| table.find(code));
            match pixel {
                Some(definition) => pixels.push(definitions[definition]),
                None => {
                    unknown += 1;
                    pixels.push(None);
                }
            }
        }
    }

    if unknown > 0 {
        log::warn!("{} XPM pixels with unknown codes decoded as transparent", unknown);
    }

    Ok(XpmImage {
        width,
        height,
        palette,
        pixels,
    })
}

/// Extract the string literals of an XPM source file, skipping C comments.
pub fn split_source(text: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '"' => {
                let mut row = String::new();
                while let Some(c) = chars.next() {
                    match c {
                        '"' => break,
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                row.push(escaped);
                            }
                        }
                        _ => row.push(c),
                    }
                }
                rows.push(row);
            }
            _ => {}
        }
    }

    rows
}

/// Read and decode an XPM file
pub fn load_file(path: &Path, visual: Visual) -> Result<XpmImage, XpmError> {
    let text = fs::read_to_string(path)?;
    let image = decode(&split_source(&text), visual)?;
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_single_red_pixel() {
        let image = decode(&["1 1 1 1", "a c #ff0000", "a"], Visual::Color).unwrap();
        assert_eq!(image.width(), 1);
        assert_eq!(image.height(), 1);
        assert_eq!(image.pixel(0, 0), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn test_unprintable_pixel_is_transparent() {
        let image = decode(&["2 1 1 1", "a c white", "a\u{7}"], Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(image.pixel(1, 0), None);
    }

    #[test]
    fn test_undeclared_and_missing_pixels_are_transparent() {
        let image = decode(&["3 1 1 1", "a c white", "b"], Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), None);
        assert_eq!(image.pixel(1, 0), None);
        assert_eq!(image.pixel(2, 0), None);
    }

    #[test]
    fn test_none_color_is_transparent() {
        let image = decode(&["2 1 2 1", ". c None", "# c black", ".#"], Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), None);
        assert_eq!(image.pixel(1, 0), Some(Rgba::BLACK));
        assert_eq!(image.palette().len(), 1);
    }

    #[test]
    fn test_two_chars_per_pixel() {
        let rows = ["2 2 2 2", "aa c red", "ab c #0000ff", "aaab", "abaa"];
        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::RED));
        assert_eq!(image.pixel(1, 0), Some(Rgba::opaque(0, 0, 255)));
        assert_eq!(image.pixel(0, 1), Some(Rgba::opaque(0, 0, 255)));
        assert_eq!(image.pixel(1, 1), Some(Rgba::RED));
    }

    #[test]
    fn test_three_chars_per_pixel_scan() {
        let rows = ["2 1 2 3", "abc c white", "xyz c black", "xyzabc"];
        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(image.pixel(1, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_visual_preference() {
        let rows = ["1 1 1 1", "a c red m white", "a"];
        assert_eq!(decode(&rows, Visual::Color).unwrap().pixel(0, 0), Some(Rgba::RED));
        assert_eq!(decode(&rows, Visual::Mono).unwrap().pixel(0, 0), Some(Rgba::WHITE));

        let rows = ["1 1 1 1", "a s background g4 #808080", "a"];
        assert_eq!(
            decode(&rows, Visual::Color).unwrap().pixel(0, 0),
            Some(Rgba::opaque(0x80, 0x80, 0x80))
        );
    }

    #[test]
    fn test_multi_word_color_value() {
        let rows = ["1 1 1 1", "a c light grey", "a"];
        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::opaque(211, 211, 211)));
    }

    #[test]
    fn test_unknown_name_and_bad_hex_fallbacks() {
        let rows = ["2 1 2 1", "a c no_such_color", "b c #12", "ab"];
        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::RED));
        assert_eq!(image.pixel(1, 0), Some(Rgba::BLACK));
    }

    #[test]
    fn test_header_errors() {
        assert!(matches!(decode(&["1 -1 1 1"], Visual::Color), Err(XpmError::Header(_))));
        assert!(matches!(decode(&["1 1 257 1"], Visual::Color), Err(XpmError::Header(_))));
        assert!(matches!(decode(&["1 1 1 0"], Visual::Color), Err(XpmError::Header(_))));
        assert!(matches!(decode(&["1 1 x 1"], Visual::Color), Err(XpmError::Header(_))));
        assert!(matches!(decode(&["1 1 1 1 0 0"], Visual::Color), Err(XpmError::Header(_))));
        let empty: [&str; 0] = [];
        assert!(matches!(decode(&empty, Visual::Color), Err(XpmError::Header(_))));
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = decode(&["1 2 1 1", "a c red", "a"], Visual::Color).unwrap_err();
        assert!(matches!(err, XpmError::RowCount { expected: 4, found: 3 }));
    }

    #[test]
    fn test_color_line_errors() {
        let err = decode(&["1 1 1 1", "a s label", "a"], Visual::Color).unwrap_err();
        assert!(matches!(err, XpmError::ColorLine { row: 1, .. }));

        let err = decode(&["1 1 1 1", "a red", "a"], Visual::Color).unwrap_err();
        assert!(matches!(err, XpmError::ColorLine { .. }));

        let err = decode(&["1 1 1 1", "a c", "a"], Visual::Color).unwrap_err();
        assert!(matches!(err, XpmError::ColorLine { .. }));
    }

    #[test]
    fn test_split_source() {
        let source = r##"/* XPM */
static char *icon[] = {
/* columns rows colors chars-per-pixel */
"2 1 2 1",
"  c None",
"x c #000000", // ink
"x "
};
"##;
        let rows = split_source(source);
        assert_eq!(rows, vec!["2 1 2 1", "  c None", "x c #000000", "x "]);

        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(image.pixel(1, 0), None);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "static char *x[] = {{\"1 1 1 1\", \"o c blue\", \"o\"}};").unwrap();

        let image = load_file(file.path(), Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::opaque(0, 0, 255)));

        let missing = load_file(Path::new("/nonexistent/icon.xpm"), Visual::Color);
        assert!(matches!(missing, Err(XpmError::Io(_))));
    }

    #[test]
    fn test_direct_index() {
        assert_eq!(direct_index(" "), Some(0));
        assert_eq!(direct_index("\u{7f}"), Some(95));
        assert_eq!(direct_index("! "), Some(96));
        assert_eq!(direct_index("\u{1f}"), None);
        assert_eq!(direct_index("\u{80}"), None);
        assert_eq!(direct_index("é"), None);
    }

    #[test]
    fn test_non_ascii_color_code_is_skipped() {
        let rows = ["2 1 2 1", "é c blue", "a c red", "aé"];
        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), Some(Rgba::RED));
        assert_eq!(image.pixel(1, 0), None);
    }

    #[test]
    fn test_non_ascii_pixel_counts_once() {
        let image = decode(&["3 1 1 1", "a c red", "éaa"], Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), None);
        assert_eq!(image.pixel(1, 0), Some(Rgba::RED));
        assert_eq!(image.pixel(2, 0), Some(Rgba::RED));
    }

    #[test]
    fn test_non_ascii_codes_with_long_pixels() {
        let rows = ["2 1 2 3", "aéb c blue", "abc c red", "aébabc"];
        let image = decode(&rows, Visual::Color).unwrap();
        assert_eq!(image.pixel(0, 0), None);
        assert_eq!(image.pixel(1, 0), Some(Rgba::RED));
    }
}
