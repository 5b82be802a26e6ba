//! Base-14 font metrics for layout measurements and WinAnsi string encoding.
//!
//! Agreements render exclusively with the standard Helvetica family, so no
//! font files are read or embedded; widths come from approximate AFM tables
//! and the PDF encoder references the fonts by base name.

pub(crate) const MM_PER_PT: f32 = 25.4 / 72.0;
pub(crate) const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Regular,
    Bold,
    Oblique,
}

impl FontVariant {
    /// PostScript base font name for the PDF font dictionary.
    pub(crate) fn base_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "Helvetica",
            FontVariant::Bold => "Helvetica-Bold",
            FontVariant::Oblique => "Helvetica-Oblique",
        }
    }

    /// Resource name the content streams select the font by.
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            FontVariant::Regular => "F1",
            FontVariant::Bold => "F2",
            FontVariant::Oblique => "F3",
        }
    }

    pub(crate) const ALL: [FontVariant; 3] =
        [FontVariant::Regular, FontVariant::Bold, FontVariant::Oblique];
}

/// Approximate Helvetica advance width at 1000 units/em for one WinAnsi byte.
fn advance_1000(byte: u8, variant: FontVariant) -> f32 {
    match variant {
        FontVariant::Regular | FontVariant::Oblique => match byte {
            32 => 278.0,                          // space
            33..=47 => 333.0,                     // punctuation
            48..=57 => 556.0,                     // digits
            58..=64 => 333.0,                     // more punctuation
            73 | 74 => 278.0,                     // I J (narrow uppercase)
            77 => 833.0,                          // M (wide)
            65..=90 => 667.0,                     // uppercase A-Z (average)
            91..=96 => 333.0,                     // brackets etc.
            102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
            109 | 119 => 833.0,                   // m w (wide)
            97..=122 => 556.0,                    // lowercase a-z (average)
            _ => 556.0,
        },
        FontVariant::Bold => match byte {
            32 => 278.0,
            33..=47 => 333.0,
            48..=57 => 556.0,
            58..=64 => 333.0,
            105 | 106 | 108 => 278.0, // i j l stay narrow in bold
            73 | 74 => 278.0,
            77 => 889.0,
            65..=90 => 722.0,
            91..=96 => 333.0,
            102 | 116 => 333.0,
            109 | 119 => 889.0,
            97..=122 => 611.0,
            _ => 611.0,
        },
    }
}

fn char_width_1000(c: char, variant: FontVariant) -> f32 {
    let byte = char_to_winansi(c);
    if byte >= 32 { advance_1000(byte, variant) } else { 0.0 }
}

/// Rendered width of `text` in points at the given size.
pub(crate) fn text_width_pt(text: &str, variant: FontVariant, size: f32) -> f32 {
    text.chars()
        .map(|c| char_width_1000(c, variant) * size / 1000.0)
        .sum()
}

/// Rendered width of `text` in millimetres; layout runs in millimetres while
/// font sizes stay in points.
pub(crate) fn text_width_mm(text: &str, variant: FontVariant, size: f32) -> f32 {
    text_width_pt(text, variant, size) * MM_PER_PT
}

pub(crate) fn space_width_mm(variant: FontVariant, size: f32) -> f32 {
    char_width_1000(' ', variant) * size / 1000.0 * MM_PER_PT
}

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8, // Latin-1 supplement maps directly
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95, // bullet
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str
/// encoding. Unmappable characters are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b != 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_runs_wider_than_regular() {
        let text = "Arbitration Agreement";
        let regular = text_width_pt(text, FontVariant::Regular, 10.0);
        let bold = text_width_pt(text, FontVariant::Bold, 10.0);
        assert!(bold > regular);
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let at_10 = text_width_pt("sittings", FontVariant::Regular, 10.0);
        let at_20 = text_width_pt("sittings", FontVariant::Regular, 20.0);
        assert!((at_20 - at_10 * 2.0).abs() < 1e-4);
    }

    #[test]
    fn winansi_encoding_keeps_ascii_and_drops_unmappable() {
        assert_eq!(to_winansi_bytes("Rs. 500"), b"Rs. 500".to_vec());
        // Bullet maps into the 0x80-0x9F window; rupee sign has no slot.
        assert_eq!(to_winansi_bytes("\u{2022}"), vec![0x95]);
        assert!(to_winansi_bytes("\u{20B9}").is_empty());
    }
}
