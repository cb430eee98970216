use pdf_writer::{Name, Pdf, Ref};

/// Resource name under which the built-in font is listed on every page.
pub(crate) const FONT_NAME: Name<'static> = Name(b"F1");

/// Register the base-14 Helvetica font. Nothing is embedded; every PDF viewer
/// ships this face, which is plenty for label text.
pub(crate) fn register_helvetica(pdf: &mut Pdf, font_ref: Ref) {
    pdf.type1_font(font_ref)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
}

/// Approximate Helvetica advance at 1000 units/em for a WinAnsi byte.
fn winansi_width_1000(b: u8) -> f32 {
    match b {
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
    }
}

/// Encode text for a `show` operator under WinAnsiEncoding. Characters with
/// no WinAnsi slot degrade to '?'.
pub(crate) fn to_winansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| if (ch as u32) < 256 { ch as u8 } else { b'?' })
        .collect()
}

/// Advance width of `text` at `font_size`, for centering label text.
pub(crate) fn text_width(text: &str, font_size: f32) -> f32 {
    to_winansi_bytes(text)
        .iter()
        .map(|&b| winansi_width_1000(b) * font_size / 1000.0)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_share_one_width() {
        let w = text_width("0", 10.0);
        assert!((text_width("0123456789", 10.0) - w * 10.0).abs() < 1e-3);
    }

    #[test]
    fn non_winansi_falls_back_to_question_mark() {
        assert_eq!(to_winansi_bytes("a\u{2603}b"), b"a?b");
    }
}
