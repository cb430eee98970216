#![allow(dead_code)]

use labelsheet::{Canvas, Error};

/// Page count as declared in the document's page tree (`/Count N`).
///
/// The page tree is the only dictionary carrying `/Count`, and the sink
/// writes it after every content stream, so the last occurrence is taken —
/// compressed stream bytes earlier in the file can spell anything.
pub fn page_count(pdf: &[u8]) -> Option<i64> {
    let pos = pdf.windows(7).rposition(|w| w == b"/Count ")?;
    let rest = &pdf[pos + 7..];
    let end = rest
        .iter()
        .position(|b| !b.is_ascii_digit() && *b != b'-')
        .unwrap_or(rest.len());
    std::str::from_utf8(&rest[..end]).ok()?.parse().ok()
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Minimal label content: a filled tick in the slot's corner.
pub fn tick(canvas: &mut Canvas, _w: f32, _h: f32) -> Result<(), Error> {
    canvas.fill_rect(2.0, 2.0, 4.0, 4.0);
    Ok(())
}
