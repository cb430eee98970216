use pdf_writer::types::{LineCapStyle, LineJoinStyle};
use pdf_writer::{Content, Name, Str};

use crate::fonts;

/// Cubic Bézier control offset approximating a quarter circle.
const CIRCLE_KAPPA: f32 = 0.552_284_75;

/// Drawing surface handed to label callbacks.
///
/// Thin wrapper over a PDF content stream. Coordinates are in points with the
/// origin at the bottom-left of the current label (the renderer translates
/// there before invoking content). Graphics-state saves are tracked so the
/// renderer can unwind anything a failing callback leaves open.
pub struct Canvas<'a> {
    content: &'a mut Content,
    depth: u32,
}

impl<'a> Canvas<'a> {
    pub(crate) fn new(content: &'a mut Content) -> Self {
        Canvas { content, depth: 0 }
    }

    pub fn save_state(&mut self) {
        self.content.save_state();
        self.depth += 1;
    }

    pub fn restore_state(&mut self) {
        if self.depth > 0 {
            self.content.restore_state();
            self.depth -= 1;
        }
    }

    /// Pop every graphics-state save made through this canvas. Called by the
    /// renderer on every exit path of a draw, including callback failure.
    pub(crate) fn unwind(&mut self) {
        while self.depth > 0 {
            self.content.restore_state();
            self.depth -= 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.content.transform([1.0, 0.0, 0.0, 1.0, dx, dy]);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.content.set_line_width(width);
    }

    pub fn set_stroke_gray(&mut self, gray: f32) {
        self.content.set_stroke_gray(gray);
    }

    pub fn set_fill_gray(&mut self, gray: f32) {
        self.content.set_fill_gray(gray);
    }

    pub(crate) fn round_joins(&mut self) {
        self.content.set_line_join(LineJoinStyle::RoundJoin);
        self.content.set_line_cap(LineCapStyle::RoundCap);
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.content.rect(x, y, w, h).stroke();
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.content.rect(x, y, w, h).fill_nonzero();
    }

    /// Stroke a rectangle with circular corner arcs of the given radius.
    pub fn stroke_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) {
        let r = radius.min(w / 2.0).min(h / 2.0);
        if r <= 0.0 {
            self.stroke_rect(x, y, w, h);
            return;
        }
        let k = r * CIRCLE_KAPPA;
        let c = &mut *self.content;
        c.move_to(x + r, y);
        c.line_to(x + w - r, y);
        c.cubic_to(x + w - r + k, y, x + w, y + r - k, x + w, y + r);
        c.line_to(x + w, y + h - r);
        c.cubic_to(x + w, y + h - r + k, x + w - r + k, y + h, x + w - r, y + h);
        c.line_to(x + r, y + h);
        c.cubic_to(x + r - k, y + h, x, y + h - r + k, x, y + h - r);
        c.line_to(x, y + r);
        c.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
        c.close_path();
        c.stroke();
    }

    /// Show `text` in Helvetica with its baseline starting at (x, y).
    pub fn text(&mut self, x: f32, y: f32, font_size: f32, text: &str) {
        let bytes = fonts::to_winansi_bytes(text);
        self.content.begin_text();
        self.content.set_font(fonts::FONT_NAME, font_size);
        self.content.next_line(x, y);
        self.content.show(Str(&bytes));
        self.content.end_text();
    }

    /// Show `text` horizontally centered on `cx`.
    pub fn text_centered(&mut self, cx: f32, y: f32, font_size: f32, text: &str) {
        let x = cx - fonts::text_width(text, font_size) / 2.0;
        self.text(x, y, font_size, text);
    }

    /// Advance width of `text` at `font_size`, for caller-side layout.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        fonts::text_width(text, font_size)
    }

    pub(crate) fn draw_form(&mut self, pdf_name: &str) {
        self.content.x_object(Name(pdf_name.as_bytes()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwind_pops_unbalanced_saves() {
        let mut content = Content::new();
        let mut canvas = Canvas::new(&mut content);
        canvas.save_state();
        canvas.save_state();
        canvas.translate(10.0, 10.0);
        assert_eq!(canvas.depth(), 2);
        canvas.unwind();
        assert_eq!(canvas.depth(), 0);
        let bytes = content.finish();
        let q = bytes.iter().filter(|&&b| b == b'q').count();
        let cap_q = bytes.iter().filter(|&&b| b == b'Q').count();
        assert_eq!(q, cap_q);
    }

    #[test]
    fn restore_below_zero_is_ignored() {
        let mut content = Content::new();
        let mut canvas = Canvas::new(&mut content);
        canvas.restore_state();
        assert_eq!(canvas.depth(), 0);
        assert!(content.finish().is_empty());
    }

    #[test]
    fn rounded_rect_degrades_to_rect_at_zero_radius() {
        let mut content = Content::new();
        Canvas::new(&mut content).stroke_rounded_rect(0.0, 0.0, 10.0, 5.0, 0.0);
        let ops = String::from_utf8(content.finish().to_vec()).unwrap();
        assert!(ops.contains("re"), "expected a rect operator, got: {ops}");
        assert!(!ops.contains(" c\n"), "no curves expected: {ops}");
    }
}
