use pdf_writer::Content;

use crate::canvas::Canvas;
use crate::error::Error;
use crate::geometry::{self, ScanOrder};
use crate::pdf::PageSink;
use crate::template::{self, TemplateSpec};

/// What to draw into one label slot.
///
/// Either an arbitrary callback receiving the canvas and the label's width
/// and height, or the name of a form registered with
/// [`LabelRenderer::define_form`].
pub enum LabelContent<'a> {
    Callback(&'a mut dyn FnMut(&mut Canvas, f32, f32) -> Result<(), Error>),
    NamedForm(&'a str),
}

/// Renderer-level switches on top of a template.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderOptions {
    pub scan_order: ScanOrder,
    /// Stroke each label's outline, for checking alignment against real
    /// label stock.
    pub debug: bool,
}

/// Drives label content onto sheet after sheet, breaking pages when the grid
/// fills up.
///
/// The cursor walks slots in the configured scan order; a page's content is
/// opened lazily on the first draw after a break, so a renderer that is
/// finished without drawing produces a document with no pages. Finishing
/// consumes the renderer, which makes double-finalization unrepresentable.
pub struct LabelRenderer {
    spec: TemplateSpec,
    options: RenderOptions,
    sink: PageSink,
    page: Option<Content>,
    slot: usize,
}

impl LabelRenderer {
    pub fn new(spec: TemplateSpec, options: RenderOptions) -> Self {
        LabelRenderer {
            spec,
            options,
            sink: PageSink::new(spec.page_width, spec.page_height),
            page: None,
            slot: 0,
        }
    }

    /// Construct from a catalog template name. Fails before any output
    /// exists if the name is unknown.
    pub fn for_template(name: &str, options: RenderOptions) -> Result<Self, Error> {
        Ok(Self::new(template::lookup(name)?, options))
    }

    pub fn spec(&self) -> &TemplateSpec {
        &self.spec
    }

    /// Slot the next draw will land in, in `0..capacity`.
    pub fn slot_index(&self) -> usize {
        self.slot
    }

    /// Pages already flushed to the document (not counting a partially
    /// filled page still open).
    pub fn pages_finished(&self) -> usize {
        self.sink.pages_finished()
    }

    /// Register a reusable form sized to the label footprint. Drawing it
    /// later by name replays the recorded content without re-running the
    /// closure.
    pub fn define_form(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut Canvas, f32, f32) -> Result<(), Error>,
    ) -> Result<(), Error> {
        self.sink
            .define_form(name, self.spec.label_width, self.spec.label_height, build)
    }

    /// Draw one unit into the current slot, then advance the cursor,
    /// breaking the page if the grid is now full.
    ///
    /// On callback failure the graphics state is unwound, the error
    /// propagates, and the cursor stays on the same slot, so the caller may
    /// retry or abort.
    pub fn draw_one(&mut self, content: &mut LabelContent) -> Result<(), Error> {
        match content {
            LabelContent::Callback(draw) => self.with_slot(|canvas, w, h| draw(canvas, w, h)),
            LabelContent::NamedForm(name) => {
                let pdf_name = self
                    .sink
                    .form_pdf_name(name)
                    .ok_or_else(|| Error::UnknownForm(name.to_string()))?
                    .to_string();
                self.with_slot(|canvas, _, _| {
                    canvas.draw_form(&pdf_name);
                    Ok(())
                })
            }
        }
    }

    /// Draw the same content `count` times.
    pub fn draw_many(&mut self, content: &mut LabelContent, count: usize) -> Result<(), Error> {
        for _ in 0..count {
            self.draw_one(content)?;
        }
        Ok(())
    }

    /// Draw one label per item of a lazy sequence. The sequence is consumed
    /// as slots are filled, never collected up front, so unbounded sources
    /// work as long as the caller stops iterating.
    pub fn draw_from_sequence<T>(
        &mut self,
        mut draw: impl FnMut(&mut Canvas, f32, f32, T) -> Result<(), Error>,
        items: impl IntoIterator<Item = T>,
    ) -> Result<(), Error> {
        for item in items {
            self.with_slot(|canvas, w, h| draw(canvas, w, h, item))?;
        }
        Ok(())
    }

    fn with_slot(
        &mut self,
        draw: impl FnOnce(&mut Canvas, f32, f32) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let (x, y) = geometry::origin_of(self.slot, &self.spec, self.options.scan_order);
        let (w, h) = (self.spec.label_width, self.spec.label_height);
        let fresh_page = self.page.is_none();
        let content = self.page.get_or_insert_with(Content::new);

        let mut canvas = Canvas::new(content);
        if fresh_page && self.options.debug {
            canvas.round_joins();
        }
        canvas.save_state();
        canvas.translate(x, y);
        if self.options.debug {
            canvas.set_line_width(0.25);
            canvas.stroke_rounded_rect(0.0, 0.0, w, h, self.spec.corner_radius);
        }
        let result = draw(&mut canvas, w, h);
        canvas.unwind();
        result?;

        self.slot += 1;
        if self.slot == self.spec.capacity() {
            self.break_page();
        }
        Ok(())
    }

    fn break_page(&mut self) {
        if let Some(content) = self.page.take() {
            self.sink.end_page(content);
        }
        self.slot = 0;
    }

    /// Finalize a partially filled page if one is open and return the
    /// finished PDF bytes. An exactly-full final sheet was already flushed
    /// by the draw that filled it, so no blank trailing page appears.
    pub fn finish(mut self) -> Result<Vec<u8>, Error> {
        if self.slot > 0 {
            self.break_page();
        }
        let bytes = self.sink.finish();
        log::debug!("finished document: {} bytes", bytes.len());
        Ok(bytes)
    }
}
