use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};

use crate::canvas::Canvas;
use crate::error::Error;
use crate::fonts;

/// Output sink accumulating finished pages of one document.
///
/// Object graph and assembly order follow the usual pdf-writer shape: streams
/// are written as pages finish, the catalog and page tree are written last
/// once the page count is known. Every page shares one font resource and the
/// full set of registered forms.
pub(crate) struct PageSink {
    pdf: Pdf,
    next_id: i32,
    catalog_id: Ref,
    pages_id: Ref,
    font_ref: Ref,
    page_width: f32,
    page_height: f32,
    content_ids: Vec<Ref>,
    // (caller name, resource name, object ref); re-registration appends, the
    // latest entry for a caller name wins.
    forms: Vec<(String, String, Ref)>,
}

impl PageSink {
    pub(crate) fn new(page_width: f32, page_height: f32) -> Self {
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };
        let catalog_id = alloc();
        let pages_id = alloc();
        let font_ref = alloc();

        let mut pdf = Pdf::new();
        fonts::register_helvetica(&mut pdf, font_ref);

        PageSink {
            pdf,
            next_id,
            catalog_id,
            pages_id,
            font_ref,
            page_width,
            page_height,
            content_ids: Vec::new(),
            forms: Vec::new(),
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    /// Flush one finished page's content stream to the document.
    pub(crate) fn end_page(&mut self, content: Content) {
        let raw = content.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, 6);
        let id = self.alloc();
        self.pdf.stream(id, &compressed).filter(Filter::FlateDecode);
        self.content_ids.push(id);
    }

    pub(crate) fn pages_finished(&self) -> usize {
        self.content_ids.len()
    }

    /// Record a reusable form as a Form XObject with the given bounding box.
    /// The build closure draws the form's content once; later draws reference
    /// it by name.
    pub(crate) fn define_form(
        &mut self,
        name: &str,
        width: f32,
        height: f32,
        build: impl FnOnce(&mut Canvas, f32, f32) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let mut content = Content::new();
        let mut canvas = Canvas::new(&mut content);
        let result = build(&mut canvas, width, height);
        canvas.unwind();
        result?;
        let bytes = content.finish();

        let form_ref = self.alloc();
        let pdf_name = format!("Fm{}", self.forms.len() + 1);
        let mut form = self.pdf.form_xobject(form_ref, &bytes);
        form.bbox(Rect::new(0.0, 0.0, width, height));
        form.resources().fonts().pair(fonts::FONT_NAME, self.font_ref);
        drop(form);

        self.forms.push((name.to_string(), pdf_name, form_ref));
        Ok(())
    }

    /// Resource name for a registered form, if any.
    pub(crate) fn form_pdf_name(&self, name: &str) -> Option<&str> {
        self.forms
            .iter()
            .rev()
            .find(|(n, _, _)| n == name)
            .map(|(_, pdf_name, _)| pdf_name.as_str())
    }

    /// Write the page tree and catalog, returning the finished document.
    /// Zero finished pages yields a document with an empty page tree.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        let n = self.content_ids.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| self.alloc()).collect();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        for (i, &page_id) in page_ids.iter().enumerate() {
            let mut page = self.pdf.page(page_id);
            page.media_box(Rect::new(0.0, 0.0, self.page_width, self.page_height))
                .parent(self.pages_id)
                .contents(self.content_ids[i]);
            let mut resources = page.resources();
            resources.fonts().pair(fonts::FONT_NAME, self.font_ref);
            if !self.forms.is_empty() {
                let mut xobjects = resources.x_objects();
                for (_, pdf_name, form_ref) in &self.forms {
                    xobjects.pair(Name(pdf_name.as_bytes()), *form_ref);
                }
            }
        }

        self.pdf.finish()
    }
}
