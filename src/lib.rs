mod canvas;
mod error;
mod fonts;
mod geometry;
mod pdf;
mod renderer;
mod template;

pub use canvas::Canvas;
pub use error::Error;
pub use geometry::{ScanOrder, origin_of};
pub use renderer::{LabelContent, LabelRenderer, RenderOptions};
pub use template::{A4, INCH, LETTER, MM, TemplateSpec, lookup, template_names};

use std::path::Path;
use std::time::Instant;

/// Render `count` labels onto the named sheet template and write the PDF to
/// `output`. The callback draws each label; it receives the canvas and the
/// label's width and height in points.
pub fn write_labels(
    template: &str,
    output: &Path,
    count: usize,
    options: RenderOptions,
    mut draw: impl FnMut(&mut Canvas, f32, f32) -> Result<(), Error>,
) -> Result<(), Error> {
    let t0 = Instant::now();

    let mut renderer = LabelRenderer::for_template(template, options)?;
    renderer.draw_many(&mut LabelContent::Callback(&mut draw), count)?;
    let bytes = renderer.finish()?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_render.as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}
