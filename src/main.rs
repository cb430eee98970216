use std::path::PathBuf;

use clap::Parser;

use labelsheet::{Error, LabelRenderer, RenderOptions, ScanOrder, lookup, template_names};

/// Render a run of numbered labels onto a sheet template.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Sheet template name, e.g. avery5160
    #[arg(required_unless_present = "list")]
    template: Option<String>,

    /// Output PDF path
    #[arg(required_unless_present = "list")]
    output: Option<PathBuf>,

    /// Number of labels to render
    #[arg(short = 'n', long, default_value_t = 30)]
    count: u64,

    /// First number to print
    #[arg(long, default_value_t = 1)]
    start: u64,

    /// Zero-pad printed numbers to this many digits
    #[arg(long, default_value_t = 4)]
    digits: usize,

    /// Text printed before each number
    #[arg(long, default_value = "")]
    prefix: String,

    /// Stroke each label's outline, for checking alignment against label stock
    #[arg(long)]
    debug: bool,

    /// Fill slots left to right instead of top to bottom
    #[arg(long)]
    row_major: bool,

    /// List known templates and exit
    #[arg(long)]
    list: bool,
}

/// Numbers to print, one per label. `--start` plus `--count` near `u64::MAX`
/// is rejected rather than wrapped.
fn number_range(start: u64, count: u64) -> Result<std::ops::Range<u64>, Error> {
    match start.checked_add(count) {
        Some(end) => Ok(start..end),
        None => Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "--start plus --count overflows",
        ))),
    }
}

fn run(args: Args) -> Result<(), Error> {
    if args.list {
        for name in template_names() {
            let spec = lookup(name)?;
            println!(
                "{name}: {}x{} labels of {:.1}x{:.1}pt",
                spec.columns, spec.rows, spec.label_width, spec.label_height
            );
        }
        return Ok(());
    }

    let (Some(template), Some(output)) = (&args.template, &args.output) else {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "TEMPLATE and OUTPUT are required unless --list is given",
        )));
    };

    let options = RenderOptions {
        scan_order: if args.row_major {
            ScanOrder::LeftRight
        } else {
            ScanOrder::TopDown
        },
        debug: args.debug,
    };

    let numbers = number_range(args.start, args.count)?;
    let mut renderer = LabelRenderer::for_template(template, options)?;
    let prefix = args.prefix.clone();
    let digits = args.digits;
    renderer.draw_from_sequence(
        |canvas, w, h, n: u64| {
            let text = format!("{prefix}{n:0digits$}");
            let size = (h * 0.5).min(12.0);
            // Baseline sits a bit under the vertical center; 0.36em of
            // Helvetica cap height above baseline reads as centered.
            canvas.text_centered(w / 2.0, h / 2.0 - size * 0.36, size, &text);
            Ok(())
        },
        numbers,
    )?;

    let bytes = renderer.finish()?;
    std::fs::write(output, &bytes).map_err(Error::Io)?;
    log::info!("wrote {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_range_counts_from_start() {
        assert_eq!(number_range(1, 30).unwrap(), 1..31);
        assert_eq!(number_range(500, 0).unwrap(), 500..500);
    }

    #[test]
    fn number_range_rejects_wraparound() {
        assert!(number_range(u64::MAX, 1).is_err());
        assert!(number_range(u64::MAX - 5, 10).is_err());
        assert_eq!(number_range(u64::MAX - 5, 5).unwrap().count(), 5);
    }
}
