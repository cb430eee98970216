use crate::error::Error;

/// One millimeter in PDF points.
pub const MM: f32 = 72.0 / 25.4;
/// One inch in PDF points.
pub const INCH: f32 = 72.0;

/// US Letter page size in points (width, height).
pub const LETTER: (f32, f32) = (612.0, 792.0);
/// ISO A4 page size in points (width, height).
pub const A4: (f32, f32) = (595.275_6, 841.889_8);

/// Physical layout of one sheet of labels.
///
/// All lengths are in PDF points. `margin_left`/`margin_top` locate the
/// top-left corner of the first label relative to the top-left corner of the
/// page; the geometry code flips into PDF's bottom-up coordinates. Whether
/// the grid actually fits on the page is the template author's problem, not
/// checked here — an oversized grid prints clipped, it does not error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TemplateSpec {
    pub columns: u32,
    pub rows: u32,
    pub label_width: f32,
    pub label_height: f32,
    pub column_gutter: f32,
    pub row_gutter: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub page_width: f32,
    pub page_height: f32,
    /// Corner radius for the debug outline only.
    pub corner_radius: f32,
}

impl TemplateSpec {
    /// Number of label slots on one page.
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Names of all templates in the built-in catalog.
pub fn template_names() -> &'static [&'static str] {
    &[
        "royalgreen1660",
        "averyL4731",
        "avery5160",
        "avery5161",
        "avery5163",
        "avery5167",
        "avery5371",
    ]
}

/// Look up a sheet template by catalog name.
///
/// Fails before any output exists, so a typo in a template name never leaves
/// a half-written file behind.
pub fn lookup(name: &str) -> Result<TemplateSpec, Error> {
    let spec = match name {
        "royalgreen1660" => TemplateSpec {
            columns: 7,
            rows: 22,
            label_width: 25.4 * MM,
            label_height: 9.52 * MM,
            column_gutter: 2.5 * MM,
            row_gutter: 2.45 * MM,
            margin_left: 11.55 * MM,
            margin_top: 8.73 * MM,
            page_width: LETTER.0,
            page_height: LETTER.1,
            corner_radius: 3.0,
        },
        "averyL4731" => TemplateSpec {
            columns: 7,
            rows: 27,
            label_width: 25.4 * MM,
            label_height: 10.0 * MM,
            column_gutter: 2.5 * MM,
            row_gutter: 0.0,
            margin_left: 9.0 * MM,
            margin_top: 13.5 * MM,
            page_width: A4.0,
            page_height: A4.1,
            corner_radius: 4.0,
        },
        // 2.6 x 1 inch address labels
        "avery5160" => TemplateSpec {
            columns: 3,
            rows: 10,
            label_width: 187.0,
            label_height: 72.0,
            column_gutter: 11.0,
            row_gutter: 0.0,
            margin_left: 14.0,
            margin_top: 36.0,
            page_width: LETTER.0,
            page_height: LETTER.1,
            corner_radius: 0.0,
        },
        "avery5161" => TemplateSpec {
            columns: 2,
            rows: 10,
            label_width: 288.0,
            label_height: 72.0,
            column_gutter: 0.0,
            row_gutter: 0.0,
            margin_left: 18.0,
            margin_top: 36.0,
            page_width: LETTER.0,
            page_height: LETTER.1,
            corner_radius: 0.0,
        },
        // 4 x 2 inch address labels
        "avery5163" => TemplateSpec {
            columns: 2,
            rows: 5,
            label_width: 288.0,
            label_height: 144.0,
            column_gutter: 0.0,
            row_gutter: 0.0,
            margin_left: 18.0,
            margin_top: 36.0,
            page_width: LETTER.0,
            page_height: LETTER.1,
            corner_radius: 0.0,
        },
        // 1.75 x 0.5 inch return address labels
        "avery5167" => TemplateSpec {
            columns: 4,
            rows: 20,
            label_width: 1.75 * INCH,
            label_height: 0.5 * INCH,
            column_gutter: 0.3 * INCH,
            row_gutter: 0.0,
            margin_left: 0.3 * INCH,
            margin_top: 0.5 * INCH,
            page_width: LETTER.0,
            page_height: LETTER.1,
            corner_radius: 0.0,
        },
        // 3.5 x 2 inch business cards
        "avery5371" => TemplateSpec {
            columns: 2,
            rows: 5,
            label_width: 252.0,
            label_height: 144.0,
            column_gutter: 0.0,
            row_gutter: 0.0,
            margin_left: 54.0,
            margin_top: 36.0,
            page_width: LETTER.0,
            page_height: LETTER.1,
            corner_radius: 0.0,
        },
        _ => return Err(Error::UnknownTemplate(name.to_string())),
    };
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_is_an_error() {
        match lookup("avery9999") {
            Err(Error::UnknownTemplate(name)) => assert_eq!(name, "avery9999"),
            other => panic!("expected UnknownTemplate, got {other:?}"),
        }
    }

    #[test]
    fn every_catalog_name_resolves() {
        for name in template_names() {
            let spec = lookup(name).unwrap();
            assert!(spec.capacity() > 0, "{name} has an empty grid");
            assert!(spec.label_width > 0.0 && spec.label_height > 0.0);
            assert!(spec.page_width > 0.0 && spec.page_height > 0.0);
        }
    }

    #[test]
    fn avery5160_matches_the_datasheet() {
        let spec = lookup("avery5160").unwrap();
        assert_eq!(spec.capacity(), 30);
        assert_eq!(spec.page_height, LETTER.1);
    }
}
