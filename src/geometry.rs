use crate::template::TemplateSpec;

/// Rule mapping a linear slot index onto the label grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScanOrder {
    /// Fill a column top to bottom before moving right (column-major).
    #[default]
    TopDown,
    /// Fill a row left to right before moving down (row-major).
    LeftRight,
}

impl ScanOrder {
    fn decompose(self, slot: usize, spec: &TemplateSpec) -> (usize, usize) {
        match self {
            ScanOrder::TopDown => (slot / spec.rows as usize, slot % spec.rows as usize),
            ScanOrder::LeftRight => (slot % spec.columns as usize, slot / spec.columns as usize),
        }
    }
}

/// Bottom-left origin of the label in slot `slot`, in page coordinates.
///
/// `slot` must be in `0..spec.capacity()`; indices outside that range are a
/// caller bug and only checked in debug builds. Margins are measured from the
/// top-left of the page, so the y coordinate flips against `page_height`
/// (PDF coordinates grow upward from the bottom-left corner).
pub fn origin_of(slot: usize, spec: &TemplateSpec, order: ScanOrder) -> (f32, f32) {
    debug_assert!(slot < spec.capacity(), "slot {slot} outside grid of {}", spec.capacity());
    let (col, row) = order.decompose(slot, spec);
    let x = spec.margin_left + col as f32 * (spec.label_width + spec.column_gutter);
    let y = spec.page_height
        - spec.margin_top
        - row as f32 * spec.row_gutter
        - (row as f32 + 1.0) * spec.label_height;
    (x, y)
}
