mod common;

use labelsheet::{LabelContent, LabelRenderer, RenderOptions, ScanOrder};

fn draw_ticks(renderer: &mut LabelRenderer, count: usize) {
    renderer
        .draw_many(&mut LabelContent::Callback(&mut common::tick), count)
        .unwrap();
}

#[test]
fn zero_draws_emit_no_pages() {
    let renderer = LabelRenderer::for_template("avery5160", RenderOptions::default()).unwrap();
    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(0));
}

#[test]
fn exact_fill_is_one_page_with_no_blank_trailer() {
    // avery5160 is a 3x10 grid, capacity 30.
    let mut renderer = LabelRenderer::for_template("avery5160", RenderOptions::default()).unwrap();
    assert_eq!(renderer.spec().capacity(), 30);

    draw_ticks(&mut renderer, 30);
    // The draw that filled the sheet already broke the page.
    assert_eq!(renderer.slot_index(), 0);
    assert_eq!(renderer.pages_finished(), 1);

    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(1));
}

#[test]
fn one_past_capacity_starts_a_second_page() {
    let mut renderer = LabelRenderer::for_template("avery5160", RenderOptions::default()).unwrap();
    draw_ticks(&mut renderer, 31);
    assert_eq!(renderer.slot_index(), 1);
    assert_eq!(renderer.pages_finished(), 1);

    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(2));
}

#[test]
fn partial_sheet_is_finalized_by_finish() {
    let mut renderer = LabelRenderer::for_template("avery5160", RenderOptions::default()).unwrap();
    draw_ticks(&mut renderer, 10);
    assert_eq!(renderer.pages_finished(), 0);

    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(1));
}

#[test]
fn page_count_is_ceil_of_draws_over_capacity() {
    // avery5163 is a 2x5 grid, capacity 10.
    for (draws, pages) in [(1, 1), (9, 1), (10, 1), (11, 2), (25, 3), (30, 3)] {
        let mut renderer =
            LabelRenderer::for_template("avery5163", RenderOptions::default()).unwrap();
        draw_ticks(&mut renderer, draws);
        let bytes = renderer.finish().unwrap();
        assert_eq!(
            common::page_count(&bytes),
            Some(pages),
            "{draws} draws on a capacity-10 sheet"
        );
    }
}

#[test]
fn scan_order_does_not_change_pagination() {
    let options = RenderOptions {
        scan_order: ScanOrder::LeftRight,
        ..Default::default()
    };
    let mut renderer = LabelRenderer::for_template("avery5160", options).unwrap();
    draw_ticks(&mut renderer, 31);
    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(2));
}

#[test]
fn sequence_items_map_one_to_one_onto_slots() {
    let mut renderer = LabelRenderer::for_template("avery5163", RenderOptions::default()).unwrap();
    let mut consumed = 0usize;
    renderer
        .draw_from_sequence(
            |canvas, w, h, _n: usize| {
                consumed += 1;
                common::tick(canvas, w, h)
            },
            (0..).take(12),
        )
        .unwrap();
    assert_eq!(consumed, 12);
    assert_eq!(renderer.slot_index(), 2);

    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(2));
}

#[test]
fn page_count_ignores_count_lookalikes_in_stream_bytes() {
    // Compressed stream data may spell "/Count" by accident; only the page
    // tree written after the streams is authoritative.
    let mut fake = Vec::new();
    fake.extend_from_slice(b"stream\x9c\x01/Count 9\x00endstream\n");
    fake.extend_from_slice(b"<< /Type /Pages /Kids [] /Count 2 >>\n");
    assert_eq!(common::page_count(&fake), Some(2));
}

#[test]
fn debug_outlines_render_on_rounded_templates() {
    let options = RenderOptions {
        debug: true,
        ..Default::default()
    };
    // royalgreen1660 has a 3pt corner radius, exercising the curve path.
    let mut renderer = LabelRenderer::for_template("royalgreen1660", options).unwrap();
    draw_ticks(&mut renderer, 5);
    let bytes = renderer.finish().unwrap();
    assert_eq!(common::page_count(&bytes), Some(1));
}
