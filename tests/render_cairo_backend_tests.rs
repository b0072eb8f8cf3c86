#![cfg(feature = "cairo-backend")]

use kline_chart::ChartError;
use kline_chart::api::{ChartEngine, ChartEngineConfig};
use kline_chart::core::{PaneDescriptor, PaneId, Record, StudyKind, Viewport};
use kline_chart::render::{CairoRenderer, PangoTextMeasurer, TextMeasurer};

fn records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new(i as i64 * 60_000, 10.0, 12.0, 9.0, 11.0, 300.0)
                .and_then(|record| record.with_field("vol.num", 300.0))
                .expect("record")
        })
        .collect()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_crosshair_tags_and_tooltip() {
    let renderer = CairoRenderer::new(620, 456).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(620, 456));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_records(records(150));
    engine
        .set_panes(vec![
            PaneDescriptor::new(PaneId::new(1), 0.0, 300.0, 8.0, 13.0, 2).expect("main pane"),
            PaneDescriptor::new(PaneId::new(2), 300.0, 100.0, 0.0, 400.0, 0)
                .expect("volume pane")
                .with_study(StudyKind::Vol),
        ])
        .expect("panes");

    assert!(engine.pointer_move(120.0, 150.0).expect("hover"));
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.lines_drawn, 2);
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.polygons_drawn, 1);
    assert_eq!(stats.texts_drawn, 6);
}

#[test]
fn pango_measurer_grows_with_text_length() {
    let measurer = PangoTextMeasurer::new().expect("measurer");
    let short = measurer.text_width_px("12", 24.0);
    let long = measurer.text_width_px("12345678", 24.0);

    assert!(short > 0.0);
    assert!(long > short);
}
