use approx::assert_relative_eq;
use kline_chart::api::{
    ChartEngine, ChartEngineConfig, CrosshairStyle, IndicatorDisplayRule, TooltipStyle,
    YAxisPosition, YAxisTextPosition,
};
use kline_chart::core::{PaneDescriptor, PaneId, Point, Record, StudyKind, Viewport};
use kline_chart::render::{LineStrokeStyle, NullRenderer, RenderFrame, TextMeasurer};

/// 2019-03-07 09:45 UTC.
const FIRST_TIMESTAMP_MILLIS: i64 = 1_551_951_900_000;

struct FixedWidthMeasurer(f64);

impl TextMeasurer for FixedWidthMeasurer {
    fn text_width_px(&self, _text: &str, _font_size_px: f64) -> f64 {
        self.0
    }
}

fn records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            Record::new(
                FIRST_TIMESTAMP_MILLIS + i as i64 * 60_000,
                100.0,
                102.0,
                98.0,
                101.0,
                1_200.0,
            )
            .and_then(|record| record.with_field("ma.ma5", 261.0))
            .and_then(|record| record.with_field("vol.num", 1_200.0))
            .expect("record")
        })
        .collect()
}

fn panes() -> Vec<PaneDescriptor> {
    vec![
        PaneDescriptor::new(PaneId::new(1), 0.0, 300.0, 100.0, 200.0, 2)
            .expect("main pane")
            .with_study(StudyKind::Ma),
        PaneDescriptor::new(PaneId::new(2), 300.0, 100.0, 0.0, 5_000.0, 0)
            .expect("volume pane")
            .with_study(StudyKind::Vol),
    ]
}

/// Content area is 500x400 at the origin; 50 visible records, 10px slots.
fn engine_with(config: ChartEngineConfig) -> ChartEngine<NullRenderer> {
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_text_measurer(FixedWidthMeasurer(40.0));
    engine.set_records(records(200));
    engine.set_panes(panes()).expect("panes");
    engine
}

fn base_config() -> ChartEngineConfig {
    let mut config = ChartEngineConfig::new(Viewport::new(620, 456));
    config.data_bounds.initial_range = 50;
    config
}

fn last_frame(engine: &ChartEngine<NullRenderer>) -> &RenderFrame {
    engine.renderer().last_frame.as_ref().expect("rendered frame")
}

#[test]
fn hover_draws_both_lines_and_both_tags() {
    let mut engine = engine_with(base_config());
    assert!(engine.pointer_move(100.0, 150.0).expect("move"));
    let frame = last_frame(&engine);

    assert_eq!(frame.lines.len(), 2);
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.rects.len(), 1);

    let horizontal = frame.lines[0];
    assert_relative_eq!(horizontal.x1, 0.0);
    assert_relative_eq!(horizontal.x2, 500.0);
    assert_relative_eq!(horizontal.y1, 150.0);

    // Record 160 sits in slot 10; its body centre is 3.75px into the slot.
    let vertical = frame.lines[1];
    assert_relative_eq!(vertical.x1, 103.75);
    assert_relative_eq!(vertical.y1, 0.0);
    assert_relative_eq!(vertical.y2, 400.0);

    let flag = &frame.polygons[0];
    assert_eq!(flag.points.len(), 6);
    assert_eq!(flag.points[0], Point::new(500.0, 150.0));
    assert_relative_eq!(flag.points[2].x, 558.0);
    assert_relative_eq!(flag.border_width, 1.0);

    let time_box = frame.rects[0];
    assert_relative_eq!(time_box.x, 76.75);
    assert_relative_eq!(time_box.y, 400.0);
    assert_relative_eq!(time_box.width, 54.0);
    assert_relative_eq!(time_box.height, 36.0);

    assert_eq!(frame.texts[0].text, "150.00");
    assert_eq!(frame.texts[0].x, 512.0);
    assert_relative_eq!(frame.texts[0].font_size_px, 24.0);
    assert_eq!(frame.texts[1].text, "2019-03-07 12:25");
}

#[test]
fn row_outside_every_pane_keeps_the_line_and_drops_the_value_tag() {
    let mut engine = engine_with(base_config());
    assert!(engine.pointer_move(100.0, 300.0).expect("move onto pane border"));
    let frame = last_frame(&engine);

    assert_eq!(engine.cross_y_axis_label(), None);
    assert_eq!(frame.lines.len(), 2);
    assert!(frame.polygons.is_empty());
    assert_relative_eq!(frame.lines[0].x1, 0.0);
    assert_relative_eq!(frame.lines[0].x2, 500.0);
    assert_eq!(frame.rects.len(), 1);
}

#[test]
fn value_tag_on_the_right_half_moves_to_the_line_start() {
    let config = base_config().with_y_axis(YAxisPosition::Right, YAxisTextPosition::Inside);
    let mut engine = engine_with(config);
    engine.pointer_move(400.0, 350.0).expect("move");
    let frame = last_frame(&engine);

    assert_relative_eq!(frame.lines[0].x1, 60.0);
    assert_relative_eq!(frame.lines[0].x2, 500.0);
    assert_eq!(frame.polygons[0].points[0], Point::new(60.0, 350.0));
    assert_eq!(frame.texts[0].text, "2500");
}

#[test]
fn dashed_crosshair_style_reaches_every_line() {
    let style = CrosshairStyle {
        line_style: LineStrokeStyle::Dashed,
        ..CrosshairStyle::default()
    };
    let mut engine = engine_with(base_config().with_crosshair_style(style));
    engine.pointer_move(100.0, 150.0).expect("move");

    assert!(
        last_frame(&engine)
            .lines
            .iter()
            .all(|line| line.stroke_style == LineStrokeStyle::Dashed)
    );
}

#[test]
fn tooltip_lays_out_entries_left_to_right_at_each_pane_top() {
    let mut engine = engine_with(base_config());
    engine.pointer_move(100.0, 150.0).expect("move");
    let tooltip: Vec<_> = last_frame(&engine).texts[2..].to_vec();

    assert_eq!(tooltip.len(), 8);
    assert_eq!(tooltip[0].text, "MA5: 261.00");
    assert_eq!(tooltip[1].text, "MA10: --");
    assert_relative_eq!(tooltip[0].x, 6.0);
    assert_relative_eq!(tooltip[0].y, 4.0);
    assert_relative_eq!(tooltip[1].x, 54.0);
    assert_relative_eq!(tooltip[3].x, 150.0);

    assert_eq!(tooltip[4].text, "MA5: --");
    assert_eq!(tooltip[7].text, "VOLUME: 1200");
    assert_relative_eq!(tooltip[4].y, 304.0);
    assert_relative_eq!(tooltip[4].x, 6.0);
}

#[test]
fn tooltip_display_rules() {
    let mut always = engine_with(base_config());
    always.pointer_move(100.0, 150.0).expect("move");
    always.pointer_leave(700.0, 150.0).expect("leave");
    let frame = last_frame(&always);
    assert!(frame.lines.is_empty());
    assert_eq!(frame.texts.len(), 8);

    let follow = base_config().with_tooltip_style(TooltipStyle {
        display_rule: IndicatorDisplayRule::FollowCross,
        ..TooltipStyle::default()
    });
    let mut follow = engine_with(follow);
    follow.pointer_move(100.0, 150.0).expect("move");
    assert_eq!(last_frame(&follow).texts.len(), 10);
    follow.pointer_leave(700.0, 150.0).expect("leave");
    assert!(last_frame(&follow).is_empty());

    let never = base_config().with_tooltip_style(TooltipStyle {
        display_rule: IndicatorDisplayRule::Never,
        ..TooltipStyle::default()
    });
    let mut never = engine_with(never);
    never.pointer_move(100.0, 150.0).expect("move");
    assert_eq!(last_frame(&never).texts.len(), 2);
}

#[test]
fn empty_chart_renders_an_empty_frame() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), base_config()).expect("engine");
    assert!(engine.pointer_move(100.0, 150.0).expect("move"));

    assert!(last_frame(&engine).is_empty());
}
