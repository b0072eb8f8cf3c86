use approx::assert_relative_eq;
use kline_chart::api::crosshair_positioner::{
    TagGeometry, TagSide, cross_y_axis_label, layout_x_axis_tag, layout_y_axis_tag,
    resolve_pane,
};
use kline_chart::api::{YAxisPosition, YAxisTextPosition};
use kline_chart::core::{ContentArea, PaneDescriptor, PaneId, Point};
use proptest::prelude::*;

const TAG: TagGeometry = TagGeometry {
    label_width: 40.0,
    half_label_height: 12.0,
    margin: 6.0,
    border_width: 1.0,
};

fn geometry() -> ContentArea {
    ContentArea::new(0.0, 0.0, 500.0, 400.0).expect("geometry")
}

fn panes() -> Vec<PaneDescriptor> {
    vec![
        PaneDescriptor::new(PaneId::new(1), 0.0, 300.0, 100.0, 200.0, 2).expect("main pane"),
        PaneDescriptor::new(PaneId::new(2), 300.0, 100.0, 0.0, 5_000.0, 0).expect("volume pane"),
    ]
}

#[test]
fn tag_side_is_opposite_to_the_pointer_half() {
    let geometry = geometry();
    assert_eq!(TagSide::for_cross_x(100.0, &geometry), TagSide::Right);
    assert_eq!(TagSide::for_cross_x(250.0, &geometry), TagSide::Right);
    assert_eq!(TagSide::for_cross_x(251.0, &geometry), TagSide::Left);
}

#[test]
fn footprint_counts_borders_and_three_margins() {
    assert_relative_eq!(TAG.footprint_width(), 60.0);
    assert_relative_eq!(TAG.box_width(), 54.0);
    assert_relative_eq!(TAG.box_height(), 36.0);
}

#[test]
fn y_tag_line_stops_follow_axis_and_text_position() {
    let geometry = geometry();
    let left_half = Point::new(100.0, 150.0);
    let right_half = Point::new(400.0, 150.0);
    let cases = [
        (YAxisPosition::Right, YAxisTextPosition::Outside, left_half, 0.0, 500.0),
        (YAxisPosition::Right, YAxisTextPosition::Inside, left_half, 0.0, 440.0),
        (YAxisPosition::Right, YAxisTextPosition::Outside, right_half, 60.0, 500.0),
        (YAxisPosition::Right, YAxisTextPosition::Inside, right_half, 60.0, 500.0),
        (YAxisPosition::Left, YAxisTextPosition::Outside, right_half, 0.0, 500.0),
        (YAxisPosition::Left, YAxisTextPosition::Inside, right_half, 60.0, 500.0),
        (YAxisPosition::Left, YAxisTextPosition::Outside, left_half, 0.0, 440.0),
        (YAxisPosition::Left, YAxisTextPosition::Inside, left_half, 0.0, 440.0),
    ];

    for (axis, text, cross, start, end) in cases {
        let layout = layout_y_axis_tag(&geometry, cross, TAG, axis, text);
        assert_relative_eq!(layout.line_start_x, start);
        assert_relative_eq!(layout.line_end_x, end);
        assert_relative_eq!(layout.y, 150.0);
    }
}

#[test]
fn y_tag_flag_hangs_off_the_line_end() {
    let layout = layout_y_axis_tag(
        &geometry(),
        Point::new(100.0, 150.0),
        TAG,
        YAxisPosition::Right,
        YAxisTextPosition::Outside,
    );

    assert_eq!(layout.side, TagSide::Right);
    assert_eq!(layout.polygon[0], Point::new(500.0, 150.0));
    assert_eq!(layout.polygon[5], layout.polygon[0]);
    // Outside text extends into the axis margin instead of being clamped.
    assert_relative_eq!(layout.polygon[2].x, 558.0);
    assert_eq!(layout.text_origin, Point::new(512.0, 138.0));
}

#[test]
fn y_tag_on_the_left_mirrors_the_flag() {
    let layout = layout_y_axis_tag(
        &geometry(),
        Point::new(400.0, 150.0),
        TAG,
        YAxisPosition::Right,
        YAxisTextPosition::Outside,
    );

    assert_eq!(layout.side, TagSide::Left);
    assert_eq!(layout.polygon[0], Point::new(60.0, 150.0));
    assert_relative_eq!(layout.polygon[1].x, 54.0);
    assert_relative_eq!(layout.polygon[2].x, 2.0);
    assert_eq!(layout.text_origin, Point::new(8.0, 138.0));
}

#[test]
fn x_tag_is_centred_on_the_crosshair() {
    let layout = layout_x_axis_tag(&geometry(), 250.0, TAG);

    assert_relative_eq!(layout.box_left, 223.0);
    assert_relative_eq!(layout.box_top, 400.0);
    assert_relative_eq!(layout.line_top, 0.0);
    assert_relative_eq!(layout.line_bottom, 400.0);
    assert_eq!(layout.text_origin, Point::new(230.0, 406.0));
}

#[test]
fn x_tag_is_pinned_to_the_content_edges() {
    let near_left = layout_x_axis_tag(&geometry(), 10.0, TAG);
    assert_relative_eq!(near_left.box_left, 0.0);
    assert_relative_eq!(near_left.x, 10.0);

    let near_right = layout_x_axis_tag(&geometry(), 490.0, TAG);
    assert_relative_eq!(near_right.box_left, 446.0);
    assert_relative_eq!(near_right.box_right(), 500.0);
}

#[test]
fn x_tag_label_just_under_the_content_width_stays_inside() {
    let narrow = ContentArea::new(0.0, 0.0, 100.0, 80.0).expect("geometry");
    let tag = TagGeometry {
        label_width: 95.0,
        ..TAG
    };
    let layout = layout_x_axis_tag(&narrow, 50.0, tag);

    assert_relative_eq!(layout.text_origin.x, 2.5);
    assert_relative_eq!(layout.text_origin.x + tag.label_width, 97.5);
    // The box cannot fit; its overflow is split evenly on both sides.
    assert_relative_eq!(layout.box_left, -4.5);
    assert_relative_eq!(layout.box_right(), 104.5);
}

#[test]
fn x_tag_box_that_exactly_fits_fills_the_content_width() {
    let narrow = ContentArea::new(0.0, 0.0, 100.0, 80.0).expect("geometry");
    let tag = TagGeometry {
        label_width: 86.0,
        ..TAG
    };

    for cross_x in [0.0, 50.0, 100.0] {
        let layout = layout_x_axis_tag(&narrow, cross_x, tag);
        assert_relative_eq!(layout.box_left, 0.0);
        assert_relative_eq!(layout.box_right(), 100.0);
        assert_relative_eq!(layout.text_origin.x, 7.0);
    }
}

#[test]
fn x_tag_label_wider_than_the_content_starts_at_the_left_edge() {
    let narrow = ContentArea::new(20.0, 0.0, 120.0, 80.0).expect("geometry");
    let tag = TagGeometry {
        label_width: 130.0,
        ..TAG
    };
    let layout = layout_x_axis_tag(&narrow, 90.0, tag);

    assert_relative_eq!(layout.text_origin.x, 20.0);
    assert_relative_eq!(layout.box_left, 13.0);
}

#[test]
fn pane_resolution_is_strict_at_borders() {
    let panes = panes();

    assert_eq!(resolve_pane(&panes, 150.0).map(|p| p.id), Some(PaneId::new(1)));
    assert_eq!(resolve_pane(&panes, 350.0).map(|p| p.id), Some(PaneId::new(2)));
    assert!(resolve_pane(&panes, 0.0).is_none());
    assert!(resolve_pane(&panes, 300.0).is_none());
    assert!(resolve_pane(&panes, 400.0).is_none());
    assert!(resolve_pane(&panes, -5.0).is_none());
}

#[test]
fn overlapping_panes_resolve_to_the_first_match() {
    let panes = vec![
        PaneDescriptor::new(PaneId::new(7), 0.0, 200.0, 0.0, 1.0, 2).expect("pane"),
        PaneDescriptor::new(PaneId::new(8), 100.0, 200.0, 0.0, 1.0, 2).expect("pane"),
    ];

    assert_eq!(resolve_pane(&panes, 150.0).map(|p| p.id), Some(PaneId::new(7)));
}

#[test]
fn value_label_interpolates_the_pane_axis_with_its_precision() {
    let panes = panes();

    assert_eq!(cross_y_axis_label(&panes, 150.0).as_deref(), Some("150.00"));
    assert_eq!(cross_y_axis_label(&panes, 75.0).as_deref(), Some("175.00"));
    assert_eq!(cross_y_axis_label(&panes, 350.0).as_deref(), Some("2500"));
    assert_eq!(cross_y_axis_label(&panes, 300.0), None);
}

proptest! {
    #[test]
    fn x_tag_label_never_leaves_the_content_columns(
        cross_x in 0.0f64..=500.0,
        label_width in 1.0f64..500.0,
        margin in 0.0f64..20.0,
        border_width in 0.0f64..4.0
    ) {
        let tag = TagGeometry {
            label_width,
            half_label_height: 12.0,
            margin,
            border_width,
        };
        let layout = layout_x_axis_tag(&geometry(), cross_x, tag);

        prop_assert!(layout.text_origin.x >= -1e-9);
        prop_assert!(layout.text_origin.x + label_width <= 500.0 + 1e-9);
        if tag.box_width() <= 500.0 {
            prop_assert!(layout.box_left >= -1e-9);
            prop_assert!(layout.box_right() <= 500.0 + 1e-9);
        }
        prop_assert!((layout.x - cross_x).abs() <= f64::EPSILON);
    }

    #[test]
    fn y_tag_line_always_spans_a_positive_width(
        cross_x in 0.0f64..=500.0,
        cross_y in 0.0f64..=400.0,
        label_width in 1.0f64..120.0,
        inside in any::<bool>(),
        left_axis in any::<bool>()
    ) {
        let tag = TagGeometry { label_width, ..TAG };
        let axis = if left_axis { YAxisPosition::Left } else { YAxisPosition::Right };
        let text = if inside { YAxisTextPosition::Inside } else { YAxisTextPosition::Outside };
        let layout = layout_y_axis_tag(&geometry(), Point::new(cross_x, cross_y), tag, axis, text);

        prop_assert!(layout.line_start_x < layout.line_end_x);
        prop_assert_eq!(layout.polygon[0], layout.polygon[5]);
        prop_assert!((layout.polygon[0].y - cross_y).abs() <= f64::EPSILON);
    }
}
