use crate::core::{Point, Record, ViewportGeometry, format_timestamp_millis};
use crate::render::{
    LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame, Renderer, TextPrimitive,
};

use super::ChartEngine;
use super::crosshair_positioner::{
    TagGeometry, cross_y_axis_label, layout_x_axis_tag, layout_y_axis_tag,
};

impl<R: Renderer> ChartEngine<R> {
    /// Appends both cross-hair lines and their axis tags.
    ///
    /// The horizontal line is drawn across the content area even when the
    /// row falls outside every pane; only the value tag is skipped then.
    pub(super) fn append_crosshair_primitives(&self, frame: &mut RenderFrame, record: &Record) {
        let config = self.config();
        let style = config.crosshair;
        let geometry = self.geometry();
        let crosshair = self.crosshair_state();
        let cross = Point::new(crosshair.x, crosshair.y);
        let font_size_px = style.text_size * config.pixel_ratio;
        let half_label_height = font_size_px / 2.0;
        let line = |x1: f64, y1: f64, x2: f64, y2: f64| {
            LinePrimitive::new(x1, y1, x2, y2, style.line_width, style.line_color)
                .with_stroke_style(style.line_style)
        };
        let tag_for = |label: &str| TagGeometry {
            label_width: self.text_measurer().text_width_px(label, font_size_px),
            half_label_height,
            margin: style.tag_margin_px,
            border_width: style.tag_border_width,
        };

        match cross_y_axis_label(self.panes(), cross.y) {
            Some(label) => {
                let layout = layout_y_axis_tag(
                    geometry,
                    cross,
                    tag_for(&label),
                    config.y_axis_position,
                    config.y_axis_text_position,
                );
                frame.lines.push(line(
                    layout.line_start_x,
                    layout.y,
                    layout.line_end_x,
                    layout.y,
                ));
                frame.polygons.push(
                    PolygonPrimitive::new(layout.polygon, style.tag_fill_color)
                        .with_border(style.tag_border_width, style.tag_border_color),
                );
                frame.texts.push(TextPrimitive::new(
                    label,
                    layout.text_origin.x,
                    layout.text_origin.y,
                    font_size_px,
                    style.text_color,
                ));
            }
            None => frame.lines.push(line(
                geometry.content_left(),
                cross.y,
                geometry.content_right(),
                cross.y,
            )),
        }

        let time_label = format_timestamp_millis(record.timestamp_millis);
        let layout = layout_x_axis_tag(geometry, cross.x, tag_for(&time_label));
        frame
            .lines
            .push(line(layout.x, layout.line_top, layout.x, layout.line_bottom));
        frame.rects.push(
            RectPrimitive::new(
                layout.box_left,
                layout.box_top,
                layout.box_width,
                layout.box_height,
                style.tag_fill_color,
            )
            .with_border(style.tag_border_width, style.tag_border_color),
        );
        frame.texts.push(TextPrimitive::new(
            time_label,
            layout.text_origin.x,
            layout.text_origin.y,
            font_size_px,
            style.text_color,
        ));
    }
}
