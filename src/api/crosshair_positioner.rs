//! Cross-hair tag placement.
//!
//! Everything here is a pure function of the pane layout, the content
//! rectangle and the cross-hair point. The value-axis tag hangs off one end of
//! the horizontal line and may extend into the axis margin; the time-axis tag
//! is always kept within the content columns.

use crate::core::{PaneDescriptor, Point, ViewportGeometry, format_fixed};

use super::{YAxisPosition, YAxisTextPosition};

/// End of the horizontal cross-hair line that carries the value tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSide {
    Left,
    Right,
}

impl TagSide {
    /// Tag goes on the side away from the inspected point.
    #[must_use]
    pub fn for_cross_x(cross_x: f64, geometry: &impl ViewportGeometry) -> Self {
        if cross_x > geometry.content_center().x {
            Self::Left
        } else {
            Self::Right
        }
    }

    fn outward(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Measured label plus the spacing shared by every tag shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagGeometry {
    pub label_width: f64,
    pub half_label_height: f64,
    pub margin: f64,
    pub border_width: f64,
}

impl TagGeometry {
    /// Horizontal room the flag needs next to the end of the line.
    #[must_use]
    pub fn footprint_width(self) -> f64 {
        self.border_width * 2.0 + self.margin * 3.0 + self.label_width
    }

    /// Flag outline attached to `anchor`, closed back at `anchor`.
    ///
    /// Vertex order: anchor, notch top, far top, far bottom, notch bottom,
    /// anchor.
    #[must_use]
    pub fn flag_polygon(self, anchor: Point, side: TagSide) -> [Point; 6] {
        let outward = side.outward();
        let notch_x = anchor.x + outward * self.margin;
        let far_x = anchor.x + outward * (self.margin * 3.0 + self.label_width);
        let top = anchor.y - self.half_label_height - self.margin;
        let bottom = anchor.y + self.half_label_height + self.margin;
        [
            anchor,
            Point::new(notch_x, top),
            Point::new(far_x, top),
            Point::new(far_x, bottom),
            Point::new(notch_x, bottom),
            anchor,
        ]
    }

    /// Top-left corner of the label text inside [`Self::flag_polygon`].
    #[must_use]
    pub fn flag_text_origin(self, anchor: Point, side: TagSide) -> Point {
        let x = match side {
            TagSide::Right => anchor.x + self.margin * 2.0,
            TagSide::Left => anchor.x - self.margin * 2.0 - self.label_width,
        };
        Point::new(x, anchor.y - self.half_label_height)
    }

    /// Box width for an axis-aligned tag around the same label.
    #[must_use]
    pub fn box_width(self) -> f64 {
        self.label_width + (self.margin + self.border_width) * 2.0
    }

    #[must_use]
    pub fn box_height(self) -> f64 {
        (self.half_label_height + self.margin) * 2.0
    }
}

/// First pane (top to bottom) strictly containing `y`.
#[must_use]
pub fn resolve_pane(panes: &[PaneDescriptor], y: f64) -> Option<&PaneDescriptor> {
    panes.iter().find(|pane| pane.contains_y(y))
}

/// Value under `y` formatted with the precision of the pane it falls in.
#[must_use]
pub fn cross_y_axis_label(panes: &[PaneDescriptor], y: f64) -> Option<String> {
    resolve_pane(panes, y).map(|pane| format_fixed(pane.value_at_y(y), pane.value_precision))
}

/// Horizontal line extent and value flag for one cross-hair position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisTagLayout {
    pub side: TagSide,
    pub line_start_x: f64,
    pub line_end_x: f64,
    pub y: f64,
    pub polygon: [Point; 6],
    pub text_origin: Point,
}

/// Lays out the value flag for a cross-hair at `cross`.
///
/// The flag is not clamped to the canvas: with the axis text outside the
/// content rectangle it intentionally extends into the axis margin.
#[must_use]
pub fn layout_y_axis_tag(
    geometry: &impl ViewportGeometry,
    cross: Point,
    tag: TagGeometry,
    axis_position: YAxisPosition,
    text_position: YAxisTextPosition,
) -> YAxisTagLayout {
    let side = TagSide::for_cross_x(cross.x, geometry);
    let text_inside = text_position == YAxisTextPosition::Inside;
    let mut line_start_x = geometry.content_left();
    let mut line_end_x = geometry.content_right();

    match (axis_position, side) {
        (YAxisPosition::Left, TagSide::Left) => {
            if text_inside {
                line_start_x += tag.footprint_width();
            }
        }
        (YAxisPosition::Left, TagSide::Right) => line_end_x -= tag.footprint_width(),
        (YAxisPosition::Right, TagSide::Left) => line_start_x += tag.footprint_width(),
        (YAxisPosition::Right, TagSide::Right) => {
            if text_inside {
                line_end_x -= tag.footprint_width();
            }
        }
    }

    let anchor_x = match side {
        TagSide::Left => line_start_x,
        TagSide::Right => line_end_x,
    };
    let anchor = Point::new(anchor_x, cross.y);
    YAxisTagLayout {
        side,
        line_start_x,
        line_end_x,
        y: cross.y,
        polygon: tag.flag_polygon(anchor, side),
        text_origin: tag.flag_text_origin(anchor, side),
    }
}

/// Vertical line extent and time box for one cross-hair position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XAxisTagLayout {
    pub x: f64,
    pub line_top: f64,
    pub line_bottom: f64,
    pub box_left: f64,
    pub box_top: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub text_origin: Point,
}

impl XAxisTagLayout {
    #[must_use]
    pub fn box_right(self) -> f64 {
        self.box_left + self.box_width
    }
}

/// Centres the time label on `cross_x`, pinned inside the content columns.
///
/// The label is clamped first and the box is built around it. The box keeps
/// its full padding inside the content columns whenever it fits there; when
/// only the label fits, the padding is shared evenly on both sides. A label
/// wider than the content area starts at `content_left`.
#[must_use]
pub fn layout_x_axis_tag(
    geometry: &impl ViewportGeometry,
    cross_x: f64,
    tag: TagGeometry,
) -> XAxisTagLayout {
    let padding = tag.margin + tag.border_width;
    let content_left = geometry.content_left();
    let content_right = geometry.content_right();
    let spare = geometry.content_width() - tag.label_width;

    let text_x = if spare <= 0.0 {
        content_left
    } else {
        let inset = padding.min(spare / 2.0);
        let lowest = content_left + inset;
        let highest = content_right - inset - tag.label_width;
        let centred = cross_x - tag.label_width / 2.0;
        if centred < lowest {
            lowest
        } else if centred > highest {
            highest
        } else {
            centred
        }
    };

    let box_top = geometry.content_bottom();
    XAxisTagLayout {
        x: cross_x,
        line_top: geometry.content_top(),
        line_bottom: geometry.content_bottom(),
        box_left: text_x - padding,
        box_top,
        box_width: tag.box_width(),
        box_height: tag.box_height(),
        text_origin: Point::new(text_x, box_top + tag.margin),
    }
}
