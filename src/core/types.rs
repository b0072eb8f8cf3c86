use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full drawing-surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Read-only query over the rectangle dedicated to plotted data.
pub trait ViewportGeometry {
    fn content_left(&self) -> f64;
    fn content_top(&self) -> f64;
    fn content_right(&self) -> f64;
    fn content_bottom(&self) -> f64;

    fn content_width(&self) -> f64 {
        (self.content_right() - self.content_left()).max(0.0)
    }

    fn content_height(&self) -> f64 {
        (self.content_bottom() - self.content_top()).max(0.0)
    }

    fn content_center(&self) -> Point {
        Point::new(
            (self.content_left() + self.content_right()) / 2.0,
            (self.content_top() + self.content_bottom()) / 2.0,
        )
    }

    /// Inclusive hit test used to accept or ignore pointer events.
    fn contains(&self, point: Point) -> bool {
        !(point.x < self.content_left()
            || point.x > self.content_right()
            || point.y < self.content_top()
            || point.y > self.content_bottom())
    }
}

/// Margins reserved around the content area for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentInsets {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("left", self.left),
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "content inset `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Concrete content rectangle derived from a viewport and its insets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentArea {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl ContentArea {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        if !left.is_finite() || !top.is_finite() || !right.is_finite() || !bottom.is_finite() {
            return Err(ChartError::InvalidData(
                "content area edges must be finite".to_owned(),
            ));
        }
        if right <= left || bottom <= top {
            return Err(ChartError::InvalidData(
                "content area must have a positive width and height".to_owned(),
            ));
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn from_viewport(viewport: Viewport, insets: ContentInsets) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        insets.validate()?;
        Self::new(
            insets.left,
            insets.top,
            f64::from(viewport.width) - insets.right,
            f64::from(viewport.height) - insets.bottom,
        )
    }
}

impl ViewportGeometry for ContentArea {
    fn content_left(&self) -> f64 {
        self.left
    }

    fn content_top(&self) -> f64 {
        self.top
    }

    fn content_right(&self) -> f64 {
        self.right
    }

    fn content_bottom(&self) -> f64 {
        self.bottom
    }
}

/// Maps a client-space pointer position onto the canvas pixel grid.
///
/// Client coordinates are rounded before scaling so one logical pixel always
/// lands on the same device pixel.
#[must_use]
pub fn canvas_point(client: Point, canvas_origin: Point, pixel_ratio: f64) -> Point {
    let x = (client.x - canvas_origin.x).round();
    let y = (client.y - canvas_origin.y).round();
    Point::new(x * pixel_ratio, y * pixel_ratio)
}
