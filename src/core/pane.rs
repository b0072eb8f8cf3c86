use serde::{Deserialize, Serialize};

use crate::core::StudyKind;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaneId(u32);

impl PaneId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One vertically stacked sub-chart sharing the time axis.
///
/// `top`/`height` are canvas pixels; the axis bounds are the value range
/// currently mapped onto that height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneDescriptor {
    pub id: PaneId,
    pub top: f64,
    pub height: f64,
    pub axis_minimum: f64,
    pub axis_maximum: f64,
    pub value_precision: u8,
    #[serde(default)]
    pub study: Option<StudyKind>,
}

impl PaneDescriptor {
    pub fn new(
        id: PaneId,
        top: f64,
        height: f64,
        axis_minimum: f64,
        axis_maximum: f64,
        value_precision: u8,
    ) -> ChartResult<Self> {
        let pane = Self {
            id,
            top,
            height,
            axis_minimum,
            axis_maximum,
            value_precision,
            study: None,
        };
        pane.validate()?;
        Ok(pane)
    }

    #[must_use]
    pub fn with_study(mut self, study: StudyKind) -> Self {
        self.study = Some(study);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.top.is_finite() || !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "pane {} must have a finite top and a height > 0",
                self.id.raw()
            )));
        }
        if !self.axis_minimum.is_finite() || !self.axis_maximum.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "pane {} axis bounds must be finite",
                self.id.raw()
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Strict containment: a point on the pane border belongs to no pane.
    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        y > self.top && y < self.bottom()
    }

    /// Linear interpolation of the axis range at `y` (1 at the top, 0 at the bottom).
    #[must_use]
    pub fn value_at_y(self, y: f64) -> f64 {
        let ratio = 1.0 - (y - self.top) / self.height;
        ratio * (self.axis_maximum - self.axis_minimum) + self.axis_minimum
    }
}
