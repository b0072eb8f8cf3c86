use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Record, ViewportGeometry};
use crate::error::{ChartError, ChartResult};

/// Window limits and slot layout used to build a [`DataBounds`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataBoundsConfig {
    /// Number of records shown before the first zoom.
    pub initial_range: usize,
    pub min_range: usize,
    pub max_range: usize,
    /// Fraction of each slot left empty between candles.
    pub data_margin_space_rate: f64,
}

impl Default for DataBoundsConfig {
    fn default() -> Self {
        Self {
            initial_range: 120,
            min_range: 20,
            max_range: 200,
            data_margin_space_rate: 0.25,
        }
    }
}

impl DataBoundsConfig {
    pub fn validate(self) -> ChartResult<()> {
        if self.min_range == 0 {
            return Err(ChartError::InvalidConfig(
                "min_range must be >= 1".to_owned(),
            ));
        }
        if self.min_range > self.max_range {
            return Err(ChartError::InvalidConfig(format!(
                "min_range ({}) must be <= max_range ({})",
                self.min_range, self.max_range
            )));
        }
        if !(self.min_range..=self.max_range).contains(&self.initial_range) {
            return Err(ChartError::InvalidConfig(format!(
                "initial_range ({}) must be within [{}, {}]",
                self.initial_range, self.min_range, self.max_range
            )));
        }
        if !self.data_margin_space_rate.is_finite()
            || !(0.0..1.0).contains(&self.data_margin_space_rate)
        {
            return Err(ChartError::InvalidConfig(
                "data_margin_space_rate must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Navigation state over the record sequence.
///
/// Invariants after every mutation:
/// - `min_range <= range <= max_range`
/// - `min + range <= len` whenever `len >= range`
/// - `min == 0` whenever `len < range` (the window is not scrollable)
/// - `data_space == content_width / range`
#[derive(Debug, Clone, PartialEq)]
pub struct DataBounds {
    data_list: Vec<Record>,
    min: usize,
    range: usize,
    min_range: usize,
    max_range: usize,
    data_space: f64,
    data_margin_space_rate: f64,
    current_data_pos: usize,
    content_width: f64,
}

impl DataBounds {
    pub fn new(config: DataBoundsConfig, content_width: f64) -> ChartResult<Self> {
        config.validate()?;
        validate_content_width(content_width)?;
        Ok(Self {
            data_list: Vec::new(),
            min: 0,
            range: config.initial_range,
            min_range: config.min_range,
            max_range: config.max_range,
            data_space: content_width / config.initial_range as f64,
            data_margin_space_rate: config.data_margin_space_rate,
            current_data_pos: 0,
            content_width,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.data_list
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data_list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_list.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    #[must_use]
    pub fn range(&self) -> usize {
        self.range
    }

    #[must_use]
    pub fn min_range(&self) -> usize {
        self.min_range
    }

    #[must_use]
    pub fn max_range(&self) -> usize {
        self.max_range
    }

    /// Pixel width of one time slot at the current zoom level.
    #[must_use]
    pub fn data_space(&self) -> f64 {
        self.data_space
    }

    #[must_use]
    pub fn data_margin_space_rate(&self) -> f64 {
        self.data_margin_space_rate
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Index of the record under the cross-hair.
    #[must_use]
    pub fn current_data_pos(&self) -> usize {
        self.current_data_pos
    }

    #[must_use]
    pub fn current_record(&self) -> Option<&Record> {
        self.data_list.get(self.current_data_pos)
    }

    /// Records inside the visible window, oldest first.
    #[must_use]
    pub fn visible_records(&self) -> &[Record] {
        let start = self.min.min(self.data_list.len());
        let end = (self.min + self.range).min(self.data_list.len());
        &self.data_list[start..end]
    }

    /// `true` when the window is full and older records exist to its left.
    #[must_use]
    pub fn can_pan_older(&self) -> bool {
        self.is_scrollable() && self.min > 0
    }

    /// `true` when the window is full and newer records exist to its right.
    #[must_use]
    pub fn can_pan_newer(&self) -> bool {
        self.is_scrollable() && self.min + self.range < self.data_list.len()
    }

    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.data_list.len() >= self.range
    }

    /// Replaces the whole record sequence and shows its newest records.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.data_list = records;
        self.scroll_to_latest();
        debug!(
            count = self.data_list.len(),
            min = self.min,
            range = self.range,
            "set records"
        );
    }

    /// Appends one record.
    ///
    /// A window pinned to the newest record keeps following the data.
    pub fn append_record(&mut self, record: Record) {
        let follows_latest =
            self.is_scrollable() && self.min + self.range == self.data_list.len();
        self.data_list.push(record);
        if follows_latest {
            self.min += 1;
        }
        self.clamp_current_data_pos();
        trace!(count = self.data_list.len(), min = self.min, "append record");
        self.debug_assert_invariants();
    }

    /// Moves the window so it ends at the newest record.
    pub fn scroll_to_latest(&mut self) {
        self.min = self.data_list.len().saturating_sub(self.range);
        self.clamp_current_data_pos();
        self.debug_assert_invariants();
    }

    pub fn set_content_width(&mut self, content_width: f64) -> ChartResult<()> {
        validate_content_width(content_width)?;
        self.content_width = content_width;
        self.recompute_data_space();
        debug!(content_width, data_space = self.data_space, "resize content");
        Ok(())
    }

    /// Resolves the record index under pixel `x` and tracks it as the
    /// cross-hair position.
    ///
    /// Returns `None` when there is no data (or `x` is not finite).
    pub fn resolve_index_at_pixel(
        &mut self,
        x: f64,
        geometry: &impl ViewportGeometry,
    ) -> Option<usize> {
        if self.data_list.is_empty() || !x.is_finite() {
            return None;
        }
        let slot_offset = ((x - geometry.content_left()) / self.data_space).floor();
        let last_index = (self.data_list.len() - 1) as f64;
        let index = (self.min as f64 + slot_offset).clamp(0.0, last_index) as usize;
        self.current_data_pos = index;
        Some(index)
    }

    /// Horizontal centre of the candle body drawn in slot `index`.
    #[must_use]
    pub fn slot_center_x(&self, index: usize, geometry: &impl ViewportGeometry) -> f64 {
        let slot = index as f64 - self.min as f64;
        geometry.content_left()
            + self.data_space * slot
            + self.data_space * (1.0 - self.data_margin_space_rate) / 2.0
    }

    /// Shifts the window by `delta` records (negative = toward older data).
    ///
    /// Returns `false` when the window is already at the boundary or is not
    /// scrollable.
    pub fn pan(&mut self, delta: isize) -> bool {
        if !self.is_scrollable() {
            trace!(
                len = self.data_list.len(),
                range = self.range,
                "pan ignored: window not scrollable"
            );
            return false;
        }
        let max_min = self.data_list.len() - self.range;
        let target = self.min.saturating_add_signed(delta).min(max_min);
        if target == self.min {
            trace!(min = self.min, delta, "pan ignored: at boundary");
            return false;
        }
        self.min = target;
        self.clamp_current_data_pos();
        trace!(min = self.min, delta, "pan");
        self.debug_assert_invariants();
        true
    }

    /// Scales the visible record count by `1 / factor`, keeping the right
    /// edge of the window in place.
    ///
    /// `factor < 1` zooms out (more records), `factor > 1` zooms in. Returns
    /// `false` when the matching range limit is already reached or the
    /// rounded range does not change.
    pub fn zoom(&mut self, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 || factor == 1.0 {
            return false;
        }
        let zooming_out = factor < 1.0;
        if (zooming_out && self.range >= self.max_range)
            || (!zooming_out && self.range <= self.min_range)
        {
            trace!(range = self.range, factor, "zoom ignored: limit reached");
            return false;
        }

        let old_min = self.min as i64;
        let old_range = self.range as i64;
        let scaled = (self.range as f64 / factor).round();
        let new_range = (scaled.max(0.0) as usize).clamp(self.min_range, self.max_range);
        if new_range == self.range {
            return false;
        }

        let len = self.data_list.len() as i64;
        let anchored_min = old_min + old_range - new_range as i64;
        let new_min = if anchored_min + new_range as i64 > len {
            0
        } else {
            anchored_min.max(0)
        };

        self.min = new_min as usize;
        self.range = new_range;
        self.recompute_data_space();
        self.clamp_current_data_pos();
        trace!(min = self.min, range = self.range, factor, "zoom");
        self.debug_assert_invariants();
        true
    }

    fn recompute_data_space(&mut self) {
        self.data_space = self.content_width / self.range as f64;
    }

    fn clamp_current_data_pos(&mut self) {
        let visible = self.visible_records().len();
        if visible == 0 {
            self.current_data_pos = 0;
            return;
        }
        self.current_data_pos = self
            .current_data_pos
            .clamp(self.min, self.min + visible - 1);
    }

    fn debug_assert_invariants(&self) {
        debug_assert!(
            self.min_range <= self.range && self.range <= self.max_range,
            "range {} escaped [{}, {}]",
            self.range,
            self.min_range,
            self.max_range
        );
        debug_assert!(
            if self.data_list.len() >= self.range {
                self.min + self.range <= self.data_list.len()
            } else {
                self.min == 0
            },
            "inconsistent window: min={}, range={}, len={}",
            self.min,
            self.range,
            self.data_list.len()
        );
        debug_assert!(self.data_space.is_finite() && self.data_space > 0.0);
    }
}

fn validate_content_width(content_width: f64) -> ChartResult<()> {
    if !content_width.is_finite() || content_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "content width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
