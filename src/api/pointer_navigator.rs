use tracing::trace;

use crate::core::{DataBounds, Point, ViewportGeometry};
use crate::interaction::{CrosshairState, InteractionMode, InteractionState};

/// Window scale applied per wheel notch away from the user (more records).
pub const ZOOM_OUT_FACTOR: f64 = 0.95;
/// Window scale applied per wheel notch toward the user (fewer records).
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Translates pointer and wheel events into [`DataBounds`] mutations.
///
/// Every handler returns `true` when the chart must be redrawn. Ignored
/// events (outside the content area, window at a limit, not enough data)
/// return `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerNavigator {
    state: InteractionState,
}

impl PointerNavigator {
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.state.mode()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Starts a drag inside the content area and hides the cross-hair.
    pub fn pointer_down(
        &mut self,
        point: Point,
        geometry: &impl ViewportGeometry,
        crosshair: &mut CrosshairState,
    ) -> bool {
        if !geometry.contains(point) {
            return false;
        }
        self.state.on_drag_start(point.x);
        crosshair.set(point.y, false);
        true
    }

    /// Ends a drag inside the content area and shows the cross-hair again.
    pub fn pointer_up(
        &mut self,
        point: Point,
        geometry: &impl ViewportGeometry,
        crosshair: &mut CrosshairState,
    ) -> bool {
        if !geometry.contains(point) {
            return false;
        }
        self.state.on_drag_end();
        crosshair.set(point.y, true);
        true
    }

    /// Hides the cross-hair; the interaction mode is kept.
    pub fn pointer_leave(&mut self, point: Point, crosshair: &mut CrosshairState) -> bool {
        crosshair.set(point.y, false);
        true
    }

    pub fn pointer_move(
        &mut self,
        point: Point,
        bounds: &mut DataBounds,
        geometry: &impl ViewportGeometry,
        crosshair: &mut CrosshairState,
    ) -> bool {
        if !geometry.contains(point) {
            crosshair.set(point.y, false);
            return true;
        }

        match self.state.pointer_down_x() {
            Some(pointer_down_x) => self.drag_to(point.x, pointer_down_x, bounds),
            None => {
                bounds.resolve_index_at_pixel(point.x, geometry);
                crosshair.set(point.y, true);
                true
            }
        }
    }

    /// Zooms by a fixed step; only the sign of `wheel_delta` matters.
    ///
    /// Positive deltas zoom out, negative deltas zoom in, zero is ignored.
    pub fn wheel(&mut self, wheel_delta: f64, bounds: &mut DataBounds) -> bool {
        if wheel_delta == 0.0 || !wheel_delta.is_finite() {
            return false;
        }
        let factor = if wheel_delta.signum() > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };
        bounds.zoom(factor)
    }

    fn drag_to(&mut self, x: f64, pointer_down_x: f64, bounds: &mut DataBounds) -> bool {
        let data_space = bounds.data_space();
        let move_dist = x - pointer_down_x;

        let delta = if move_dist > data_space / 2.0 {
            if !bounds.can_pan_older() {
                return false;
            }
            -(pan_steps(move_dist, data_space) as isize)
        } else if move_dist < -data_space / 2.0 {
            if !bounds.can_pan_newer() {
                return false;
            }
            pan_steps(move_dist, data_space) as isize
        } else {
            return false;
        };

        // Re-anchor on every applied step so long drags keep panning past clamps.
        self.state.reanchor_drag(x);
        trace!(move_dist, delta, "drag pan");
        bounds.pan(delta)
    }
}

/// Whole slots covered by `move_dist`, never less than one.
fn pan_steps(move_dist: f64, data_space: f64) -> usize {
    ((move_dist.abs() / data_space).round() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::pan_steps;

    #[test]
    fn pan_steps_rounds_to_nearest_slot() {
        assert_eq!(pan_steps(15.0, 10.0), 2);
        assert_eq!(pan_steps(-14.0, 10.0), 1);
        assert_eq!(pan_steps(10.0, 10.0), 1);
    }

    #[test]
    fn pan_steps_never_returns_zero() {
        assert_eq!(pan_steps(5.5, 20.0), 1);
    }
}
