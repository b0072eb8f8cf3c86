use tracing::debug;

use crate::core::{
    ContentArea, DataBounds, PaneDescriptor, Point, Record, StudyRegistry, Viewport,
    ViewportGeometry,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{CrosshairState, InteractionMode};
use crate::render::{EstimatedTextMeasurer, RenderFrame, Renderer, TextMeasurer};

use super::{ChartEngineConfig, PointerNavigator, crosshair_positioner};

/// One interactive chart instance.
///
/// The engine exclusively owns its navigation state. Pointer handlers
/// mutate it synchronously and, when the event changed something visible,
/// render a new frame before returning `Ok(true)`.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartEngineConfig,
    geometry: ContentArea,
    data_bounds: DataBounds,
    navigator: PointerNavigator,
    crosshair: CrosshairState,
    panes: Vec<PaneDescriptor>,
    studies: StudyRegistry,
    text_measurer: Box<dyn TextMeasurer>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        let geometry = ContentArea::from_viewport(config.viewport, config.content_insets)?;
        let data_bounds = DataBounds::new(config.data_bounds, geometry.content_width())?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            range = data_bounds.range(),
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            config,
            geometry,
            data_bounds,
            navigator: PointerNavigator::default(),
            crosshair: CrosshairState::default(),
            panes: Vec::new(),
            studies: StudyRegistry::default(),
            text_measurer: Box::new(EstimatedTextMeasurer),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &ContentArea {
        &self.geometry
    }

    #[must_use]
    pub fn data_bounds(&self) -> &DataBounds {
        &self.data_bounds
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.navigator.mode()
    }

    #[must_use]
    pub fn crosshair_state(&self) -> CrosshairState {
        let mut crosshair = self.crosshair;
        crosshair.x = self.crosshair_x();
        crosshair
    }

    #[must_use]
    pub fn panes(&self) -> &[PaneDescriptor] {
        &self.panes
    }

    #[must_use]
    pub fn studies(&self) -> &StudyRegistry {
        &self.studies
    }

    pub fn studies_mut(&mut self) -> &mut StudyRegistry {
        &mut self.studies
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn set_text_measurer(&mut self, measurer: impl TextMeasurer + 'static) {
        self.text_measurer = Box::new(measurer);
    }

    pub(super) fn text_measurer(&self) -> &dyn TextMeasurer {
        self.text_measurer.as_ref()
    }

    /// Replaces the record sequence; the window moves to the newest records.
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.data_bounds.set_records(records);
    }

    pub fn append_record(&mut self, record: Record) {
        self.data_bounds.append_record(record);
    }

    /// Replaces the stacked panes; they are kept ordered top to bottom.
    pub fn set_panes(&mut self, mut panes: Vec<PaneDescriptor>) -> ChartResult<()> {
        for pane in &panes {
            pane.validate()?;
        }
        panes.sort_by(|a, b| a.top.total_cmp(&b.top));
        for pane in &panes {
            if let Some(study) = pane.study {
                if self.studies.get(study).is_none() {
                    return Err(ChartError::InvalidData(format!(
                        "pane {} uses unregistered study {study:?}",
                        pane.id.raw()
                    )));
                }
            }
        }
        debug!(count = panes.len(), "set panes");
        self.panes = panes;
        Ok(())
    }

    /// Resizes the drawing surface; `data_space` follows the new content width.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let geometry = ContentArea::from_viewport(viewport, self.config.content_insets)?;
        self.data_bounds
            .set_content_width(geometry.content_width())?;
        self.geometry = geometry;
        self.config.viewport = viewport;
        Ok(())
    }

    /// Sets the cross-hair row and display flag without redrawing.
    pub fn set_crosshair(&mut self, y: f64, visible: bool) {
        self.crosshair.set(y, visible);
    }

    /// Value label for the current cross-hair row, if it falls inside a pane.
    #[must_use]
    pub fn cross_y_axis_label(&self) -> Option<String> {
        crosshair_positioner::cross_y_axis_label(&self.panes, self.crosshair.y)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let redraw =
            self.navigator
                .pointer_down(Point::new(x, y), &self.geometry, &mut self.crosshair);
        self.finish_event(redraw)
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let redraw =
            self.navigator
                .pointer_up(Point::new(x, y), &self.geometry, &mut self.crosshair);
        self.finish_event(redraw)
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let redraw = self.navigator.pointer_move(
            Point::new(x, y),
            &mut self.data_bounds,
            &self.geometry,
            &mut self.crosshair,
        );
        self.finish_event(redraw)
    }

    pub fn pointer_leave(&mut self, x: f64, y: f64) -> ChartResult<bool> {
        let redraw = self
            .navigator
            .pointer_leave(Point::new(x, y), &mut self.crosshair);
        self.finish_event(redraw)
    }

    /// Zooms one fixed step; see [`PointerNavigator::wheel`].
    pub fn wheel(&mut self, wheel_delta: f64) -> ChartResult<bool> {
        let redraw = self.navigator.wheel(wheel_delta, &mut self.data_bounds);
        self.finish_event(redraw)
    }

    /// Builds the frame for the current state and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.config.viewport);
        if let Some(record) = self.data_bounds.current_record() {
            if self.crosshair.visible {
                self.append_crosshair_primitives(&mut frame, record);
            }
            self.append_indicator_tooltip_primitives(&mut frame, record);
        }
        frame
    }

    /// Canvas x of the record tracked by the cross-hair.
    pub(super) fn crosshair_x(&self) -> f64 {
        self.data_bounds
            .slot_center_x(self.data_bounds.current_data_pos(), &self.geometry)
    }

    fn finish_event(&mut self, redraw: bool) -> ChartResult<bool> {
        if redraw {
            self.render()?;
        }
        Ok(redraw)
    }
}
