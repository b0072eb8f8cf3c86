//! GTK4 embedding: a `DrawingArea` whose pointer controllers drive a
//! [`ChartEngine`] rendering into an offscreen Cairo surface.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk::prelude::*;
use gtk::{
    DrawingArea, EventControllerMotion, EventControllerScroll, EventControllerScrollFlags,
    GestureClick, glib,
};
use gtk4 as gtk;
use tracing::warn;

use crate::api::ChartEngine;
use crate::core::{Point, canvas_point};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

type SharedEngine = Rc<RefCell<ChartEngine<CairoRenderer>>>;

pub struct GtkChartAdapter {
    engine: SharedEngine,
    area: DrawingArea,
}

impl GtkChartAdapter {
    /// Wraps `engine` in a drawing area and renders the first frame.
    pub fn new(mut engine: ChartEngine<CairoRenderer>) -> ChartResult<Self> {
        engine.render()?;
        let viewport = engine.config().viewport;
        let pixel_ratio = engine.config().pixel_ratio;

        let area = DrawingArea::new();
        area.set_content_width((f64::from(viewport.width) / pixel_ratio).round() as i32);
        area.set_content_height((f64::from(viewport.height) / pixel_ratio).round() as i32);

        let engine = Rc::new(RefCell::new(engine));
        install_draw_func(&area, &engine, pixel_ratio);
        install_controllers(&area, &engine, pixel_ratio);
        Ok(Self { engine, area })
    }

    #[must_use]
    pub fn widget(&self) -> &DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    /// Re-renders after host-side changes (new records, panes) and repaints.
    pub fn refresh(&self) -> ChartResult<()> {
        self.engine.borrow_mut().render()?;
        self.area.queue_draw();
        Ok(())
    }
}

fn install_draw_func(area: &DrawingArea, engine: &SharedEngine, pixel_ratio: f64) {
    let engine = Rc::clone(engine);
    area.set_draw_func(move |_area, context, _width, _height| {
        let engine = engine.borrow();
        context.scale(1.0 / pixel_ratio, 1.0 / pixel_ratio);
        let painted = context
            .set_source_surface(engine.renderer().surface(), 0.0, 0.0)
            .and_then(|()| context.paint());
        if let Err(err) = painted {
            warn!(error = %err, "failed to paint chart surface");
        }
    });
}

fn install_controllers(area: &DrawingArea, engine: &SharedEngine, pixel_ratio: f64) {
    let last_pointer = Rc::new(Cell::new(Point::default()));
    let to_canvas = move |x: f64, y: f64| canvas_point(Point::new(x, y), Point::default(), pixel_ratio);

    let click = GestureClick::new();
    {
        let engine = Rc::clone(engine);
        let area = area.downgrade();
        click.connect_pressed(move |_gesture, _n_press, x, y| {
            let point = to_canvas(x, y);
            dispatch(&engine, &area, |engine| engine.pointer_down(point.x, point.y));
        });
    }
    {
        let engine = Rc::clone(engine);
        let area = area.downgrade();
        click.connect_released(move |_gesture, _n_press, x, y| {
            let point = to_canvas(x, y);
            dispatch(&engine, &area, |engine| engine.pointer_up(point.x, point.y));
        });
    }
    area.add_controller(click);

    let motion = EventControllerMotion::new();
    {
        let engine = Rc::clone(engine);
        let area = area.downgrade();
        let last_pointer = Rc::clone(&last_pointer);
        motion.connect_motion(move |_controller, x, y| {
            let point = to_canvas(x, y);
            last_pointer.set(point);
            dispatch(&engine, &area, |engine| engine.pointer_move(point.x, point.y));
        });
    }
    {
        let engine = Rc::clone(engine);
        let area = area.downgrade();
        motion.connect_leave(move |_controller| {
            let point = last_pointer.get();
            dispatch(&engine, &area, |engine| engine.pointer_leave(point.x, point.y));
        });
    }
    area.add_controller(motion);

    let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
    {
        let engine = Rc::clone(engine);
        let area = area.downgrade();
        // GTK reports scrolling toward the user (wheel down) as positive `dy`.
        scroll.connect_scroll(move |_controller, _dx, dy| {
            dispatch(&engine, &area, |engine| engine.wheel(-dy));
            glib::Propagation::Stop
        });
    }
    area.add_controller(scroll);
}

fn dispatch(
    engine: &SharedEngine,
    area: &glib::WeakRef<DrawingArea>,
    handler: impl FnOnce(&mut ChartEngine<CairoRenderer>) -> ChartResult<bool>,
) {
    let result = handler(&mut engine.borrow_mut());
    match result {
        Ok(true) => {
            if let Some(area) = area.upgrade() {
                area.queue_draw();
            }
        }
        Ok(false) => {}
        Err(err) => warn!(error = %err, "chart pointer event failed"),
    }
}
