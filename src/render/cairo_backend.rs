use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, EstimatedTextMeasurer, RenderFrame, Renderer, TextMeasurer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub polygons_drawn: usize,
    pub texts_drawn: usize,
}

/// Offscreen Cairo renderer; text is laid out with PangoCairo.
///
/// Lines are stroked first, then tag boxes and flags, then labels, so text
/// always sits on top of its tag.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.set_dash(line.stroke_style.dash_pattern(), 0.0);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            fill_and_stroke(context, rect.fill_color, rect.border_width, rect.border_color)?;
            stats.rects_drawn += 1;
        }

        for polygon in &frame.polygons {
            let mut points = polygon.points.iter();
            if let Some(first) = points.next() {
                context.move_to(first.x, first.y);
            }
            for point in points {
                context.line_to(point.x, point.y);
            }
            context.close_path();
            fill_and_stroke(
                context,
                polygon.fill_color,
                polygon.border_width,
                polygon.border_color,
            )?;
            stats.polygons_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&font_description(text.font_size_px)));
            layout.set_text(&text.text);

            apply_color(context, text.color);
            context.move_to(text.x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

/// Measures text with Pango on a private 1x1 surface.
#[derive(Debug)]
pub struct PangoTextMeasurer {
    context: Context,
}

impl PangoTextMeasurer {
    pub fn new() -> ChartResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measuring surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measuring context", err))?;
        Ok(Self { context })
    }
}

impl TextMeasurer for PangoTextMeasurer {
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64 {
        if text.is_empty() {
            return EstimatedTextMeasurer.text_width_px(text, font_size_px);
        }
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&font_description(font_size_px)));
        layout.set_text(text);
        f64::from(layout.pixel_size().0)
    }
}

fn font_description(font_size_px: f64) -> FontDescription {
    FontDescription::from_string(&format!("Sans {font_size_px}px"))
}

fn fill_and_stroke(
    context: &Context,
    fill_color: Color,
    border_width: f64,
    border_color: Color,
) -> ChartResult<()> {
    apply_color(context, fill_color);
    if border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill shape", err))?;
        apply_color(context, border_color);
        context.set_line_width(border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke shape border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill shape", err))?;
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
