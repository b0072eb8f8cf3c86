use serde::{Deserialize, Serialize};

use crate::core::{ContentInsets, DataBoundsConfig, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

/// Side of the content area that carries the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisPosition {
    Left,
    #[default]
    Right,
}

/// Whether value-axis text is drawn in the margin or over the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxisTextPosition {
    Inside,
    #[default]
    Outside,
}

/// When per-pane study values are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorDisplayRule {
    #[default]
    Always,
    /// Only while the cross-hair is displayed.
    FollowCross,
    Never,
}

/// Cross-hair lines and axis tags.
///
/// Sizes are logical pixels and are multiplied by the engine pixel ratio,
/// except `tag_margin_px` and widths which are canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairStyle {
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_dark_gray")]
    pub line_color: Color,
    #[serde(default)]
    pub line_style: LineStrokeStyle,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default = "default_light_gray")]
    pub text_color: Color,
    #[serde(default = "default_dark_gray")]
    pub tag_fill_color: Color,
    #[serde(default = "default_line_width")]
    pub tag_border_width: f64,
    #[serde(default = "default_light_gray")]
    pub tag_border_color: Color,
    #[serde(default = "default_tag_margin_px")]
    pub tag_margin_px: f64,
}

impl Default for CrosshairStyle {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            line_color: default_dark_gray(),
            line_style: LineStrokeStyle::Solid,
            text_size: default_text_size(),
            text_color: default_light_gray(),
            tag_fill_color: default_dark_gray(),
            tag_border_width: default_line_width(),
            tag_border_color: default_light_gray(),
            tag_margin_px: default_tag_margin_px(),
        }
    }
}

impl CrosshairStyle {
    pub fn validate(self) -> ChartResult<()> {
        validate_positive("crosshair line_width", self.line_width)?;
        validate_positive("crosshair text_size", self.text_size)?;
        validate_non_negative("crosshair tag_border_width", self.tag_border_width)?;
        validate_non_negative("crosshair tag_margin_px", self.tag_margin_px)?;
        for color in [
            self.line_color,
            self.text_color,
            self.tag_fill_color,
            self.tag_border_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("crosshair style: {err}")))?;
        }
        Ok(())
    }
}

/// Study value readout drawn at the top of each pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    #[serde(default)]
    pub display_rule: IndicatorDisplayRule,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    /// Colors assigned to study fields in order; reused cyclically.
    #[serde(default = "default_line_colors")]
    pub line_colors: Vec<Color>,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            display_rule: IndicatorDisplayRule::Always,
            text_size: default_text_size(),
            line_colors: default_line_colors(),
        }
    }
}

impl TooltipStyle {
    pub fn validate(&self) -> ChartResult<()> {
        validate_positive("tooltip text_size", self.text_size)?;
        if self.line_colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "tooltip line_colors must not be empty".to_owned(),
            ));
        }
        for color in &self.line_colors {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("tooltip style: {err}")))?;
        }
        Ok(())
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_content_insets")]
    pub content_insets: ContentInsets,
    #[serde(default)]
    pub data_bounds: DataBoundsConfig,
    #[serde(default)]
    pub y_axis_position: YAxisPosition,
    #[serde(default)]
    pub y_axis_text_position: YAxisTextPosition,
    /// Canvas pixels per logical pixel.
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
    #[serde(default)]
    pub crosshair: CrosshairStyle,
    #[serde(default)]
    pub tooltip: TooltipStyle,
}

impl ChartEngineConfig {
    /// Creates a config with default insets, window limits and styles.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            content_insets: default_content_insets(),
            data_bounds: DataBoundsConfig::default(),
            y_axis_position: YAxisPosition::default(),
            y_axis_text_position: YAxisTextPosition::default(),
            pixel_ratio: default_pixel_ratio(),
            crosshair: CrosshairStyle::default(),
            tooltip: TooltipStyle::default(),
        }
    }

    #[must_use]
    pub fn with_content_insets(mut self, insets: ContentInsets) -> Self {
        self.content_insets = insets;
        self
    }

    #[must_use]
    pub fn with_data_bounds(mut self, data_bounds: DataBoundsConfig) -> Self {
        self.data_bounds = data_bounds;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, position: YAxisPosition, text: YAxisTextPosition) -> Self {
        self.y_axis_position = position;
        self.y_axis_text_position = text;
        self
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub fn with_crosshair_style(mut self, style: CrosshairStyle) -> Self {
        self.crosshair = style;
        self
    }

    #[must_use]
    pub fn with_tooltip_style(mut self, style: TooltipStyle) -> Self {
        self.tooltip = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.content_insets.validate()?;
        self.data_bounds.validate()?;
        validate_positive("pixel_ratio", self.pixel_ratio)?;
        self.crosshair.validate()?;
        self.tooltip.validate()
    }

    /// Parses and validates a JSON config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to serialize config: {err}")))
    }
}

fn validate_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_content_insets() -> ContentInsets {
    ContentInsets::new(0.0, 0.0, 120.0, 56.0)
}

fn default_pixel_ratio() -> f64 {
    2.0
}

fn default_line_width() -> f64 {
    1.0
}

fn default_text_size() -> f64 {
    12.0
}

fn default_tag_margin_px() -> f64 {
    6.0
}

fn default_dark_gray() -> Color {
    Color::rgb8(0x50, 0x50, 0x50)
}

fn default_light_gray() -> Color {
    Color::rgb8(0xED, 0xED, 0xED)
}

fn default_line_colors() -> Vec<Color> {
    vec![
        Color::rgb8(0xD8, 0xD8, 0xD8),
        Color::rgb8(0xF5, 0xA6, 0x23),
        Color::rgb8(0xF6, 0x01, 0xFF),
        Color::rgb8(0x15, 0x87, 0xDD),
        Color::rgb8(0x50, 0xE3, 0xC2),
    ]
}
