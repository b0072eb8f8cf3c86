/// Font-metrics query used to size cross-hair tags and tooltip entries.
pub trait TextMeasurer {
    /// Width in pixels of `text` drawn at `font_size_px`.
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64;
}

/// Deterministic, backend-independent width estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EstimatedTextMeasurer;

impl TextMeasurer for EstimatedTextMeasurer {
    fn text_width_px(&self, text: &str, font_size_px: f64) -> f64 {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' | ':' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        (units * font_size_px).max(font_size_px)
    }
}
