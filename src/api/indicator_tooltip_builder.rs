use crate::core::{Record, StudyDescriptor, ViewportGeometry, format_fixed};
use crate::render::{RenderFrame, Renderer, TextPrimitive};

use super::{ChartEngine, IndicatorDisplayRule};

const TOOLTIP_LEFT_PADDING_PX: f64 = 6.0;
const TOOLTIP_TOP_PADDING_PX: f64 = 4.0;
const TOOLTIP_ENTRY_GAP_PX: f64 = 8.0;
const MISSING_VALUE: &str = "--";

/// `"<LABEL>: <value>"` entries for one study, in field order.
#[must_use]
pub fn indicator_tooltip_entries(descriptor: StudyDescriptor, record: &Record) -> Vec<String> {
    descriptor
        .labels
        .iter()
        .zip(descriptor.values(record))
        .map(|(label, value)| match value {
            Some(value) => format!("{label}: {}", format_fixed(value, descriptor.precision)),
            None => format!("{label}: {MISSING_VALUE}"),
        })
        .collect()
}

impl<R: Renderer> ChartEngine<R> {
    /// Appends the study readout at the top of every pane that carries a study.
    pub(super) fn append_indicator_tooltip_primitives(
        &self,
        frame: &mut RenderFrame,
        record: &Record,
    ) {
        let config = self.config();
        let visible = match config.tooltip.display_rule {
            IndicatorDisplayRule::Always => true,
            IndicatorDisplayRule::FollowCross => self.crosshair_state().visible,
            IndicatorDisplayRule::Never => false,
        };
        if !visible {
            return;
        }

        let font_size_px = config.tooltip.text_size * config.pixel_ratio;
        let colors = &config.tooltip.line_colors;
        let start_x = self.geometry().content_left() + TOOLTIP_LEFT_PADDING_PX;

        for pane in self.panes() {
            let Some(descriptor) = pane.study.and_then(|kind| self.studies().get(kind)) else {
                continue;
            };
            let y = pane.top + TOOLTIP_TOP_PADDING_PX;
            let mut x = start_x;
            for (index, text) in indicator_tooltip_entries(descriptor, record)
                .into_iter()
                .enumerate()
            {
                let width = self.text_measurer().text_width_px(&text, font_size_px);
                frame.texts.push(TextPrimitive::new(
                    text,
                    x,
                    y,
                    font_size_px,
                    colors
                        .get(index % colors.len().max(1))
                        .copied()
                        .unwrap_or(config.crosshair.text_color),
                ));
                x += TOOLTIP_ENTRY_GAP_PX + width;
            }
        }
    }
}
