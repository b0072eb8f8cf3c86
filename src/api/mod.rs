mod crosshair_render_frame_builder;
mod engine;
mod engine_config;
mod indicator_tooltip_builder;
mod pointer_navigator;

pub mod crosshair_positioner;

pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, CrosshairStyle, IndicatorDisplayRule, TooltipStyle, YAxisPosition,
    YAxisTextPosition,
};
pub use indicator_tooltip_builder::indicator_tooltip_entries;
pub use pointer_navigator::{PointerNavigator, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
