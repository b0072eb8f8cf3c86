//! kline-chart: interactive candlestick chart navigation engine.
//!
//! The crate maps a visible window of historical records onto a pixel grid,
//! drives that window from pointer and wheel input, and lays out the
//! cross-hair readout. Drawing is delegated to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
