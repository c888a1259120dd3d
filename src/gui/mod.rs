//! GUI module - Display surfaces and the chart renderer

mod app;
mod chart_renderer;
mod surface;

pub use app::ChartWindow;
pub use chart_renderer::ChartRenderer;
pub use surface::{DisplaySurface, ImageSurface, WindowSurface};
