//! Charts module - Chart model and rendering

mod plotter;
mod renderer;
mod settings;

pub use plotter::{ChartPlotter, LineChart};
pub use renderer::StaticChartRenderer;
pub use settings::ViewerSettings;
