//! Chart Renderer
//! Validates coordinates, builds the chart model and hands it to a surface.

use crate::charts::{LineChart, ViewerSettings};
use crate::data::{ChartMetadata, Series};
use crate::error::ChartError;
use crate::gui::DisplaySurface;
use tracing::{debug, warn};

/// Renders line charts onto a single display surface.
///
/// Holds no state between calls beyond the surface itself, so rendering the
/// same input twice presents the same chart twice.
pub struct ChartRenderer<S> {
    surface: S,
    settings: ViewerSettings,
}

impl<S: DisplaySurface> ChartRenderer<S> {
    pub fn new(surface: S, settings: ViewerSettings) -> Self {
        Self { surface, settings }
    }

    /// Plot `(x[i], y[i])` joined in index order, labelled and titled.
    ///
    /// Input is validated before the surface is touched; an empty or ragged
    /// pair of sequences fails with [`ChartError::InputMismatch`]. NaN and
    /// infinite values are accepted and drawn as gaps.
    pub fn render(
        &mut self,
        x: &[f64],
        y: &[f64],
        x_label: &str,
        y_label: &str,
        title: &str,
    ) -> Result<(), ChartError> {
        let series = Series::new(x.to_vec(), y.to_vec()).inspect_err(|err| {
            warn!(%err, "rejected chart input");
        })?;
        self.render_series(&series, ChartMetadata::new(x_label, y_label, title))
    }

    /// Render an already validated series.
    pub fn render_series(
        &mut self,
        series: &Series,
        metadata: ChartMetadata,
    ) -> Result<(), ChartError> {
        if !series.is_x_increasing() {
            debug!("x values are not strictly increasing; line follows index order");
        }

        let chart = LineChart::new(series, metadata, self.settings.axis_padding);
        debug!(
            points = chart.points().len(),
            segments = chart.segments().count(),
            title = %chart.metadata().title,
            "presenting chart"
        );
        self.surface.present(&chart)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
