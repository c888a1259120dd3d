//! Static Chart Renderer
//! Rasterizes a line chart off-screen with plotters.
//!
//! Layout:
//! 1. Title centered at the top
//! 2. Plot area with mesh, tick labels and axis descriptions
//! 3. Line through the points in index order, broken at non-finite values,
//!    one filled marker per drawable point
//!
//! The image only lives in memory; nothing is written to disk.

use crate::charts::{LineChart, ViewerSettings};
use crate::error::ChartError;
use image::RgbImage;
use plotters::prelude::*;

// Same blue as the interactive plot
const LINE_RGB: RGBColor = RGBColor(31, 119, 180);

const TITLE_FONT_SIZE: u32 = 24;
const LABEL_FONT_SIZE: u32 = 16;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the chart into an RGB image of `settings.image_size`.
    pub fn render_image(
        chart: &LineChart,
        settings: &ViewerSettings,
    ) -> Result<RgbImage, ChartError> {
        let (width, height) = settings.image_size;
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        Self::draw(&mut buffer, chart, settings)?;

        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::backend("bitmap buffer does not match image size"))
    }

    fn draw(
        buffer: &mut [u8],
        chart: &LineChart,
        settings: &ViewerSettings,
    ) -> Result<(), ChartError> {
        let metadata = chart.metadata();
        let root = BitMapBackend::with_buffer(buffer, settings.image_size).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::backend)?;

        let mut plot = ChartBuilder::on(&root)
            .caption(&metadata.title, ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(chart.x_range(), chart.y_range())
            .map_err(ChartError::backend)?;

        plot
            .configure_mesh()
            .x_desc(metadata.x_label.as_str())
            .y_desc(metadata.y_label.as_str())
            .axis_desc_style(("sans-serif", LABEL_FONT_SIZE))
            .draw()
            .map_err(ChartError::backend)?;

        let stroke = LINE_RGB.stroke_width(settings.line_width.round().max(1.0) as u32);
        for run in chart.runs().filter(|run| run.len() > 1) {
            plot
                .draw_series(LineSeries::new(run.iter().map(|p| (p[0], p[1])), stroke))
                .map_err(ChartError::backend)?;
        }

        let radius = settings.marker_radius.round().max(1.0) as u32;
        plot.draw_series(
            chart
                .markers()
                .map(|p| Circle::new((p[0], p[1]), radius, LINE_RGB.filled())),
        )
        .map_err(ChartError::backend)?;

        root.present().map_err(ChartError::backend)?;
        Ok(())
    }
}
