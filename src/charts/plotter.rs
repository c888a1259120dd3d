//! Chart Plotter Module
//! Builds the line chart model and draws it interactively using egui_plot.

use crate::charts::ViewerSettings;
use crate::data::{ChartMetadata, Series};
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints, Points};
use std::ops::Range;

/// Line and marker color
pub const LINE_COLOR: Color32 = Color32::from_rgb(31, 119, 180); // Blue

/// Largest magnitude an axis bound may take; keeps `end - start` finite.
const AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Immutable chart model: points in index order plus padded axis ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    points: Vec<[f64; 2]>,
    metadata: ChartMetadata,
    x_range: Range<f64>,
    y_range: Range<f64>,
}

impl LineChart {
    pub fn new(series: &Series, metadata: ChartMetadata, axis_padding: f64) -> Self {
        Self {
            points: series.points(),
            metadata,
            x_range: padded_range(series.x(), axis_padding),
            y_range: padded_range(series.y(), axis_padding),
        }
    }

    /// All points in index order, including ones that cannot be drawn.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Points with both coordinates finite, one marker each.
    pub fn markers(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.points.iter().copied().filter(is_drawable)
    }

    /// Maximal stretches of consecutive drawable points.
    /// A NaN or infinite coordinate ends one stretch and leaves a gap.
    pub fn runs(&self) -> impl Iterator<Item = &[[f64; 2]]> + '_ {
        self.points
            .split(|p| !is_drawable(p))
            .filter(|run| !run.is_empty())
    }

    /// Straight segments joining consecutive points in index order.
    pub fn segments(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
        self.runs()
            .flat_map(|run| run.windows(2).map(|w| (w[0], w[1])))
    }

    pub fn has_line(&self) -> bool {
        self.segments().next().is_some()
    }

    pub fn metadata(&self) -> &ChartMetadata {
        &self.metadata
    }

    pub fn x_range(&self) -> Range<f64> {
        self.x_range.clone()
    }

    pub fn y_range(&self) -> Range<f64> {
        self.y_range.clone()
    }
}

fn is_drawable(point: &[f64; 2]) -> bool {
    point[0].is_finite() && point[1].is_finite()
}

/// Min/max of the finite `values` widened by `padding` times the span.
///
/// Values are clamped to [`AXIS_LIMIT`] first, so both bounds and the span
/// between them stay finite; points beyond the limit fall outside the plot.
/// A zero span widens by at least one unit each side, and an axis with no
/// finite value at all gets `0..1`.
fn padded_range(values: &[f64], padding: f64) -> Range<f64> {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(-AXIS_LIMIT, AXIS_LIMIT))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * padding.clamp(0.0, 0.5)
    } else {
        (min.abs() * 1e-3).max(1.0)
    };
    (min - pad)..(max + pad)
}

/// Draws line charts into an egui UI.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the title above an interactive plot filling the remaining space.
    pub fn draw_line_chart(ui: &mut egui::Ui, chart: &LineChart, settings: &ViewerSettings) {
        let metadata = chart.metadata();

        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&metadata.title).size(18.0).strong());
        });
        ui.add_space(6.0);

        let x_range = chart.x_range();
        let y_range = chart.y_range();

        Plot::new("line_chart")
            .x_axis_label(metadata.x_label.as_str())
            .y_axis_label(metadata.y_label.as_str())
            .default_x_bounds(x_range.start, x_range.end)
            .default_y_bounds(y_range.start, y_range.end)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for run in chart.runs().filter(|run| run.len() > 1) {
                    plot_ui.line(
                        Line::new("", PlotPoints::from(run.to_vec()))
                            .color(LINE_COLOR)
                            .width(settings.line_width),
                    );
                }

                plot_ui.points(
                    Points::new("", PlotPoints::from_iter(chart.markers()))
                        .radius(settings.marker_radius)
                        .color(LINE_COLOR),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::scalability;

    #[test]
    fn recorded_scenario_builds_expected_chart() {
        let series = scalability::series().unwrap();
        let chart = LineChart::new(&series, scalability::metadata(), 0.05);

        assert_eq!(chart.points().len(), 22);
        assert_eq!(chart.segments().count(), 21);
        assert_eq!(chart.metadata().x_label, "Number of qubits in superposition");
        assert_eq!(chart.metadata().y_label, "Simulation time (ms)");
        assert_eq!(chart.metadata().title, "Scalability with number of qubits");
    }

    #[test]
    fn single_point_has_marker_and_no_segment() {
        let series = Series::new(vec![5.0], vec![42.0]).unwrap();
        let chart = LineChart::new(&series, ChartMetadata::new("x", "y", "t"), 0.05);

        assert_eq!(chart.points(), &[[5.0, 42.0]]);
        assert_eq!(chart.segments().count(), 0);
        assert!(!chart.has_line());
        assert_eq!(chart.x_range(), 4.0..6.0);
        assert_eq!(chart.y_range(), 41.0..43.0);
    }

    #[test]
    fn segments_follow_index_order() {
        let series = Series::new(vec![3.0, 1.0, 2.0], vec![0.0, 10.0, 5.0]).unwrap();
        let chart = LineChart::new(&series, ChartMetadata::new("x", "y", "t"), 0.1);

        let segments: Vec<_> = chart.segments().collect();
        assert_eq!(
            segments,
            vec![([3.0, 0.0], [1.0, 10.0]), ([1.0, 10.0], [2.0, 5.0])]
        );
        assert_eq!(chart.y_range(), -1.0..11.0);
    }

    #[test]
    fn extreme_magnitudes_keep_ranges_finite() {
        let series = Series::new(vec![-1e308, 1e308], vec![0.0, f64::MAX]).unwrap();
        let chart = LineChart::new(&series, ChartMetadata::new("x", "y", "t"), 0.05);

        for range in [chart.x_range(), chart.y_range()] {
            assert!(range.start.is_finite() && range.end.is_finite());
            assert!((range.end - range.start).is_finite());
            assert!(range.start < range.end);
        }
    }

    #[test]
    fn huge_constant_axis_does_not_collapse() {
        let series = Series::new(vec![1.0, 2.0], vec![1e308, 1e308]).unwrap();
        let chart = LineChart::new(&series, ChartMetadata::new("x", "y", "t"), 0.05);

        let y = chart.y_range();
        assert!(y.start < y.end);
        assert!((y.end - y.start).is_finite());
    }

    #[test]
    fn non_finite_point_splits_the_line() {
        let series = Series::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![1.0, 2.0, f64::NAN, 4.0, 5.0],
        )
        .unwrap();
        let chart = LineChart::new(&series, ChartMetadata::new("x", "y", "t"), 0.0);

        assert_eq!(chart.points().len(), 5);
        assert_eq!(chart.markers().count(), 4);
        assert_eq!(chart.runs().count(), 2);
        assert_eq!(
            chart.segments().collect::<Vec<_>>(),
            vec![([1.0, 1.0], [2.0, 2.0]), ([4.0, 4.0], [5.0, 5.0])]
        );
        assert_eq!(chart.y_range(), 1.0..5.0);
    }

    #[test]
    fn all_non_finite_axis_falls_back_to_unit_range() {
        let series = Series::new(vec![1.0, 2.0], vec![f64::NAN, f64::INFINITY]).unwrap();
        let chart = LineChart::new(&series, ChartMetadata::new("x", "y", "t"), 0.05);

        assert_eq!(chart.y_range(), 0.0..1.0);
        assert_eq!(chart.markers().count(), 0);
        assert!(!chart.has_line());
    }
}
