//! Chart Window
//! Single-panel eframe application showing one line chart.

use crate::charts::{ChartPlotter, LineChart, ViewerSettings};
use egui::CentralPanel;

/// Main application window.
pub struct ChartWindow {
    chart: LineChart,
    settings: ViewerSettings,
}

impl ChartWindow {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        chart: LineChart,
        settings: ViewerSettings,
    ) -> Self {
        Self { chart, settings }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_line_chart(ui, &self.chart, &self.settings);
        });
    }
}
