//! Display Surfaces
//! Where a finished chart is presented: a native window or an in-memory image.

use crate::charts::{LineChart, StaticChartRenderer, ViewerSettings};
use crate::error::ChartError;
use crate::gui::ChartWindow;
use eframe::egui;
use image::RgbImage;
use std::ffi::OsString;
use tracing::{debug, info};

/// Environment variables that point at a running display server.
const DISPLAY_VARS: [&str; 2] = ["WAYLAND_DISPLAY", "DISPLAY"];

/// Target a chart is presented on.
pub trait DisplaySurface {
    fn present(&mut self, chart: &LineChart) -> Result<(), ChartError>;
}

/// Native window; `present` blocks until the window is closed.
pub struct WindowSurface {
    settings: ViewerSettings,
}

impl WindowSurface {
    pub fn new(settings: ViewerSettings) -> Self {
        Self { settings }
    }

    fn native_options(&self, title: &str) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.settings.window_size)
                .with_min_inner_size(self.settings.min_window_size)
                .with_title(title),
            ..Default::default()
        }
    }
}

impl DisplaySurface for WindowSurface {
    fn present(&mut self, chart: &LineChart) -> Result<(), ChartError> {
        if !display_server_available() {
            return Err(ChartError::RenderBackendUnavailable(
                "no display server found (neither WAYLAND_DISPLAY nor DISPLAY is set)".to_string(),
            ));
        }

        let title = chart.metadata().title.clone();
        let options = self.native_options(&title);
        let chart = chart.clone();
        let settings = self.settings.clone();

        info!(title = %title, "opening chart window");
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, chart, settings)))),
        )
        .map_err(ChartError::backend)?;

        debug!("chart window closed");
        Ok(())
    }
}

/// Off-screen raster kept in memory; the last rendered image is retained.
pub struct ImageSurface {
    settings: ViewerSettings,
    image: Option<RgbImage>,
}

impl ImageSurface {
    pub fn new(settings: ViewerSettings) -> Self {
        Self {
            settings,
            image: None,
        }
    }

    /// Most recently presented chart, if any.
    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }
}

impl DisplaySurface for ImageSurface {
    fn present(&mut self, chart: &LineChart) -> Result<(), ChartError> {
        let image = StaticChartRenderer::render_image(chart, &self.settings)?;
        debug!(
            width = image.width(),
            height = image.height(),
            "chart rasterized"
        );
        self.image = Some(image);
        Ok(())
    }
}

/// Whether a windowing backend can plausibly start on this host.
fn display_server_available() -> bool {
    if cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    )) {
        has_display_variable(|key| std::env::var_os(key))
    } else {
        // Windows and macOS always have a compositor
        true
    }
}

fn has_display_variable(lookup: impl Fn(&str) -> Option<OsString>) -> bool {
    DISPLAY_VARS
        .iter()
        .any(|key| lookup(key).is_some_and(|value| !value.is_empty()))
}
