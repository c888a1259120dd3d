//! Qubit Scaling Chart - Shows how simulation time grows with qubit count.

use anyhow::Context;
use qubit_scaling_chart::data::scalability;
use qubit_scaling_chart::{ChartRenderer, ViewerSettings, WindowSurface};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ViewerSettings::default();
    let mut renderer = ChartRenderer::new(WindowSurface::new(settings.clone()), settings);

    let x = scalability::QUBIT_COUNTS.map(f64::from);
    let y = scalability::SIMULATION_TIME_MS.map(f64::from);

    info!(points = x.len(), "rendering scalability chart");
    renderer
        .render(
            &x,
            &y,
            scalability::X_LABEL,
            scalability::Y_LABEL,
            scalability::TITLE,
        )
        .context("failed to display scalability chart")?;

    Ok(())
}
