//! Fixed presentation parameters for both display surfaces.

/// Window and image geometry plus line styling.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    /// Initial window inner size in logical points
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Off-screen raster size in pixels
    pub image_size: (u32, u32),
    pub line_width: f32,
    pub marker_radius: f32,
    /// Fraction of the data span added on each side of an axis
    pub axis_padding: f64,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            window_size: [1000.0, 650.0],
            min_window_size: [640.0, 420.0],
            image_size: (1000, 650),
            line_width: 1.5,
            marker_radius: 3.0,
            axis_padding: 0.05,
        }
    }
}
