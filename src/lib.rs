//! Qubit Scaling Chart - Simulation time against number of qubits
//!
//! Renders a line chart of recorded simulation timings, either in a native
//! window or into an in-memory image.

pub mod charts;
pub mod data;
pub mod error;
pub mod gui;

pub use charts::{LineChart, ViewerSettings};
pub use data::{ChartMetadata, Series};
pub use error::{ChartError, InputMismatch};
pub use gui::{ChartRenderer, DisplaySurface, ImageSurface, WindowSurface};
