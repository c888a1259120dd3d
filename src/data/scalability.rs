//! Simulation timings recorded for growing superposition sizes.

use super::{ChartMetadata, Series};
use crate::error::InputMismatch;

/// Qubits placed in superposition, one entry per run.
pub const QUBIT_COUNTS: [u32; 22] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
];

/// Wall-clock simulation time in milliseconds for each entry of [`QUBIT_COUNTS`].
pub const SIMULATION_TIME_MS: [u32; 22] = [
    1, 0, 0, 0, 0, 0, 0, 0, 2, 4, 5, 13, 25, 50, 101, 209, 446, 892, 1852, 3345, 6537, 14064,
];

pub const X_LABEL: &str = "Number of qubits in superposition";
pub const Y_LABEL: &str = "Simulation time (ms)";
pub const TITLE: &str = "Scalability with number of qubits";

pub fn series() -> Result<Series, InputMismatch> {
    Series::from_integers(&QUBIT_COUNTS, &SIMULATION_TIME_MS)
}

pub fn metadata() -> ChartMetadata {
    ChartMetadata::new(X_LABEL, Y_LABEL, TITLE)
}
