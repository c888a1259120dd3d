//! Series and Chart Metadata
//! Validated plot coordinates and the labels drawn around them.

use crate::error::InputMismatch;

/// Ordered X/Y coordinates of equal, non-zero length.
///
/// Points keep their index order; nothing here sorts or deduplicates.
/// NaN and infinite values are kept and show up as gaps in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Build a series, rejecting empty or ragged input.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InputMismatch> {
        if x.len() != y.len() {
            return Err(InputMismatch::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(InputMismatch::Empty);
        }

        Ok(Self { x, y })
    }

    /// Convenience for integer-valued data such as qubit counts and millisecond timings.
    pub fn from_integers(x: &[u32], y: &[u32]) -> Result<Self, InputMismatch> {
        Self::new(
            x.iter().map(|&v| f64::from(v)).collect(),
            y.iter().map(|&v| f64::from(v)).collect(),
        )
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Points as `[x, y]` pairs in index order.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// True when X strictly increases, i.e. the line reads left to right.
    pub fn is_x_increasing(&self) -> bool {
        self.x.windows(2).all(|w| w[0] < w[1])
    }
}

/// Axis labels and title of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMetadata {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl ChartMetadata {
    pub fn new(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_length_input_is_accepted() {
        let series = Series::new(vec![1.0, 2.0, 3.0], vec![-4.0, 0.0, 9.5]).unwrap();
        assert_eq!(series.x().len(), 3);
        assert_eq!(series.points(), vec![[1.0, -4.0], [2.0, 0.0], [3.0, 9.5]]);
    }

    #[test]
    fn ragged_input_is_rejected() {
        let err = Series::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err, InputMismatch::LengthMismatch { x_len: 2, y_len: 1 });
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Series::new(vec![], vec![]).unwrap_err(), InputMismatch::Empty);
    }

    #[test]
    fn non_finite_values_are_kept() {
        let series = Series::new(vec![1.0, 2.0, 3.0], vec![1.0, f64::NAN, 3.0]).unwrap();
        assert!(series.y()[1].is_nan());

        let series = Series::new(vec![f64::INFINITY], vec![0.0]).unwrap();
        assert_eq!(series.x(), &[f64::INFINITY]);
    }

    #[test]
    fn index_order_is_preserved() {
        let series = Series::new(vec![3.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();
        assert_eq!(series.x(), &[3.0, 1.0, 2.0]);
        assert!(!series.is_x_increasing());
    }

    #[test]
    fn integer_constructor_converts_values() {
        let series = Series::from_integers(&[2, 3], &[1, 0]).unwrap();
        assert_eq!(series.y(), &[1.0, 0.0]);
        assert!(series.is_x_increasing());
    }
}
