use serde::{Deserialize, Serialize};

use super::{FeatureMatrix, RecommenderError};

/// How the reference and candidate matrices are scaled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalerFit {
    /// One scaler fitted on the whole catalog scales both matrices
    #[default]
    Shared,
    /// Favourites and catalog each get their own scaler; a favourite then
    /// no longer sits at distance zero from its own catalog row
    Independent,
}

/// Per-column min-max scaler onto `[0, 1]`
///
/// A column whose minimum equals its maximum scales to `0.0` on every row.
/// Values outside the fitted range are not clipped and land outside `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    data_min: Vec<f64>,
    data_max: Vec<f64>,
}

impl MinMaxScaler {
    /// Computes the minimum and maximum of each column
    ///
    /// Fitting a matrix without rows yields a scaler that maps every value to
    /// zero.
    pub fn fit(x: &FeatureMatrix) -> Self {
        let (rows, cols) = x.shape();
        if rows == 0 {
            return Self {
                data_min: vec![0.0; cols],
                data_max: vec![0.0; cols],
            };
        }

        let mut data_min = vec![f64::INFINITY; cols];
        let mut data_max = vec![f64::NEG_INFINITY; cols];

        for row in 0..rows {
            for (col, value) in x.row(row).iter().enumerate() {
                data_min[col] = data_min[col].min(*value);
                data_max[col] = data_max[col].max(*value);
            }
        }

        Self { data_min, data_max }
    }

    /// Scales `x` with the fitted column ranges
    pub fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix, RecommenderError> {
        let cols = x.cols();
        if cols != self.data_min.len() {
            return Err(RecommenderError::DimensionMismatch {
                expected: self.data_min.len(),
                actual: cols,
            });
        }

        Ok(self.scale_matrix(x))
    }

    /// Fits on `x` and scales it in one step
    pub fn fit_transform(x: &FeatureMatrix) -> FeatureMatrix {
        Self::fit(x).scale_matrix(x)
    }

    pub fn data_min(&self) -> &[f64] {
        &self.data_min
    }

    pub fn data_max(&self) -> &[f64] {
        &self.data_max
    }

    fn scale_matrix(&self, x: &FeatureMatrix) -> FeatureMatrix {
        let mut scaled = FeatureMatrix::zeros(x.rows(), x.cols());
        for row in 0..x.rows() {
            for (col, value) in x.row(row).iter().enumerate() {
                let range = self.data_max[col] - self.data_min[col];
                if range > 0.0 {
                    scaled.set(row, col, (value - self.data_min[col]) / range);
                }
            }
        }
        scaled
    }
}
