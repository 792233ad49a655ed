//! Tabular input for transformers.

use crate::error::PreprocessingError;
use ndarray::{s, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// 2-D table of `f64` samples (rows) by features (columns), with optional
/// column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    values: Array2<f64>,
    columns: Option<Vec<String>>,
}

impl Frame {
    pub fn new(values: Array2<f64>) -> Self {
        Self {
            values,
            columns: None,
        }
    }

    /// Named columns; there must be exactly one name per column.
    pub fn with_columns<S: Into<String>>(
        values: Array2<f64>,
        columns: impl IntoIterator<Item = S>,
    ) -> Result<Self, PreprocessingError> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.len() != values.ncols() {
            return Err(PreprocessingError::InvalidParameter {
                name: "columns".to_string(),
                reason: format!(
                    "got {} names for {} columns",
                    columns.len(),
                    values.ncols()
                ),
            });
        }
        Ok(Self {
            values,
            columns: Some(columns),
        })
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn columns(&self) -> Option<&[String]> {
        self.columns.as_deref()
    }

    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.values.ncols()
    }

    pub fn into_values(self) -> Array2<f64> {
        self.values
    }

    /// Every `step`-th row starting at row 0, keeping column names.
    pub fn every_nth_row(&self, step: usize) -> Frame {
        let step = step.max(1) as isize;
        Self {
            values: self.values.slice(s![..;step, ..]).to_owned(),
            columns: self.columns.clone(),
        }
    }
}

impl From<Array2<f64>> for Frame {
    fn from(values: Array2<f64>) -> Self {
        Self::new(values)
    }
}
