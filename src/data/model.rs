use serde::Serialize;

use crate::error::{AnalysisError, Result};

// ---------------------------------------------------------------------------
// WavenumberAxis – the shared x axis
// ---------------------------------------------------------------------------

/// Raman shift values (cm⁻¹), one per measurement point.
#[derive(Debug, Clone, PartialEq)]
pub struct WavenumberAxis {
    pub values: Vec<f64>,
}

impl WavenumberAxis {
    pub fn new(values: Vec<f64>) -> Self {
        WavenumberAxis { values }
    }

    /// Number of measurement points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SpectrumMatrix – N samples × P points
// ---------------------------------------------------------------------------

/// Measured spectra, one row per sample, aligned to the axis by column.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumMatrix {
    rows: Vec<Vec<f64>>,
    points: usize,
}

impl SpectrumMatrix {
    /// Build a matrix, rejecting rows whose length differs from the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let points = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != points) {
            return Err(AnalysisError::RaggedRow {
                origin: format!("sample {i}"),
                expected: points,
                found: row.len(),
            });
        }
        Ok(SpectrumMatrix { rows, points })
    }

    /// Number of samples (N).
    pub fn samples(&self) -> usize {
        self.rows.len()
    }

    /// Number of intensity points per sample (P).
    pub fn points(&self) -> usize {
        self.points
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

// ---------------------------------------------------------------------------
// ReferenceDataset – named spectra for lookup
// ---------------------------------------------------------------------------

/// Named reference spectra. `names[i]` labels `spectra[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceDataset {
    pub names: Vec<String>,
    pub spectra: Vec<Vec<f64>>,
}

impl ReferenceDataset {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn push(&mut self, name: String, spectrum: Vec<f64>) {
        self.names.push(name);
        self.spectra.push(spectrum);
    }

    /// Iterate `(name, spectrum)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.spectra.iter().map(Vec::as_slice))
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Element-wise mean over a subset of [`SpectrumMatrix`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageSpectrum {
    pub values: Vec<f64>,
    /// How many rows went into the mean (duplicates included).
    pub sample_count: usize,
}

/// One reference spectrum ranked by its distance to the average.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Row of the reference dataset.
    pub index: usize,
    pub name: String,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_reports_shape() {
        let m = SpectrumMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![3.0, 4.0, 5.0]]).unwrap();
        assert_eq!(m.samples(), 2);
        assert_eq!(m.points(), 3);
        assert_eq!(m.row(1), Some(&[3.0, 4.0, 5.0][..]));
        assert_eq!(m.row(2), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = SpectrumMatrix::from_rows(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        match err {
            AnalysisError::RaggedRow { expected, found, .. } => {
                assert_eq!((expected, found), (2, 1));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reference_iterates_in_row_order() {
        let mut r = ReferenceDataset::default();
        r.push("A".into(), vec![1.0]);
        r.push("B".into(), vec![2.0]);
        let names: Vec<&str> = r.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["A", "B"]);
    }
}
