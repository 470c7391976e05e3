use crate::data::model::{AverageSpectrum, SpectrumMatrix};
use crate::error::{AnalysisError, Result};

/// Element-wise mean of the rows at `indices`.
///
/// Each occurrence of an index counts once, so `[0, 0, 1]` weights row 0
/// twice. Indices are expected to be validated already; an index past the
/// end is still reported rather than panicking.
pub fn average(matrix: &SpectrumMatrix, indices: &[usize]) -> Result<AverageSpectrum> {
    if indices.is_empty() {
        return Err(AnalysisError::EmptySelection);
    }

    let mut sums = vec![0.0; matrix.points()];
    for &i in indices {
        let row = matrix.row(i).ok_or(AnalysisError::IndexOutOfRange {
            index: i as i64,
            count: matrix.samples(),
        })?;
        for (sum, &v) in sums.iter_mut().zip(row) {
            *sum += v;
        }
    }

    let n = indices.len() as f64;
    Ok(AverageSpectrum {
        values: sums.into_iter().map(|s| s / n).collect(),
        sample_count: indices.len(),
    })
}

/// Mean over every row of the matrix.
pub fn average_all(matrix: &SpectrumMatrix) -> Result<AverageSpectrum> {
    let all: Vec<usize> = (0..matrix.samples()).collect();
    average(matrix, &all)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> SpectrumMatrix {
        SpectrumMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn averages_both_rows() {
        let m = matrix(&[&[1.0, 2.0, 3.0], &[3.0, 4.0, 5.0]]);
        let avg = average(&m, &[0, 1]).unwrap();
        assert_close(&avg.values, &[2.0, 3.0, 4.0]);
        assert_eq!(avg.sample_count, 2);
    }

    #[test]
    fn subset_mean_matches_per_column_mean() {
        let m = matrix(&[
            &[1.0, 10.0, -4.0, 0.5],
            &[2.0, 20.0, 4.0, 0.25],
            &[7.0, 0.0, 9.0, 1.0],
            &[-3.0, 5.0, 1.0, 2.0],
        ]);
        let selected = [0, 2, 3];
        let avg = average(&m, &selected).unwrap();
        for j in 0..m.points() {
            let col: Vec<f64> = selected.iter().map(|&i| m.row(i).unwrap()[j]).collect();
            let expected = col.iter().sum::<f64>() / col.len() as f64;
            assert!((avg.values[j] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn duplicate_indices_are_weighted() {
        let m = matrix(&[&[0.0], &[3.0]]);
        let avg = average(&m, &[1, 1, 0]).unwrap();
        assert_close(&avg.values, &[2.0]);
    }

    #[test]
    fn single_row_is_returned_unchanged() {
        let m = matrix(&[&[1.5, 2.5], &[9.0, 9.0]]);
        assert_close(&average(&m, &[0]).unwrap().values, &[1.5, 2.5]);
    }

    #[test]
    fn empty_selection_is_an_error() {
        let m = matrix(&[&[1.0]]);
        assert!(matches!(average(&m, &[]), Err(AnalysisError::EmptySelection)));
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let m = matrix(&[&[1.0]]);
        assert!(matches!(
            average(&m, &[1]),
            Err(AnalysisError::IndexOutOfRange { index: 1, count: 1 })
        ));
    }

    #[test]
    fn average_all_uses_every_row() {
        let m = matrix(&[&[1.0, 1.0], &[2.0, 3.0], &[3.0, 5.0]]);
        let avg = average_all(&m).unwrap();
        assert_close(&avg.values, &[2.0, 3.0]);
        assert_eq!(avg.sample_count, 3);
    }
}
