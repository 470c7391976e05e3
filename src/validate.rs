use crate::data::model::ReferenceDataset;
use crate::error::{AnalysisError, Result};

/// The intensity matrix must have one column per Raman shift value.
pub fn check_dimensions(axis_len: usize, spectrum_points: usize) -> Result<()> {
    if axis_len != spectrum_points {
        return Err(AnalysisError::DimensionMismatch {
            axis: axis_len,
            points: spectrum_points,
        });
    }
    Ok(())
}

/// Check requested sample indices against `count` and convert them.
/// Order and duplicates are kept.
pub fn check_indices(requested: &[i64], count: usize) -> Result<Vec<usize>> {
    requested
        .iter()
        .map(|&index| match usize::try_from(index) {
            Ok(i) if i < count => Ok(i),
            _ => Err(AnalysisError::IndexOutOfRange { index, count }),
        })
        .collect()
}

/// Every reference spectrum must be as wide as the averaged spectrum.
pub fn check_reference_width(reference: &ReferenceDataset, points: usize) -> Result<()> {
    match reference.iter().find(|(_, s)| s.len() != points) {
        Some((name, spectrum)) => Err(AnalysisError::ReferenceWidth {
            name: name.to_string(),
            expected: points,
            found: spectrum.len(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn matching_dimensions_pass() {
        assert!(check_dimensions(3, 3).is_ok());
    }

    #[test]
    fn every_mismatched_pair_is_rejected() {
        for (a, p) in [(0, 1), (1, 0), (3, 4), (1000, 999)] {
            let err = check_dimensions(a, p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Data);
        }
    }

    #[test]
    fn indices_in_range_keep_order_and_duplicates() {
        assert_eq!(check_indices(&[2, 0, 2], 3).unwrap(), vec![2, 0, 2]);
    }

    #[test]
    fn negative_and_overflowing_indices_are_rejected() {
        for bad in [-1, 3, 42, i64::MIN] {
            let err = check_indices(&[0, bad], 3).unwrap_err();
            match err {
                AnalysisError::IndexOutOfRange { index, count } => {
                    assert_eq!((index, count), (bad, 3));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn reference_width_names_the_offending_row() {
        let mut r = ReferenceDataset::default();
        r.push("ok".into(), vec![1.0, 2.0]);
        r.push("short".into(), vec![1.0]);
        let err = check_reference_width(&r, 2).unwrap_err();
        assert!(err.to_string().contains("'short'"));
        assert!(check_reference_width(&ReferenceDataset::default(), 2).is_ok());
    }
}
