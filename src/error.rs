use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// AnalysisError – every failure a run can end with
// ---------------------------------------------------------------------------

/// Errors returned by the loading, validation and computation stages.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A required input file does not exist.
    #[error("File not found - {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Mismatch: {axis} Raman shifts vs. {points} intensity points per sample.")]
    DimensionMismatch { axis: usize, points: usize },

    #[error("Selected sample indices are out of range. Index {index} is not in 0..{count}.")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("No samples selected.")]
    EmptySelection,

    /// Numeric text that does not parse. `origin` names the file and line.
    #[error("{origin}: could not convert '{token}' to a number")]
    Parse { origin: String, token: String },

    #[error("{origin}: expected {expected} values, found {found}")]
    RaggedRow {
        origin: String,
        expected: usize,
        found: usize,
    },

    #[error("{0} contains no data")]
    EmptyInput(String),

    #[error("Reference spectrum '{name}' has {found} points, expected {expected}")]
    ReferenceWidth {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),
}

/// The three outcomes a failed run is reported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    Data,
    Unexpected,
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        use AnalysisError::*;
        match self {
            FileNotFound(_) => ErrorKind::FileNotFound,
            DimensionMismatch { .. }
            | IndexOutOfRange { .. }
            | EmptySelection
            | Parse { .. }
            | RaggedRow { .. }
            | EmptyInput(_)
            | ReferenceWidth { .. } => ErrorKind::Data,
            // Undecodable text is bad input, not an I/O fault.
            Csv(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => ErrorKind::Data,
            Io(_) | Csv(_) => ErrorKind::Unexpected,
        }
    }

    /// Human-readable one-line report, prefixed by the error kind.
    pub fn report(&self) -> String {
        match self.kind() {
            ErrorKind::FileNotFound => format!("Error: {self}"),
            ErrorKind::Data => format!("Data Error: {self}"),
            ErrorKind::Unexpected => format!("Unexpected Error: {self}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_report_names_the_path() {
        let err = AnalysisError::FileNotFound(PathBuf::from("spectra.csv"));
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.report(), "Error: File not found - spectra.csv");
    }

    #[test]
    fn mismatch_is_a_data_error() {
        let err = AnalysisError::DimensionMismatch { axis: 3, points: 4 };
        assert_eq!(err.kind(), ErrorKind::Data);
        assert_eq!(
            err.report(),
            "Data Error: Mismatch: 3 Raman shifts vs. 4 intensity points per sample."
        );
    }

    #[test]
    fn out_of_range_report_keeps_the_familiar_lead_in() {
        let err = AnalysisError::IndexOutOfRange { index: 7, count: 3 };
        assert_eq!(
            err.report(),
            "Data Error: Selected sample indices are out of range. Index 7 is not in 0..3."
        );
    }

    #[test]
    fn invalid_utf8_is_a_data_error() {
        let input: &[u8] = b"1,2\n\xff,3\n";
        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(input);
        let err = reader
            .records()
            .find_map(|r| r.err())
            .expect("second record is not UTF-8");
        let err = AnalysisError::from(err);
        assert_eq!(err.kind(), ErrorKind::Data);
        assert!(err.report().starts_with("Data Error: "));
    }

    #[test]
    fn io_failures_are_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no input");
        let err = AnalysisError::from(io);
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.report().starts_with("Unexpected Error: "));
    }
}
