use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use clap::ValueEnum;

use super::model::{ReferenceDataset, SpectrumMatrix, WavenumberAxis};
use crate::error::{AnalysisError, Result};

/// Whether the spectra file starts with a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderRow {
    /// Skip the first row only when it is not entirely numeric. A header of
    /// wavenumbers is read as data.
    Auto,
    /// Always skip the first row.
    Present,
    /// Every row is a sample.
    Absent,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the Raman shift axis: one float per line.
pub fn load_raman_shift(path: &Path) -> Result<WavenumberAxis> {
    let file = open(path)?;
    read_raman_shift(file, &path.display().to_string())
}

/// Load the intensity matrix: comma-separated floats, one sample per line.
pub fn load_spectra(path: &Path, header: HeaderRow) -> Result<SpectrumMatrix> {
    let file = open(path)?;
    read_spectra(file, &path.display().to_string(), header)
}

/// Load the reference dataset: a header row, then `name,intensity,...` rows.
pub fn load_reference(path: &Path) -> Result<ReferenceDataset> {
    let file = open(path)?;
    read_reference(file, &path.display().to_string())
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

pub fn read_raman_shift<R: Read>(input: R, name: &str) -> Result<WavenumberAxis> {
    let mut reader = csv_reader(input, false);
    let mut values = Vec::new();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        if record.len() != 1 {
            return Err(AnalysisError::RaggedRow {
                origin: origin(name, &record),
                expected: 1,
                found: record.len(),
            });
        }
        values.push(parse_float(&record[0], || origin(name, &record))?);
    }

    if values.is_empty() {
        return Err(AnalysisError::EmptyInput(name.to_string()));
    }
    log::debug!("{name}: {} Raman shift values", values.len());
    Ok(WavenumberAxis::new(values))
}

pub fn read_spectra<R: Read>(input: R, name: &str, header: HeaderRow) -> Result<SpectrumMatrix> {
    let mut reader = csv_reader(input, false);
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut first = true;

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        if first {
            first = false;
            let skip = match header {
                HeaderRow::Present => true,
                HeaderRow::Absent => false,
                HeaderRow::Auto => record.iter().any(|f| f.parse::<f64>().is_err()),
            };
            if skip {
                log::debug!("{name}: skipping header row");
                continue;
            }
        }

        let row = record
            .iter()
            .map(|tok| parse_float(tok, || origin(name, &record)))
            .collect::<Result<Vec<f64>>>()?;

        if let Some(expected) = rows.first().map(Vec::len) {
            if row.len() != expected {
                return Err(AnalysisError::RaggedRow {
                    origin: origin(name, &record),
                    expected,
                    found: row.len(),
                });
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(AnalysisError::EmptyInput(name.to_string()));
    }
    SpectrumMatrix::from_rows(rows)
}

pub fn read_reference<R: Read>(input: R, name: &str) -> Result<ReferenceDataset> {
    let mut reader = csv_reader(input, true);
    let mut dataset = ReferenceDataset::default();

    for result in reader.records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        let label = record[0].to_string();
        let spectrum = record
            .iter()
            .skip(1)
            .map(|tok| parse_float(tok, || origin(name, &record)))
            .collect::<Result<Vec<f64>>>()?;
        dataset.push(label, spectrum);
    }

    log::debug!("{name}: {} reference spectra", dataset.len());
    Ok(dataset)
}

// -- helpers --

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AnalysisError::FileNotFound(path.to_path_buf()),
        _ => AnalysisError::Io(e),
    })
}

fn csv_reader<R: Read>(input: R, has_headers: bool) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

fn origin(name: &str, record: &csv::StringRecord) -> String {
    match record.position() {
        Some(pos) => format!("{name} line {}", pos.line()),
        None => name.to_string(),
    }
}

fn parse_float(token: &str, origin: impl FnOnce() -> String) -> Result<f64> {
    token.parse::<f64>().map_err(|_| AnalysisError::Parse {
        origin: origin(),
        token: token.to_string(),
    })
}
