use std::path::PathBuf;

use crate::analysis::{average, average_all, closest_matches};
use crate::data::loader::{load_raman_shift, load_reference, load_spectra, HeaderRow};
use crate::data::model::{AverageSpectrum, Match, SpectrumMatrix, WavenumberAxis};
use crate::error::Result;
use crate::selection::{parse_indices, SelectionSource};
use crate::validate::{check_dimensions, check_indices, check_reference_width};

/// Raw samples drawn next to the average in `average` runs.
pub const PREVIEW_SAMPLES: usize = 5;
/// Of those, how many get a legend entry.
pub const PREVIEW_LABELLED: usize = 3;

/// `match` spectra files carry one header row.
pub const MATCH_SPECTRA_HEADER: HeaderRow = HeaderRow::Present;
/// `average` spectra files are all samples.
pub const AVERAGE_SPECTRA_HEADER: HeaderRow = HeaderRow::Absent;

// ---------------------------------------------------------------------------
// Run results
// ---------------------------------------------------------------------------

/// One raw spectrum to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Row in the spectra file.
    pub sample: usize,
    /// Legend label; `None` keeps the trace out of the legend.
    pub label: Option<String>,
    pub intensities: Vec<f64>,
}

/// Everything the renderer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub title: String,
    pub axis: WavenumberAxis,
    pub traces: Vec<Trace>,
    pub average: AverageSpectrum,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub plot: PlotData,
    pub matches: Vec<Match>,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub raman_shift: PathBuf,
    pub spectra: PathBuf,
    pub reference: PathBuf,
    pub spectra_header: HeaderRow,
    pub top: usize,
}

#[derive(Debug, Clone)]
pub struct AverageOptions {
    pub raman_shift: PathBuf,
    pub spectra: PathBuf,
    pub spectra_header: HeaderRow,
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// Average user-selected samples and rank the reference dataset against them.
pub fn run_match(opts: &MatchOptions, source: &mut dyn SelectionSource) -> Result<MatchOutcome> {
    let axis = load_raman_shift(&opts.raman_shift)?;
    let spectra = load_spectra(&opts.spectra, opts.spectra_header)?;
    let reference = load_reference(&opts.reference)?;
    check_dimensions(axis.len(), spectra.points())?;
    log::info!(
        "Loaded {} samples x {} points, {} reference spectra",
        spectra.samples(),
        spectra.points(),
        reference.len()
    );

    let requested = parse_indices(&source.read_selection()?)?;
    let selected = check_indices(&requested, spectra.samples())?;
    let avg = average(&spectra, &selected)?;
    log::debug!("Averaged samples {selected:?}");

    check_reference_width(&reference, avg.values.len())?;
    let matches = closest_matches(&avg.values, &reference, opts.top);
    log::info!("Ranked {} reference spectra, kept {}", reference.len(), matches.len());

    let traces = selected
        .iter()
        .map(|&i| trace(&spectra, i, Some(format!("Sample {}", i + 1))))
        .collect();

    Ok(MatchOutcome {
        plot: PlotData {
            title: "Raman Spectra (Selected Samples and Average)".to_string(),
            axis,
            traces,
            average: avg,
        },
        matches,
    })
}

/// Average every sample; preview the first few raw spectra.
pub fn run_average(opts: &AverageOptions) -> Result<PlotData> {
    let axis = load_raman_shift(&opts.raman_shift)?;
    let spectra = load_spectra(&opts.spectra, opts.spectra_header)?;
    check_dimensions(axis.len(), spectra.points())?;
    log::info!("Loaded {} samples x {} points", spectra.samples(), spectra.points());

    let avg = average_all(&spectra)?;

    let traces = (0..spectra.samples().min(PREVIEW_SAMPLES))
        .map(|i| {
            let label = (i < PREVIEW_LABELLED).then(|| format!("Sample {}", i + 1));
            trace(&spectra, i, label)
        })
        .collect();

    Ok(PlotData {
        title: "Raman Spectra (Individual Samples and Average)".to_string(),
        axis,
        traces,
        average: avg,
    })
}

fn trace(spectra: &SpectrumMatrix, sample: usize, label: Option<String>) -> Trace {
    Trace {
        sample,
        label,
        intensities: spectra.row(sample).map(<[f64]>::to_vec).unwrap_or_default(),
    }
}
